pub mod telemetry;

pub use telemetry::{init_telemetry, LOG_FORMAT_VAR};
