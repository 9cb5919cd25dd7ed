use std::path::{Path, PathBuf};

use config::{Map, Source, Value, ValueKind};
use hocon::{Hocon, HoconLoader};

/// A HOCON file exposed as a `config` source.
///
/// Going through `config` lets HOCON files take environment overrides the
/// same way YAML/TOML/JSON files do.
#[derive(Debug, Clone)]
pub struct HoconSource {
    path: PathBuf,
    required: bool,
}

impl HoconSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    fn load(&self) -> Result<Hocon, String> {
        HoconLoader::new()
            .load_file(&self.path)
            .map_err(|e| format!("failed to load {}: {}", self.path.display(), e))?
            .hocon()
            .map_err(|e| format!("failed to resolve {}: {}", self.path.display(), e))
    }
}

impl Source for HoconSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        if !self.path.exists() {
            if self.required {
                return Err(config::ConfigError::NotFound(
                    self.path.display().to_string(),
                ));
            }
            return Ok(Map::new());
        }

        let origin = self.path.display().to_string();
        match self
            .load()
            .map_err(|msg| config::ConfigError::Foreign(msg.into()))?
        {
            Hocon::Hash(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| (key, to_value(&origin, value)))
                .collect()),
            _ => Err(config::ConfigError::Foreign(
                format!("{} does not contain a HOCON object at its root", origin).into(),
            )),
        }
    }
}

fn to_value(origin: &String, hocon: Hocon) -> Value {
    let kind = match hocon {
        Hocon::Boolean(b) => ValueKind::Boolean(b),
        Hocon::Integer(i) => ValueKind::I64(i),
        Hocon::Real(f) => ValueKind::Float(f),
        Hocon::String(s) => ValueKind::String(s),
        Hocon::Array(items) => {
            ValueKind::Array(items.into_iter().map(|v| to_value(origin, v)).collect())
        }
        Hocon::Hash(entries) => ValueKind::Table(
            entries
                .into_iter()
                .map(|(key, value)| (key, to_value(origin, value)))
                .collect(),
        ),
        Hocon::Null | Hocon::BadValue(_) => ValueKind::Nil,
    };
    Value::new(Some(origin), kind)
}
