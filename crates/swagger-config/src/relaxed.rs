use config::{Map, Source, Value, ValueKind};

/// Tables whose keys are user data rather than property names.
const MAP_PROPERTIES: &[&str] = &["scopes"];

/// Wraps a source so `group-name`, `groupName` and `group_name` bind the
/// same property.
///
/// Keys are rewritten to snake_case before `config` merges sources, which
/// keeps file values and `SWAGGER__*` overrides on the same key. Keys
/// inside map-valued properties such as `scopes` are left untouched.
#[derive(Debug, Clone)]
pub struct Relaxed<S> {
    inner: S,
}

impl<S> Relaxed<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Source for Relaxed<S>
where
    S: Source + Clone + Send + Sync + 'static,
{
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        Ok(normalize_table(self.inner.collect()?))
    }
}

fn normalize_table(table: Map<String, Value>) -> Map<String, Value> {
    table
        .into_iter()
        .map(|(key, value)| {
            let key = relaxed_key(&key);
            if MAP_PROPERTIES.contains(&key.as_str()) {
                (key, value)
            } else {
                (key, normalize_value(value))
            }
        })
        .collect()
}

/// `group-name`, `groupName` and `GroupName` all become `group_name`.
fn relaxed_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut after_word = false;
    for c in key.chars() {
        if c == '-' {
            out.push('_');
            after_word = false;
        } else if c.is_ascii_uppercase() {
            if after_word {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            after_word = false;
        } else {
            out.push(c);
            after_word = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

fn normalize_value(mut value: Value) -> Value {
    value.kind = match std::mem::replace(&mut value.kind, ValueKind::Nil) {
        ValueKind::Table(table) => ValueKind::Table(normalize_table(table)),
        ValueKind::Array(items) => {
            ValueKind::Array(items.into_iter().map(normalize_value).collect())
        }
        other => other,
    };
    value
}
