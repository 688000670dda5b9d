use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum NullValueHandling {
    Include,
    Ignore,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Formatting {
    Compact,
    Indented,
}

/// Serializer behavior applied to every request and response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSettings {
    pub null_values: NullValueHandling,
    pub formatting: Formatting,
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self {
            null_values: NullValueHandling::Ignore,
            formatting: Formatting::Compact,
        }
    }
}

impl JsonSettings {
    pub fn reset_defaults(&mut self) {
        *self = Self::default();
    }

    pub fn to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, ConfigError> {
        let mut value = serde_json::to_value(value)?;
        if self.null_values == NullValueHandling::Ignore {
            strip_nulls(&mut value);
        }
        Ok(value)
    }

    pub fn to_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ConfigError> {
        let value = self.to_value(value)?;
        let rendered = match self.formatting {
            Formatting::Compact => serde_json::to_string(&value)?,
            Formatting::Indented => serde_json::to_string_pretty(&value)?,
        };
        Ok(rendered)
    }

    pub fn from_str<T: DeserializeOwned>(&self, raw: &str) -> Result<T, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// Drops null object members at any depth. Nulls inside arrays keep their slot.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Server {
        name: String,
        image: Option<String>,
        tags: Vec<Option<String>>,
    }

    #[test]
    fn test_ignore_strips_nested_nulls() {
        let settings = JsonSettings::default();
        let value = json!({"a": null, "b": {"c": null, "d": 1}, "e": [null, {"f": null}]});
        let out = settings.to_value(&value).unwrap();
        assert_eq!(out, json!({"b": {"d": 1}, "e": [null, {}]}));
    }

    #[test]
    fn test_include_keeps_nulls() {
        let settings = JsonSettings {
            null_values: NullValueHandling::Include,
            ..JsonSettings::default()
        };
        let server = Server {
            name: "web".into(),
            image: None,
            tags: vec![],
        };
        assert_eq!(
            settings.to_string(&server).unwrap(),
            r#"{"image":null,"name":"web","tags":[]}"#
        );
    }

    #[test]
    fn test_indented_output() {
        let settings = JsonSettings {
            formatting: Formatting::Indented,
            ..JsonSettings::default()
        };
        let out = settings.to_string(&json!({"k": 1})).unwrap();
        assert_eq!(out, "{\n  \"k\": 1\n}");
    }

    #[test]
    fn test_from_str_reports_json_error() {
        let settings = JsonSettings::default();
        let parsed: Server = settings
            .from_str(r#"{"name":"db","image":"ubuntu","tags":["x",null]}"#)
            .unwrap();
        assert_eq!(parsed.tags, vec![Some("x".to_string()), None]);

        let err = settings.from_str::<Server>("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
