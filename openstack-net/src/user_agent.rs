/*
product         = token [ "/" product-version ]
product-version = token
token           = 1*<visible ASCII except separators>
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ConfigError;

const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={} \t";

/// One product token of a `User-Agent` header, e.g. `openstack.net/1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductInfo {
    name: String,
    version: Option<String>,
}

impl ProductInfo {
    pub fn new(name: &str, version: Option<&str>) -> Result<Self, ConfigError> {
        validate_token(name, "product name is not a valid token")?;
        if let Some(v) = version {
            validate_token(v, "product version is not a valid token")?;
        }
        Ok(Self {
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }

    /// For build-time products whose parts are known to be valid tokens.
    pub fn from_static(name: &'static str, version: &'static str) -> Self {
        debug_assert!(is_token(name) && is_token(version));
        Self {
            name: name.to_string(),
            version: Some(version.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for ProductInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}/{}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for ProductInfo {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((name, version)) => ProductInfo::new(name, Some(version)).map_err(|e| match e {
                ConfigError::InvalidUserAgent { reason, .. } => ConfigError::InvalidUserAgent {
                    value: s.to_string(),
                    reason,
                },
                other => other,
            }),
            None => ProductInfo::new(s, None),
        }
    }
}

impl Serialize for ProductInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProductInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b))
}

fn validate_token(s: &str, reason: &'static str) -> Result<(), ConfigError> {
    if is_token(s) {
        Ok(())
    } else {
        Err(ConfigError::InvalidUserAgent {
            value: s.to_string(),
            reason,
        })
    }
}
