use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use openstack_net::{
    Formatting, HttpSettings, JsonSettings, NullValueHandling, ProductInfo, TraceLevel,
};
use serde::{Deserialize, Serialize};

use crate::{RackspaceNet, RackspaceNetConfigurationOptions};

/// On-disk form of the start-up configuration. Every field is optional.
///
/// ```toml
/// user_agents = ["my-app/2.1"]
///
/// [http]
/// timeout_secs = 30
/// headers = { "X-Project" = "demo" }
///
/// [json]
/// indented = true
///
/// [tracing]
/// http_level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Appended after the built-in `rackspace.net` product.
    pub user_agents: Vec<ProductInfo>,
    pub http: HttpSection,
    pub json: JsonSection,
    pub tracing: TracingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub gzip: Option<bool>,
    pub headers: BTreeMap<String, String>,
    pub allowed_statuses: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonSection {
    pub ignore_nulls: Option<bool>,
    pub indented: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingSection {
    pub http_level: Option<TraceLevel>,
}

impl Settings {
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p),
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {:?}", path.as_ref()))?;
        let settings: Settings =
            toml::from_str(&raw).with_context(|| "parsing rackspace.net settings TOML")?;
        Ok(settings)
    }

    pub fn apply_http(&self, http: &mut HttpSettings) {
        let section = &self.http;
        if let Some(secs) = section.timeout_secs {
            http.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = section.connect_timeout_secs {
            http.connect_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(gzip) = section.gzip {
            http.gzip = gzip;
        }
        http.default_headers.extend(
            section
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        http.allowed_statuses
            .extend(section.allowed_statuses.iter().copied());
    }

    pub fn apply_json(&self, json: &mut JsonSettings) {
        if let Some(ignore) = self.json.ignore_nulls {
            json.null_values = if ignore {
                NullValueHandling::Ignore
            } else {
                NullValueHandling::Include
            };
        }
        if let Some(indented) = self.json.indented {
            json.formatting = if indented {
                Formatting::Indented
            } else {
                Formatting::Compact
            };
        }
    }

    pub fn apply_options(&self, options: &mut RackspaceNetConfigurationOptions) {
        for product in &self.user_agents {
            options.add_user_agent(product.clone());
        }
    }

    /// Runs [`RackspaceNet::configure`] with these settings. A no-op if already configured,
    /// except for the trace level which is a runtime switch.
    pub fn configure(&self, rackspace: &RackspaceNet) {
        if let Some(level) = self.tracing.http_level {
            rackspace.tracing().http.set_level(level);
        }
        rackspace.configure(
            Some(|http: &mut HttpSettings| self.apply_http(http)),
            Some(|json: &mut JsonSettings| self.apply_json(json)),
            Some(|options: &mut RackspaceNetConfigurationOptions| self.apply_options(options)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_gives_defaults() {
        let settings = Settings::load_or_default(None::<&Path>).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_all_sections() {
        let raw = r#"
            user_agents = ["my-app/2.1", "plugin"]

            [http]
            timeout_secs = 30
            connect_timeout_secs = 3
            gzip = false
            headers = { "X-Project" = "demo" }
            allowed_statuses = [404]

            [json]
            ignore_nulls = false
            indented = true

            [tracing]
            http_level = "verbose"
        "#;
        let settings: Settings = toml::from_str(raw).unwrap();
        assert_eq!(settings.user_agents.len(), 2);
        assert_eq!(settings.tracing.http_level, Some(TraceLevel::Verbose));

        let mut http = HttpSettings::default();
        settings.apply_http(&mut http);
        assert_eq!(http.timeout, Duration::from_secs(30));
        assert_eq!(http.connect_timeout, Some(Duration::from_secs(3)));
        assert!(!http.gzip);
        assert_eq!(http.default_headers, vec![("X-Project".to_string(), "demo".to_string())]);
        assert!(http.is_success(404));

        let mut json = JsonSettings::default();
        settings.apply_json(&mut json);
        assert_eq!(json.null_values, NullValueHandling::Include);
        assert_eq!(json.formatting, Formatting::Indented);
    }

    #[test]
    fn test_empty_sections_leave_defaults() {
        let settings: Settings = toml::from_str("[http]\n[json]\n").unwrap();
        let mut http = HttpSettings::default();
        settings.apply_http(&mut http);
        assert_eq!(http, HttpSettings::default());

        let mut json = JsonSettings::default();
        settings.apply_json(&mut json);
        assert_eq!(json, JsonSettings::default());
    }

    #[test]
    fn test_invalid_user_agent_fails_to_parse() {
        let err = toml::from_str::<Settings>(r#"user_agents = ["bad agent/1"]"#).unwrap_err();
        assert!(err.to_string().contains("bad agent"));
    }
}
