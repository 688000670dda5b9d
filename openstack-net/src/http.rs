use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, OpenStackNetConfigurationOptions};

/// Global knobs for the HTTP client every service request goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    pub timeout: Duration,

    /// `None` leaves the connect phase bounded only by `timeout`.
    pub connect_timeout: Option<Duration>,

    /// Sent on every request. `User-Agent` is owned by the options and ignored here.
    pub default_headers: Vec<(String, String)>,

    /// Non-2xx statuses callers should treat as success.
    pub allowed_statuses: Vec<u16>,

    pub gzip: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(100),
            connect_timeout: None,
            default_headers: Vec::new(),
            allowed_statuses: Vec::new(),
            gzip: true,
        }
    }
}

impl HttpSettings {
    pub fn reset_defaults(&mut self) {
        *self = Self::default();
    }

    pub fn is_success(&self, status: u16) -> bool {
        (200..300).contains(&status) || self.allowed_statuses.contains(&status)
    }

    pub fn header_map(
        &self,
        options: &OpenStackNetConfigurationOptions,
    ) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            if header_name == USER_AGENT {
                continue;
            }
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.append(header_name, header_value);
        }

        let agent = options.user_agent_header();
        if !agent.is_empty() {
            // product tokens are validated on construction
            let value = HeaderValue::from_str(&agent).map_err(|e| ConfigError::InvalidHeader {
                name: USER_AGENT.as_str().to_string(),
                reason: e.to_string(),
            })?;
            headers.insert(USER_AGENT, value);
        }
        Ok(headers)
    }

    pub fn build_client(
        &self,
        options: &OpenStackNetConfigurationOptions,
    ) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(self.header_map(options)?)
            .timeout(self.timeout)
            .gzip(self.gzip);
        if let Some(connect) = self.connect_timeout {
            builder = builder.connect_timeout(connect);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductInfo;

    #[test]
    fn test_success_range_and_allowed_statuses() {
        let mut settings = HttpSettings::default();
        assert!(settings.is_success(204));
        assert!(!settings.is_success(404));

        settings.allowed_statuses.push(404);
        assert!(settings.is_success(404));
        assert!(!settings.is_success(500));
    }

    #[test]
    fn test_header_map_carries_user_agent_and_defaults() {
        let mut settings = HttpSettings::default();
        settings
            .default_headers
            .push(("X-Auth-Project".into(), "demo".into()));
        settings
            .default_headers
            .push(("user-agent".into(), "ignored/1".into()));

        let options = OpenStackNetConfigurationOptions {
            user_agents: vec![
                ProductInfo::new("a", Some("1")).unwrap(),
                ProductInfo::new("b", None).unwrap(),
            ],
        };
        let headers = settings.header_map(&options).unwrap();

        assert_eq!(headers.get(USER_AGENT).unwrap(), "a/1 b");
        assert_eq!(headers.get("x-auth-project").unwrap(), "demo");
        assert_eq!(headers.get_all(USER_AGENT).iter().count(), 1);
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let mut settings = HttpSettings::default();
        settings
            .default_headers
            .push(("bad header".into(), "v".into()));

        let err = settings
            .header_map(&OpenStackNetConfigurationOptions::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { name, .. } if name == "bad header"));
    }

    #[test]
    fn test_build_client() {
        let settings = HttpSettings {
            connect_timeout: Some(Duration::from_secs(5)),
            ..HttpSettings::default()
        };
        let client = settings
            .build_client(&OpenStackNetConfigurationOptions::default())
            .unwrap();

        // use_rustls_tls only exists with a tls backend compiled in
        let request = client
            .get("https://identity.api.rackspacecloud.com/v2.0")
            .build()
            .unwrap();
        assert_eq!(request.url().scheme(), "https");
    }

    #[test]
    fn test_reset_defaults() {
        let mut settings = HttpSettings::default();
        settings.timeout = Duration::from_secs(1);
        settings.gzip = false;
        settings.reset_defaults();
        assert_eq!(settings, HttpSettings::default());
    }
}
