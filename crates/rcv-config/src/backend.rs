//! Backend-as-a-service connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default HTTP timeout in seconds.
const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anonymous key, used for end-user scoped calls.
    #[serde(default)]
    pub anon_key: String,

    /// Elevated service-role key. Required for administrative operations
    /// such as the governance sweep.
    #[serde(default)]
    pub service_role_key: String,

    /// Optional CDN base for public asset URLs.
    #[serde(default)]
    pub cdn_url: String,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            service_role_key: String::new(),
            cdn_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if the config has a URL and at least one key.
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if a service-role key is available.
    pub fn has_service_key(&self) -> bool {
        !self.service_role_key.is_empty()
    }

    /// Key used for end-user scoped calls: anon key, else the service key.
    pub fn public_key(&self) -> &str {
        if self.anon_key.is_empty() {
            &self.service_role_key
        } else {
            &self.anon_key
        }
    }

    /// Project URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// CDN base without a trailing slash, if configured.
    pub fn cdn_base(&self) -> Option<&str> {
        let cdn = self.cdn_url.trim_end_matches('/');
        (!cdn.is_empty()).then_some(cdn)
    }

    /// Verify the minimum required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] when the URL is empty or when
    /// neither key is set, and [`ConfigError::InvalidValue`] when the URL is
    /// not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                field: "backend.url".into(),
                hint: "set RCV_BACKEND__URL".into(),
            });
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.url".into(),
                reason: format!("'{}' is not an http(s) URL", self.url),
            });
        }
        if self.anon_key.is_empty() && self.service_role_key.is_empty() {
            return Err(ConfigError::MissingValue {
                field: "backend.anon_key".into(),
                hint: "set RCV_BACKEND__ANON_KEY or RCV_BACKEND__SERVICE_ROLE_KEY".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 15);
        assert!(!config.has_service_key());
        assert!(config.cdn_base().is_none());
    }

    #[test]
    fn missing_url_is_reported_first() {
        let config = BackendConfig {
            anon_key: "anon".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { ref field, .. } if field == "backend.url"));
    }

    #[test]
    fn missing_both_keys_is_an_error() {
        let config = BackendConfig {
            url: "https://proj.supabase.co".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SERVICE_ROLE_KEY"));
    }

    #[test]
    fn service_key_alone_is_enough() {
        let config = BackendConfig {
            url: "https://proj.supabase.co".into(),
            service_role_key: "service".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.public_key(), "service");
    }

    #[test]
    fn non_http_url_is_invalid() {
        let config = BackendConfig {
            url: "proj.supabase.co".into(),
            anon_key: "anon".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = BackendConfig {
            url: "https://proj.supabase.co/".into(),
            cdn_url: "https://cdn.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://proj.supabase.co");
        assert_eq!(config.cdn_base(), Some("https://cdn.example.com"));
    }
}
