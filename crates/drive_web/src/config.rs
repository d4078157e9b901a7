//! Compile-time API configuration.

/// Backend base URL used when `CLOUDDRIVE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the REST backend lives.
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    /// Creates a config for `base_url`; trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if trimmed.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    /// Reads `CLOUDDRIVE_API_URL` captured at compile time.
    pub fn from_env() -> Self {
        Self::new(option_env!("CLOUDDRIVE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Backend base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/files?type=all`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_doubling_slashes() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.url("/files"), "https://api.example.com/files");
        assert_eq!(config.url("files"), "https://api.example.com/files");
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_URL);
        assert_eq!(ApiConfig::default().url("/login"), "http://localhost:3001/login");
    }
}
