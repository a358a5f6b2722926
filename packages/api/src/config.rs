//! Client configuration.

/// Production backend origin.
pub const DEFAULT_BASE_URL: &str = "https://payment-app-backend-dulq.onrender.com";

/// Where the client sends its requests.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at an explicit origin (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Default config, honouring a `NEONPAY_API_URL` override on native
    /// builds. The browser build always talks to the production origin.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var("NEONPAY_API_URL") {
            if !url.trim().is_empty() {
                return Self::with_base_url(url.trim().trim_end_matches('/'));
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_base_url() {
        let cfg = ApiConfig::with_base_url("http://localhost:3000");
        assert_eq!(cfg.base_url, "http://localhost:3000");
    }
}
