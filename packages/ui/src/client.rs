//! Platform-appropriate client construction.

use api::{ApiClient, ApiConfig, Session};

/// Build the client backed by the right token store for the platform:
/// browser local storage on the web, an in-memory store elsewhere.
pub fn make_client() -> ApiClient {
    #[cfg(target_arch = "wasm32")]
    {
        ApiClient::new(
            ApiConfig::from_env(),
            Session::new(api::storage::BrowserStore::new()),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ApiClient::new(
            ApiConfig::from_env(),
            Session::new(api::storage::MemoryStore::new()),
        )
    }
}
