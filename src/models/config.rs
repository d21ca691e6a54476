//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the quick-search server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the dashboard REST API queried by the search sources.
    pub backend_url: String,
    /// Bearer token attached to backend requests.
    #[serde(default)]
    pub backend_token: Option<String>,
}
