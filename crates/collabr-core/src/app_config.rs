/// Injected configuration for the collabr client stack.
///
/// The remote backend endpoint and identity-provider endpoint are environment
/// concerns, not design decisions; everything here is read once at startup
/// via [`crate::load_app_config`] and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the marketplace backend (e.g. `https://api.example.com`).
    pub backend_url: String,
    /// Base URL of the external identity provider, when one is configured.
    pub identity_url: Option<String>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// Chunk size used when streaming blob uploads, in bytes.
    pub upload_chunk_bytes: usize,
    pub log_level: String,
}
