/// Fixed production chat webhook endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://pruebas.paseandoporvenezuela.com/webhook/fca17f77-7c13-4a6b-b08b-ebb9eb650568/chat";

/// Demo credential the backend expects on every request.
pub const DEFAULT_USERNAME: &str = "demo";
pub const DEFAULT_PASSWORD: &str = "omed";

/// Webhook transport configuration.
///
/// The endpoint and credential are deployment constants with compiled-in
/// defaults; env vars exist as overrides only. No timeout is applied unless
/// `timeout_secs` is set — the upstream behavior is an unbounded wait.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub timeout_secs: Option<u64>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            timeout_secs: None,
        }
    }
}

impl WebhookConfig {
    /// Load configuration from environment variables with the fixed defaults.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("TURISMO_WEBHOOK_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            username: std::env::var("TURISMO_WEBHOOK_USER")
                .unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
            password: std::env::var("TURISMO_WEBHOOK_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
            timeout_secs: std::env::var("TURISMO_WEBHOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}
