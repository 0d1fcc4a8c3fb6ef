//! Configuration constants and runtime client configuration.

/// Base URL of the Typekit JSON API.
pub const API_BASE_URL: &str = "https://typekit.com/api/v1/json";

/// Header carrying the authentication token on every request.
pub const TOKEN_HEADER: &str = "X-Typekit-Token";

/// Environment variable read for the token when `--token` is not given.
pub const TOKEN_ENV: &str = "TYPEKIT_TOKEN";

/// Environment variable overriding [`API_BASE_URL`].
pub const API_URL_ENV: &str = "TYPEKIT_API_URL";

/// Domain a new kit is published on when none is given.
pub const DEFAULT_DOMAIN: &str = "localhost";

/// HTTP statuses the API uses for success.
pub const SUCCESS_STATUSES: [u16; 2] = [200, 302];

/// Settings a [`Client`](crate::Client) is constructed with.
///
/// Read-only once the client exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    /// Emit request and response diagnostics through the logger.
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: API_BASE_URL.to_owned(),
            debug: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Full URL for an API path such as `/kits`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
