//! Shared networking constants and helpers used by client and server.

/// Default HTTP port of the quote server.
pub const DEFAULT_PORT: u16 = 3000;
/// Default bind host of the quote server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default base URL used by the client.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
/// Route of the quote endpoint.
pub const QUOTE_PATH: &str = "/api/quote";
/// Route of the liveness endpoint.
pub const HEALTH_PATH: &str = "/";
/// Plain-text body returned by the liveness endpoint.
pub const HEALTH_MESSAGE: &str = "Fair Insurance Backend is running.";

/// Helper to format a host with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Join a server base URL with the quote route, tolerating a trailing slash.
pub fn quote_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), QUOTE_PATH)
}
