use std::env;
use std::net::SocketAddr;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4200;
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_url() -> String {
    sanitize_base_url(&env::var("API_URL").unwrap_or_default())
}

/// Basic credentials, only when both halves are present and non-empty.
pub fn get_api_credentials() -> Option<(String, String)> {
    let user = env::var("API_USERNAME").unwrap_or_default();
    let pass = env::var("API_PASSWORD").unwrap_or_default();
    if user.trim().is_empty() || pass.is_empty() {
        return None;
    }
    Some((user.trim().to_string(), pass))
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_listen_addr(host: &str, port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
    format!("{}:{}", host, port).parse()
}
