use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::ApiError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Build the shared HTTP client. Everything every request should carry
/// (user agent, accept type, basic credentials, timeout) is set here once.
pub fn build_http_client(credentials: Option<(&str, &str)>) -> Result<reqwest::Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some((user, pass)) = credentials {
        let token = STANDARD.encode(format!("{}:{}", user, pass));
        let mut value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|e| ApiError::Network(format!("Invalid credentials header: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    reqwest::Client::builder()
        .user_agent(format!("roster/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(ApiError::from)
}

/// Echo an outgoing request as a colored curl command line.
pub fn log_request(method: &str, url: &str) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!(
        "{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
    ));
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Echo the response status and a dimmed copy of the body.
pub fn log_response(status: u16, body: &str) {
    let status_str = if (200..300).contains(&status) {
        Paint::new(status.to_string()).green().to_string()
    } else {
        Paint::new(status.to_string()).red().to_string()
    };
    let body_str = Paint::new(body).rgb(100, 100, 100).to_string();
    log_output(format!("Response ({}):\n{}", status_str, body_str));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_with_and_without_credentials() {
        assert!(build_http_client(None).is_ok());
        assert!(build_http_client(Some(("admin", "secret"))).is_ok());
    }
}
