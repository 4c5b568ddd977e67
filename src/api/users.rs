use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::api::client::{log_request, log_response};
use crate::error::ApiError;
use crate::models::UserRecord;

/// Path appended to the configured API root.
pub const USERS_PATH: &str = "/users";

/// Read-only accessor for the remote users collection.
///
/// Holds the shared HTTP client and the resource address, composed once at
/// construction. The base address is used verbatim; a malformed value only
/// surfaces when a request is issued.
#[derive(Clone)]
pub struct UserDataSource {
    client: reqwest::Client,
    api_url: String,
}

impl UserDataSource {
    pub fn new(client: reqwest::Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: format!("{}{}", api_url, USERS_PATH),
        }
    }

    /// Resource address every request goes to.
    pub fn resource_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the full users list.
    ///
    /// The returned future is cold: no request leaves until it is polled, and
    /// every call produces an independent future that performs its own GET.
    /// It resolves exactly once, either to the list as sent by the server or to
    /// the transport/status/decode error. Errors never degrade to an empty list.
    pub fn get_all(&self) -> BoxFuture<'static, Result<Vec<UserRecord>, ApiError>> {
        let client = self.client.clone();
        let url = self.api_url.clone();
        async move { fetch_users(&client, &url).await }.boxed()
    }
}

async fn fetch_users(client: &reqwest::Client, url: &str) -> Result<Vec<UserRecord>, ApiError> {
    log_request("GET", url);
    tracing::debug!(url, "Fetching users");

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    log_response(status.as_u16(), &body);

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), url, "Users endpoint returned an error");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let users: Vec<UserRecord> =
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    tracing::info!(count = users.len(), "Fetched users");
    Ok(users)
}
