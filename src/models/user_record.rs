use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the remote `/users` listing, kept exactly as the server sent it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub enabled: bool,
    pub authorities: Vec<String>,
}

impl UserRecord {
    /// True when `role` is granted, either verbatim or with the `ROLE_` prefix.
    pub fn has_authority(&self, role: &str) -> bool {
        self.authorities.iter().any(|a| {
            a == role || a.strip_prefix("ROLE_").is_some_and(|bare| bare == role)
        })
    }
}

// Keep the secret out of logs
impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("enabled", &self.enabled)
            .field("authorities", &self.authorities)
            .finish()
    }
}
