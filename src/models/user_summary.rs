use serde::{Deserialize, Serialize};

use crate::models::user_record::UserRecord;

/// JSON shape served to browsers: a [`UserRecord`] without its secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub enabled: bool,
    pub authorities: Vec<String>,
}

impl From<&UserRecord> for UserSummary {
    fn from(rec: &UserRecord) -> Self {
        UserSummary {
            username: rec.username.clone(),
            enabled: rec.enabled,
            authorities: rec.authorities.clone(),
        }
    }
}
