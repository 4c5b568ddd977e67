use serde::{Deserialize, Serialize};

use crate::models::user_record::UserRecord;

const MASK: &str = "••••••";

/// Flattened, display-ready projection of a [`UserRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub username: String,
    pub status: String,
    pub authorities: String,
    pub secret: String,
}

impl UserRow {
    pub fn from_record(rec: &UserRecord, show_secret: bool) -> Self {
        UserRow {
            username: rec.username.clone(),
            status: if rec.enabled { "enabled" } else { "disabled" }.to_string(),
            authorities: rec.authorities.join(", "),
            secret: if show_secret {
                rec.password.clone()
            } else {
                MASK.to_string()
            },
        }
    }
}

pub fn rows_from_records(records: &[UserRecord], show_secret: bool) -> Vec<UserRow> {
    records
        .iter()
        .map(|r| UserRow::from_record(r, show_secret))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_secret_by_default_and_keeps_order() {
        let recs = vec![
            UserRecord {
                username: "zed".into(),
                password: "p1".into(),
                enabled: false,
                authorities: vec![],
            },
            UserRecord {
                username: "amy".into(),
                password: "p2".into(),
                enabled: true,
                authorities: vec!["USER".into(), "ADMIN".into()],
            },
        ];
        let rows = rows_from_records(&recs, false);
        assert_eq!(rows[0].username, "zed");
        assert_eq!(rows[0].status, "disabled");
        assert_eq!(rows[0].secret, MASK);
        assert_eq!(rows[1].authorities, "USER, ADMIN");

        let revealed = rows_from_records(&recs, true);
        assert_eq!(revealed[1].secret, "p2");
    }
}
