use askama::Template;
use crate::models::UserRow;

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersPageTemplate<'a> {
    pub api_hostname: String,
    pub rows: &'a [UserRow],
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> UserRow {
        UserRow {
            username: name.into(),
            status: "enabled".into(),
            authorities: "ADMIN".into(),
            secret: "••••••".into(),
        }
    }

    #[test]
    fn renders_rows_in_order() {
        let rows = vec![row("alice"), row("bob")];
        let html = UsersPageTemplate {
            api_hostname: "api.example.com".into(),
            rows: &rows,
            error: None,
        }
        .render()
        .unwrap();
        let a = html.find("alice").unwrap();
        let b = html.find("bob").unwrap();
        assert!(a < b);
        assert!(!html.contains("Could not load users"));
    }

    #[test]
    fn renders_error_banner_and_escapes_it() {
        let html = UsersPageTemplate {
            api_hostname: String::new(),
            rows: &[],
            error: Some("<boom>".into()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Could not load users"));
        assert!(html.contains("&lt;boom&gt;"));
        assert!(html.contains("No users."));
    }
}
