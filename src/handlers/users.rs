use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::models::{rows_from_records, AppState, UserSummary};
use crate::templates::UsersPageTemplate;
use crate::utils::hostname_from_url;
use crate::view::{LoadStatus, UsersView};
use super::helpers::render_template;

pub async fn root_get() -> Redirect {
    Redirect::to("/users")
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Render the users list. A fresh view is initialized per request and torn
/// down (dropped) when the response is built.
pub async fn users_list(State(state): State<AppState>) -> Response {
    let mut view = UsersView::new(state.data_source.clone());
    view.on_init();
    view.settled().await;

    let snapshot = view.snapshot();
    let rows = rows_from_records(&snapshot.users, false);
    let error = snapshot.status.error_message().map(str::to_string);

    render_template(UsersPageTemplate {
        api_hostname: hostname_from_url(&state.api_url),
        rows: &rows,
        error,
    })
}

/// Same listing as the page, as JSON. Secrets are never served.
pub async fn users_json(State(state): State<AppState>) -> Response {
    let mut view = UsersView::new(state.data_source.clone());
    view.on_init();
    view.settled().await;

    let snapshot = view.snapshot();
    match snapshot.status {
        LoadStatus::Loaded => {
            let summaries: Vec<UserSummary> =
                snapshot.users.iter().map(UserSummary::from).collect();
            Json(summaries).into_response()
        }
        LoadStatus::Failed(msg) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": msg })),
        )
            .into_response(),
        other => {
            tracing::error!(status = ?other, "Users view did not settle");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
