//! Roster: fetch the remote users collection and present it, on the terminal
//! or as a small web page.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates;
pub mod utils;
pub mod view;

pub use api::UserDataSource;
pub use error::ApiError;
pub use models::UserRecord;
pub use view::{LoadStatus, UsersView, UsersViewState};
