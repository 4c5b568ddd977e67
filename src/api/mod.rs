pub mod client;
pub mod users;

pub use client::{build_http_client, set_silent};
pub use users::{UserDataSource, USERS_PATH};
