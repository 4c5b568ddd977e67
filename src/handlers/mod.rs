pub mod helpers;
pub mod users;
