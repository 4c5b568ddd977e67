pub mod app_state;
pub mod user_record;
pub mod user_row;
pub mod user_summary;

pub use app_state::AppState;
pub use user_record::UserRecord;
pub use user_row::{rows_from_records, UserRow};
pub use user_summary::UserSummary;
