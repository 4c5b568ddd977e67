pub mod users_page_template;

pub use users_page_template::UsersPageTemplate;
