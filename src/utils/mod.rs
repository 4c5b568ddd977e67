pub mod url_parser;

pub use url_parser::hostname_from_url;
