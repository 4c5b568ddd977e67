use crate::api::UserDataSource;

#[derive(Clone)]
pub struct AppState {
    pub api_url: String,
    pub data_source: UserDataSource,
}

impl AppState {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        let data_source = UserDataSource::new(client, &api_url);
        AppState { api_url, data_source }
    }
}
