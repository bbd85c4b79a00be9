use std::sync::Arc;

use api::nav::{self, NavRoute};
use api::ApiClient;

use crate::settings::Settings;

/// Everything a handler needs, built once at startup.
pub struct AppState {
    pub api: ApiClient,
    pub nav: Vec<NavRoute>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Arc<Self> {
        Arc::new(Self {
            api: ApiClient::new(&settings.api_base_url, &settings.api_version),
            nav: nav::routes(),
            secure_cookies: settings.secure_cookies,
        })
    }
}
