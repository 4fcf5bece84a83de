use crate::api::Backend;
use crate::config::AppConfig;

/// Shared by every worker thread for the life of the server.
pub struct App {
    pub config: AppConfig,
    pub backend: Box<dyn Backend>,
}

impl App {
    pub fn new(config: AppConfig, backend: Box<dyn Backend>) -> Self {
        Self { config, backend }
    }
}
