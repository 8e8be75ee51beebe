use std::sync::Arc;

use pgtd_validate::Validator;

use crate::config::ServerConfig;

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub validator: Arc<Validator>,
}

impl AppState {
    pub fn new(config: ServerConfig, validator: Validator) -> Self {
        Self {
            config: Arc::new(config),
            validator: Arc::new(validator),
        }
    }
}
