use std::sync::Arc;

use crate::services::InitialVideosLoader;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<InitialVideosLoader>,
}

impl AppState {
    pub fn new(loader: InitialVideosLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }
}
