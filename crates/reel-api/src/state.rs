//! Application state.

use std::sync::Arc;

use reel_gen::{GenResult, GeminiClient};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub generator: Arc<GeminiClient>,
}

impl AppState {
    /// Create new application state, reading credentials from the environment.
    pub fn new(config: ApiConfig) -> GenResult<Self> {
        let generator = GeminiClient::from_env()?;
        Ok(Self::with_generator(config, generator))
    }

    /// Create application state around an existing client.
    pub fn with_generator(config: ApiConfig, generator: GeminiClient) -> Self {
        Self {
            config,
            generator: Arc::new(generator),
        }
    }
}
