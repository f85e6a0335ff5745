use std::{fmt, sync::Arc};

use interconnect_core::InterconnectEngine;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub engine: InterconnectEngine,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(engine: InterconnectEngine, config: Arc<Config>) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &InterconnectEngine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
