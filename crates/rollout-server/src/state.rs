use std::sync::Arc;

use rollout_core::config::AdvisorConfig;
use rollout_core::Store;

use crate::brain::BrainClient;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub brain: BrainClient,
}

impl AppState {
    pub fn new(store: Arc<Store>, advisor: AdvisorConfig) -> Self {
        Self {
            store,
            brain: BrainClient::new(advisor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_shares_store() {
        let store = Arc::new(Store::new());
        let state = AppState::new(store.clone(), AdvisorConfig::default());
        assert!(Arc::ptr_eq(&state.store, &store));
        assert_eq!(state.brain.config().base_url, "http://127.0.0.1:8000");
    }
}
