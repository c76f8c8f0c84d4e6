use std::sync::Arc;

use pocketpal_core::user::{ProfileStore, UserApi};

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Capability handed to the profile handlers.
    pub user_api: Arc<dyn UserApi>,
    /// Same store as `user_api`, for state queries outside the capability.
    pub profile_store_concrete: Arc<ProfileStore>,
}

impl AppState {
    /// Wraps a store, exposing it both as the capability and concretely.
    pub fn new(store: Arc<ProfileStore>) -> Self {
        let user_api: Arc<dyn UserApi> = store.clone();
        Self {
            user_api,
            profile_store_concrete: store,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ProfileStore::new()))
    }
}
