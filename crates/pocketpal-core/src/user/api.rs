//! Capability interface exposed by the host.

use super::model::UserProfile;
use crate::error::Result;

/// The two operations the host hands to its front end.
///
/// Callers hold this as `Arc<dyn UserApi>` and never see the concrete
/// store behind it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pocketpal_core::user::{ProfileStore, UserApi, UserProfile};
///
/// # tokio_test_block(async {
/// let api: Arc<dyn UserApi> = Arc::new(ProfileStore::new());
/// api.register_user(UserProfile::new("A", "a@x.com", "1")).await.unwrap();
/// assert_eq!(api.get_user_details().name, "A");
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[async_trait::async_trait]
pub trait UserApi: Send + Sync {
    /// Returns the registered profile, or the default profile if none
    /// has been registered.
    fn get_user_details(&self) -> UserProfile;

    /// Registers `details`, replacing any previously registered profile.
    ///
    /// # Errors
    ///
    /// The in-memory store never fails. Implementations backed by
    /// something fallible report it here.
    async fn register_user(&self, details: UserProfile) -> Result<()>;
}
