//! In-memory profile store.
//!
//! Holds zero or one `UserProfile` for the lifetime of the process.

use std::sync::{PoisonError, RwLock};

use super::api::UserApi;
use super::model::UserProfile;
use crate::error::Result;

/// Single-slot store for the user's profile.
///
/// The slot starts empty and becomes populated on the first
/// [`set_profile`](Self::set_profile). Reads on an empty slot resolve to
/// [`UserProfile::default`]. Every write replaces the whole profile under
/// the write lock, so readers see either the previous or the new profile,
/// never a mix of the two.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: RwLock<Option<UserProfile>>,
}

impl ProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored profile unconditionally.
    ///
    /// Returns `true` if a previously registered profile was replaced,
    /// `false` if the store was empty.
    pub fn set_profile(&self, profile: UserProfile) -> bool {
        // The slot is only ever assigned whole, so a poisoned lock still
        // guards a complete value.
        let mut slot = self.profile.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = slot.replace(profile).is_some();
        drop(slot);

        // Personal fields are never logged.
        tracing::info!(replaced, "User profile registered");
        replaced
    }

    /// Returns the stored profile, or the default profile if the slot is empty.
    pub fn get_profile(&self) -> UserProfile {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    /// Whether a profile has been set.
    pub fn is_registered(&self) -> bool {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[async_trait::async_trait]
impl UserApi for ProfileStore {
    fn get_user_details(&self) -> UserProfile {
        self.get_profile()
    }

    async fn register_user(&self, details: UserProfile) -> Result<()> {
        self.set_profile(details);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample() -> UserProfile {
        UserProfile::new("A", "a@x.com", "1")
    }

    #[test]
    fn test_get_before_set_returns_default() {
        let store = ProfileStore::new();
        assert!(!store.is_registered());
        assert_eq!(
            store.get_profile(),
            UserProfile::new("Your Name", "your@email.com", "1234567890")
        );
    }

    #[test]
    fn test_set_then_get() {
        let store = ProfileStore::new();
        store.set_profile(sample());
        assert!(store.is_registered());
        assert_eq!(store.get_profile(), sample());
    }

    #[test]
    fn test_last_write_wins() {
        let store = ProfileStore::new();
        store.set_profile(sample());
        store.set_profile(UserProfile::new("B", "b@y.com", "2"));
        assert_eq!(store.get_profile(), UserProfile::new("B", "b@y.com", "2"));
    }

    #[test]
    fn test_second_set_does_not_merge_fields() {
        let store = ProfileStore::new();
        store.set_profile(sample());
        store.set_profile(UserProfile::new("B", "", ""));
        let profile = store.get_profile();
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
    }

    #[test]
    fn test_same_value_twice_is_idempotent() {
        let store = ProfileStore::new();
        store.set_profile(sample());
        let first = store.get_profile();
        store.set_profile(sample());
        assert_eq!(store.get_profile(), first);
    }

    #[test]
    fn test_empty_strings_accepted() {
        let store = ProfileStore::new();
        store.set_profile(UserProfile::new("", "", ""));
        assert!(store.is_registered());
        assert_eq!(store.get_profile(), UserProfile::new("", "", ""));
    }

    #[test]
    fn test_set_reports_whether_a_profile_was_replaced() {
        let store = ProfileStore::new();
        assert!(!store.set_profile(sample()));
        assert!(store.set_profile(sample()));
        assert!(store.set_profile(UserProfile::new("B", "b@y.com", "2")));
    }

    #[test]
    fn test_concurrent_writers_never_produce_mixed_profile() {
        let store = Arc::new(ProfileStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let tag = i.to_string();
                    for _ in 0..200 {
                        store.set_profile(UserProfile::new(&tag, &tag, &tag));
                        let seen = store.get_profile();
                        assert_eq!(seen.name, seen.email);
                        assert_eq!(seen.email, seen.phone);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(store.is_registered());
    }

    #[tokio::test]
    async fn test_user_api_dispatch() {
        let api: Arc<dyn UserApi> = Arc::new(ProfileStore::new());
        assert_eq!(api.get_user_details(), UserProfile::default());

        api.register_user(sample()).await.unwrap();
        assert_eq!(api.get_user_details(), sample());

        api.register_user(sample()).await.unwrap();
        assert_eq!(api.get_user_details(), sample());
    }
}
