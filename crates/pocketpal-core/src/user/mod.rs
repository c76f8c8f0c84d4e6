//! User domain module.
//!
//! This module contains the user profile model, the narrow capability
//! interface the host exposes, and the in-memory store behind it.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model
//! - `api`: `UserApi` capability trait
//! - `store`: `ProfileStore`, the single-slot in-memory implementation
//!
//! # Usage
//!
//! ```
//! use pocketpal_core::user::{ProfileStore, UserProfile};
//!
//! let store = ProfileStore::new();
//! assert_eq!(store.get_profile(), UserProfile::default());
//! ```

mod api;
mod model;
mod store;

// Re-export public API
pub use api::UserApi;
pub use model::UserProfile;
pub use store::ProfileStore;
