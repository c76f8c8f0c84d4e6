//! UserProfile domain model.
//!
//! Represents the user's contact details: name, email and phone.

use serde::{Deserialize, Serialize};

/// Name returned when no profile has been registered yet.
pub const DEFAULT_NAME: &str = "Your Name";
/// Email returned when no profile has been registered yet.
pub const DEFAULT_EMAIL: &str = "your@email.com";
/// Phone returned when no profile has been registered yet.
pub const DEFAULT_PHONE: &str = "1234567890";

/// User profile domain model.
///
/// Field contents are not validated; empty strings are legal values.
/// A profile is always replaced as a whole, never merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's phone number
    pub phone: String,
}

impl UserProfile {
    /// Creates a profile from its three fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_EMAIL, DEFAULT_PHONE)
    }
}
