//! UserDetails DTO and its conversions to and from the domain model.

use serde::{Deserialize, Serialize};

use pocketpal_core::error::{PocketPalError, Result};
use pocketpal_core::user::UserProfile;

/// Wire representation of a user profile.
///
/// Every field is optional on the wire so that an incomplete request is
/// reported as `InvalidProfile` naming the missing field, rather than as
/// an opaque deserialization failure. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserDetails {
    /// Reads a request body that has already been parsed as JSON.
    ///
    /// Only a JSON object is a profile. Arrays and scalars are rejected
    /// here because serde's derived struct visitor would otherwise accept
    /// a sequence in field order. A field of the wrong type is reported as
    /// `InvalidProfile`; `null` counts as missing.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(PocketPalError::invalid_profile(
                "body must be a JSON object",
            ));
        }
        serde_json::from_value(value).map_err(|e| PocketPalError::invalid_profile(e.to_string()))
    }

    /// Converts into the domain model, failing on the first missing field
    /// (checked in the order name, email, phone).
    pub fn into_profile(self) -> Result<UserProfile> {
        let name = self.name.ok_or_else(|| PocketPalError::missing_field("name"))?;
        let email = self
            .email
            .ok_or_else(|| PocketPalError::missing_field("email"))?;
        let phone = self
            .phone
            .ok_or_else(|| PocketPalError::missing_field("phone"))?;
        Ok(UserProfile { name, email, phone })
    }
}

impl TryFrom<UserDetails> for UserProfile {
    type Error = PocketPalError;

    fn try_from(details: UserDetails) -> Result<Self> {
        details.into_profile()
    }
}

/// Convert domain model to the wire DTO. Always carries all three fields.
impl From<UserProfile> for UserDetails {
    fn from(profile: UserProfile) -> Self {
        UserDetails {
            name: Some(profile.name),
            email: Some(profile.email),
            phone: Some(profile.phone),
        }
    }
}
