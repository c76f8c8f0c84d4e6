//! Data transfer objects for the wire format.

mod user_details;

pub use user_details::UserDetails;
