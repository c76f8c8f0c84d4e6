pub mod health;
pub mod user;

pub use health::*;
pub use user::*;
