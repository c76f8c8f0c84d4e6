pub mod config_service;
pub mod dto;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::dto::UserDetails;
pub use crate::paths::PocketPalPaths;
