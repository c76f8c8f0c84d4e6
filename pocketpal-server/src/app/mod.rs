mod bootstrap;
mod state;

pub use bootstrap::{AppBootstrap, shutdown_signal};
pub use state::AppState;
