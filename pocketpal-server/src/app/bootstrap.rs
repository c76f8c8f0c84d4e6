use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use pocketpal_core::config::RootConfig;
use pocketpal_core::user::ProfileStore;
use tokio::net::TcpListener;

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
    pub bind_addr: SocketAddr,
}

impl AppBootstrap {
    /// Wires the profile store into the application state.
    ///
    /// The store always starts empty: profiles live only as long as the
    /// process.
    pub fn new(config: &RootConfig) -> Self {
        let profile_store = Arc::new(ProfileStore::new());
        tracing::info!("[Bootstrap] Profile store initialized (empty)");

        Self {
            app_state: AppState::new(profile_store),
            bind_addr: config.server.bind_addr,
        }
    }

    /// Binds the listener and serves until a shutdown signal arrives.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.bind_addr))?;
        let local_addr = listener.local_addr()?;
        tracing::info!("pocketpal listening on {}", local_addr);

        axum::serve(listener, crate::app(self.app_state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("pocketpal stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C (and SIGTERM on Unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_starts_unregistered() {
        let bootstrap = AppBootstrap::new(&RootConfig::default());
        assert!(!bootstrap.app_state.profile_store_concrete.is_registered());
        assert_eq!(bootstrap.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_state_shares_one_store() {
        let bootstrap = AppBootstrap::new(&RootConfig::default());
        let state = bootstrap.app_state;
        state
            .user_api
            .register_user(pocketpal_core::user::UserProfile::new("A", "a@x.com", "1"))
            .await
            .unwrap();
        assert!(state.profile_store_concrete.is_registered());
    }
}
