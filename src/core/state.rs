// Application state (AppState)

use crate::core::config::Config;
use crate::security::rate_limiter::RateLimiter;
use crate::stores::user_store::{MemoryUserStore, UserStore};
use std::sync::Arc;

/// Shared application state
///
/// Contains all shared components that are accessed by request handlers.
/// All fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// User store behind the storage trait, so handlers can run against
    /// fakes in tests
    pub user_store: Arc<dyn UserStore>,

    /// Rate limiter for attempt tracking, owned here rather than as a
    /// process-wide singleton so it stays resettable between tests
    pub rate_limiter: Arc<RateLimiter>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(MemoryUserStore::new()))
    }

    /// Build state around a caller-supplied store implementation.
    pub fn with_store(config: Config, user_store: Arc<dyn UserStore>) -> Self {
        let config = Arc::new(config);

        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limit.max_attempts,
            config.rate_limit.window_ms,
        ));

        Self {
            user_store,
            rate_limiter,
            config,
        }
    }
}
