//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use toybox_auth::password::PasswordPolicy;
use toybox_auth::token::LoginTokenCodec;
use toybox_core::config::AppConfig;
use toybox_core::error::AppError;
use toybox_database::store::{ToyStore, UserStore};
use toybox_service::{AuthService, ToyService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Toy catalog engine
    pub toy_service: Arc<ToyService>,
    /// Signup, login and token validation
    pub auth_service: Arc<AuthService>,
    /// User directory
    pub user_service: Arc<UserService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire the services over the given stores.
    ///
    /// Fails if the auth settings cannot produce a token codec.
    pub fn new(
        config: AppConfig,
        toy_store: Arc<dyn ToyStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Result<Self, AppError> {
        let tokens = Arc::new(LoginTokenCodec::new(&config.auth)?);
        let policy = PasswordPolicy::new(&config.auth);

        Ok(Self {
            toy_service: Arc::new(ToyService::new(toy_store)),
            auth_service: Arc::new(AuthService::new(Arc::clone(&user_store), policy, tokens)),
            user_service: Arc::new(UserService::new(user_store)),
            config: Arc::new(config),
            started_at: Instant::now(),
        })
    }

    /// Name of the cookie carrying the login token.
    pub fn cookie_name(&self) -> &str {
        &self.config.auth.cookie_name
    }
}
