//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder signing secret shipped with the defaults.
pub const DEFAULT_TOKEN_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for login token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Login token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Name of the cookie carrying the login token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Reject passwords with a low entropy estimate.
    #[serde(default)]
    pub require_strong_passwords: bool,
    /// Admin account created at startup when absent.
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Credentials of the admin account ensured at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    /// Login name.
    pub username: String,
    /// Plaintext password, hashed before it is stored.
    pub password: String,
    /// Display name.
    #[serde(default = "default_admin_fullname")]
    pub fullname: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_hours: default_token_ttl(),
            cookie_name: default_cookie_name(),
            password_min_length: default_password_min(),
            require_strong_passwords: false,
            bootstrap_admin: None,
        }
    }
}

fn default_token_secret() -> String {
    DEFAULT_TOKEN_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "loginToken".to_string()
}

fn default_password_min() -> usize {
    4
}

fn default_admin_fullname() -> String {
    "Administrator".to_string()
}
