//! Account signup, credential checks and login tokens.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use toybox_auth::password::{PasswordHasher, PasswordPolicy};
use toybox_auth::token::LoginTokenCodec;
use toybox_core::config::BootstrapAdmin;
use toybox_core::error::AppError;
use toybox_database::store::UserStore;
use toybox_entity::user::{CreateUser, LoggedInUser, User};

/// Same message for unknown users and wrong passwords.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Data required to open a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub fullname: String,
}

/// Handles signup, login and login token validation.
#[derive(Clone)]
pub struct AuthService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Password policy for new accounts.
    policy: PasswordPolicy,
    /// Login token codec.
    tokens: Arc<LoginTokenCodec>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        policy: PasswordPolicy,
        tokens: Arc<LoginTokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            policy,
            tokens,
        }
    }

    /// Create an account and log it in.
    ///
    /// Returns the new user and a login token for it.
    pub async fn signup(&self, req: SignupRequest) -> Result<(User, String), AppError> {
        let username = req.username.trim();
        let fullname = req.fullname.trim();
        if username.is_empty() || fullname.is_empty() || req.password.is_empty() {
            return Err(AppError::validation(
                "Username, password and full name are required",
            ));
        }
        self.policy.check(&req.password)?;

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' is already taken"
            )));
        }

        let user = CreateUser {
            username: username.to_string(),
            fullname: fullname.to_string(),
            password_hash: self.hasher.hash(&req.password)?,
            is_admin: false,
        }
        .into_user();
        self.users.insert(&user).await?;

        info!(user_id = %user.id, username = %user.username, "User signed up");

        let token = self.login_token(&user)?;
        Ok((user, token))
    }

    /// Create an admin account unless the username already exists.
    ///
    /// Returns the existing or newly created user. The password policy is
    /// not applied to operator-supplied credentials.
    pub async fn ensure_admin(&self, admin: &BootstrapAdmin) -> Result<User, AppError> {
        if let Some(existing) = self.users.find_by_username(&admin.username).await? {
            if !existing.is_admin {
                warn!(
                    user_id = %existing.id,
                    "Bootstrap admin username belongs to a non-admin user"
                );
            }
            return Ok(existing);
        }

        let user = CreateUser {
            username: admin.username.trim().to_string(),
            fullname: admin.fullname.trim().to_string(),
            password_hash: self.hasher.hash(&admin.password)?,
            is_admin: true,
        }
        .into_user();
        self.users.insert(&user).await?;

        info!(user_id = %user.id, username = %user.username, "Admin account created");

        Ok(user)
    }

    /// Check credentials and return the matching user.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username.trim()).await? else {
            warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(user)
    }

    /// Issue a login token for a user.
    pub fn login_token(&self, user: &User) -> Result<String, AppError> {
        self.tokens.encode(&LoggedInUser::from(user))
    }

    /// Identity carried by a login token, or `None` if it is not valid.
    pub fn validate_token(&self, token: &str) -> Option<LoggedInUser> {
        self.tokens.decode(token)
    }
}
