//! HS256 login token encoding and validation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use toybox_core::config::AuthConfig;
use toybox_core::error::AppError;
use toybox_entity::user::LoggedInUser;

use super::claims::LoginClaims;

/// Signs and verifies login tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct LoginTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl std::fmt::Debug for LoginTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginTokenCodec")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl LoginTokenCodec {
    /// Build a codec from auth configuration.
    ///
    /// Fails with a configuration error if `token_ttl_hours` does not fit
    /// in a duration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        let ttl = i64::try_from(config.token_ttl_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_hours is out of range: {}",
                    config.token_ttl_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
            ttl,
        })
    }

    /// Issue a token for the given user.
    pub fn encode(&self, user: &LoggedInUser) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Login token expiry is out of range"))?;
        let claims = LoginClaims {
            sub: user.id,
            fullname: user.fullname.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign login token: {e}")))
    }

    /// Validate a token and return the identity it carries.
    ///
    /// Bad signatures, malformed payloads and expired tokens all yield
    /// `None`.
    pub fn decode(&self, token: &str) -> Option<LoggedInUser> {
        match decode::<LoginClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.to_logged_in()),
            Err(e) => {
                debug!(error = %e, "Rejected login token");
                None
            }
        }
    }
}
