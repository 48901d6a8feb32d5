//! Claims carried by a login token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use toybox_entity::user::LoggedInUser;

/// Payload of the `loginToken` cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginClaims {
    /// User id.
    pub sub: Uuid,
    /// Display name at login time.
    pub fullname: String,
    /// Admin flag at login time.
    pub is_admin: bool,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

impl LoginClaims {
    /// The caller identity these claims describe.
    pub fn to_logged_in(&self) -> LoggedInUser {
        LoggedInUser {
            id: self.sub,
            fullname: self.fullname.clone(),
            is_admin: self.is_admin,
        }
    }
}
