//! # toybox-auth
//!
//! Credential primitives for Toybox.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and password policy
//! - `token`: signed login tokens carried in the `loginToken` cookie

pub mod password;
pub mod token;

pub use password::{PasswordHasher, PasswordPolicy};
pub use token::{LoginClaims, LoginTokenCodec};
