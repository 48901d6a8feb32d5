//! Signed login tokens.

pub mod claims;
pub mod codec;

pub use claims::LoginClaims;
pub use codec::LoginTokenCodec;
