//! Signup, login and login token handling.

pub mod service;

pub use service::{AuthService, SignupRequest};
