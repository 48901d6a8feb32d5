//! User domain entities.

pub mod model;

pub use model::{CreateUser, LoggedInUser, MiniUser, UpdateUser, User};
