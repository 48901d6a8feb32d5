//! Toy domain entities.

pub mod filter;
pub mod label;
pub mod message;
pub mod model;

pub use filter::{SortKey, ToyFilter};
pub use label::Label;
pub use message::Message;
pub use model::{NewToy, Toy, ToyPatch};
