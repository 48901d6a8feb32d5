//! # toybox-entity
//!
//! Domain entity models for the Toybox catalog. Every struct in this crate
//! is a plain data record or a domain value object; persistence-specific
//! row types live in `toybox-database`.

pub mod toy;
pub mod user;
