//! HTTP-level tests for the Toybox API, run against the in-memory stores.

mod auth_test;
mod helpers;
mod toy_test;
mod user_test;
