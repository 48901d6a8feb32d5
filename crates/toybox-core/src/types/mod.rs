//! Core type definitions used across the Toybox workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::PageSlice;
pub use sorting::SortDirection;
