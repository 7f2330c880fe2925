//! Shared client-side utilities.

pub mod browser;
