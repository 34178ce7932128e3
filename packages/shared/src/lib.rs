//! Shared utilities for Engawa.

pub mod logger;
pub mod time;
