//! HTTP chat server implementation.

pub mod error;
mod handler;
pub mod presenter;
mod runner;
mod signal;
pub mod state;

pub use runner::{build_router, run};
