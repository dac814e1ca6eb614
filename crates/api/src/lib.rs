//! Formular API server library.
//!
//! Exposes config, state, error handling, the submission store and routes
//! so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
