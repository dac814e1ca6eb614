//! Domain layer for the dynamic form service.
//!
//! Holds the field descriptor model, a minimal DOM tree with an HTML
//! serializer, the form builder used by both the server-side page and the
//! page-load renderer, and submission checks.

pub mod catalogue;
pub mod dom;
pub mod error;
pub mod extract;
pub mod field;
pub mod form;
pub mod submission;
pub mod types;
