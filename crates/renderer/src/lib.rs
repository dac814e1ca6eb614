//! `formular-renderer` library crate.
//!
//! The page-load side of the dynamic form: fetch the field list once, build
//! the form and insert it into the page's container element. The binary
//! entrypoint lives in `main.rs`.

pub mod error;
pub mod page;
pub mod source;

pub use error::RenderError;
pub use page::{on_page_ready, render_page};
pub use source::{FieldSource, HttpFieldSource, FIELDS_PATH};
