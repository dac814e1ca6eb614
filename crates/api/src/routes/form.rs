//! Route definitions for the dynamic form.
//!
//! Paths are fixed by the page script contract and mounted at the root.
//!
//! ```text
//! GET  /dynamic_form_fields           -> get_fields
//! GET  /login/formular                -> form_page
//! POST /login/formular/submit/        -> submit_form
//! GET  /login/formular/submissions    -> list_submissions
//! POST /process_text                  -> process_text
//! POST /submit_dynamic_form           -> submit_free_form
//! ```

use axum::routing::{get, post};
use axum::Router;
use formular_core::form::{FORM_ACTION, FREE_FORM_ACTION};

use crate::handlers::form;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dynamic_form_fields", get(form::get_fields))
        .route("/login/formular", get(form::form_page))
        .route(FORM_ACTION, post(form::submit_form))
        .route("/login/formular/submissions", get(form::list_submissions))
        .route("/process_text", post(form::process_text))
        .route(FREE_FORM_ACTION, post(form::submit_free_form))
}
