//! Handlers for the dynamic form: field list, hosting page, submission and
//! free-text pre-filling.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use formular_core::extract::parse_key_value_lines;
use formular_core::field::FieldList;
use formular_core::submission::{collect_pairs, collect_submission};
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::pages;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /process_text`.
#[derive(Debug, Deserialize, Validate)]
pub struct ProcessTextInput {
    #[serde(rename = "userText")]
    #[validate(length(min = 1, message = "userText must not be empty"))]
    pub user_text: String,
}

/// GET /dynamic_form_fields
///
/// The field list the renderer turns into a form, as `{ "fields": [...] }`.
pub async fn get_fields(State(state): State<AppState>) -> Json<FieldList> {
    Json(state.catalogue.fields().clone())
}

/// GET /login/formular
///
/// Hosting page with the form already inserted into its container.
pub async fn form_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::form_page(state.catalogue.fields()))
}

/// POST /login/formular/submit/
///
/// Accepts the urlencoded form, checks required fields and stores it.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(posted): Form<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let data = collect_submission(state.catalogue.fields(), &posted)?;
    store_submission(&state, data).await
}

/// POST /submit_dynamic_form
///
/// Target of forms pre-filled from text. Their fields are not in the
/// catalogue, so the whole form map is stored without a required check.
pub async fn submit_free_form(
    State(state): State<AppState>,
    Form(posted): Form<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    store_submission(&state, collect_pairs(&posted)).await
}

async fn store_submission(
    state: &AppState,
    data: Map<String, Value>,
) -> AppResult<(StatusCode, Html<String>)> {
    let field_count = data.len();
    let submission = state.submissions.insert(data).await?;

    tracing::info!(
        submission_id = submission.id,
        field_count,
        "Form submission stored",
    );

    Ok((
        StatusCode::CREATED,
        Html(pages::confirmation_page(&submission)),
    ))
}

/// GET /login/formular/submissions
///
/// Stored submissions, newest first.
pub async fn list_submissions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let submissions = state.submissions.list().await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// POST /process_text
///
/// Turns `key: value` lines into a pre-filled form of optional text fields.
/// Whitespace-only text is rejected.
pub async fn process_text(Form(mut input): Form<ProcessTextInput>) -> AppResult<Html<String>> {
    input.user_text = input.user_text.trim().to_string();
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let extracted = parse_key_value_lines(&input.user_text);
    tracing::debug!(pairs = extracted.pairs().len(), "Extracted fields from text");

    Ok(Html(pages::prefilled_form_page(
        &extracted.to_field_list(),
        &extracted.to_value_map(),
    )))
}
