//! Shared response envelope types for JSON handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// `GET /dynamic_form_fields` is the exception: it answers with the bare
/// `{ "fields": [...] }` shape the form renderer expects.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
