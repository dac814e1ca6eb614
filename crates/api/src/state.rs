use std::sync::Arc;

use formular_core::catalogue::FieldCatalogue;

use crate::config::ServerConfig;
use crate::store::SubmissionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Field list served to the form renderer and checked on submit.
    pub catalogue: Arc<FieldCatalogue>,
    /// Storage for accepted submissions.
    pub submissions: Arc<dyn SubmissionStore>,
}
