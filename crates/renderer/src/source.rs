//! Where the renderer gets its field list from.

use async_trait::async_trait;
use formular_core::field::FieldList;

use crate::error::RenderError;

/// Path of the field list endpoint, relative to the server base URL.
pub const FIELDS_PATH: &str = "/dynamic_form_fields";

#[async_trait]
pub trait FieldSource: Send + Sync {
    async fn fetch_fields(&self) -> Result<FieldList, RenderError>;
}

/// Fetches the field list with a single GET against a running server.
#[derive(Debug, Clone)]
pub struct HttpFieldSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFieldSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn fields_url(&self) -> String {
        format!("{}{FIELDS_PATH}", self.base_url)
    }
}

#[async_trait]
impl FieldSource for HttpFieldSource {
    async fn fetch_fields(&self) -> Result<FieldList, RenderError> {
        let url = self.fields_url();
        tracing::debug!(url = %url, "Fetching field list");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let fields: FieldList = serde_json::from_str(&body)?;
        tracing::debug!(count = fields.len(), "Field list received");
        Ok(fields)
    }
}
