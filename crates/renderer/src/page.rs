//! Page-ready handling: fetch, build, insert.

use formular_core::dom::Document;
use formular_core::form::{build_form, hosting_page, insert_into_container};

use crate::error::RenderError;
use crate::source::FieldSource;

/// Fill the container of `document` with a form built from `source`.
///
/// Issues exactly one fetch. The container is looked up only after the
/// form is built, so a page without one still costs the request. On any
/// error `document` is left untouched.
pub async fn on_page_ready<S>(document: &mut Document, source: &S) -> Result<(), RenderError>
where
    S: FieldSource + ?Sized,
{
    let fields = source.fetch_fields().await?;
    let form = build_form(&fields);
    insert_into_container(document, form)?;

    tracing::info!(fields = fields.len(), "Dynamic form inserted");
    Ok(())
}

/// Render a fresh hosting page titled `title` with the form inserted.
pub async fn render_page<S>(title: &str, source: &S) -> Result<Document, RenderError>
where
    S: FieldSource + ?Sized,
{
    let mut document = hosting_page(title);
    on_page_ready(&mut document, source).await?;
    Ok(document)
}
