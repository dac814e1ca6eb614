//! Server-rendered HTML pages.
//!
//! Page shells are maud templates; the form itself comes from the core DOM
//! builder so it matches what the page-load renderer inserts.

use std::collections::HashMap;

use formular_core::dom::Element;
use formular_core::field::{label_text, FieldList};
use formular_core::form::{build_form, build_prefilled_form, CONTAINER_ID};
use formular_db::models::submission::Submission;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::Value;

/// Title of the dynamic form page.
pub const FORM_PAGE_TITLE: &str = "Dynamic form";

/// Title of the page shown after a successful submission.
pub const CONFIRMATION_TITLE: &str = "Submission received";

/// Wrap `content` in the standard page shell, inside the form container.
fn shell(title: &str, content: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                div id=(CONTAINER_ID) { (content) }
            }
        }
    }
    .into_string()
}

fn form_markup(form: &Element) -> Markup {
    // The DOM serializer escapes text and attribute values itself.
    PreEscaped(form.to_html())
}

/// The hosting page with the catalogue form in its container.
pub fn form_page(fields: &FieldList) -> String {
    shell(FORM_PAGE_TITLE, form_markup(&build_form(fields)))
}

/// The hosting page with a form pre-filled from `values`.
pub fn prefilled_form_page(fields: &FieldList, values: &HashMap<String, String>) -> String {
    shell(
        FORM_PAGE_TITLE,
        form_markup(&build_prefilled_form(fields, values)),
    )
}

/// Confirmation page listing the stored name/value pairs.
pub fn confirmation_page(submission: &Submission) -> String {
    let pairs: Vec<(String, String)> = match &submission.data {
        Value::Object(data) => data
            .iter()
            .map(|(name, value)| {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (label_text(name), shown)
            })
            .collect(),
        _ => Vec::new(),
    };

    shell(
        CONFIRMATION_TITLE,
        html! {
            p { "Submission #" (submission.id) " stored." }
            dl {
                @for (label, value) in &pairs {
                    dt { (label) }
                    dd { (value) }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use formular_core::field::FieldDescriptor;
    use serde_json::json;

    use super::*;

    #[test]
    fn form_page_places_form_in_container() {
        let fields = FieldList::new(vec![FieldDescriptor::new("full_name", "text", true)]);
        let html = form_page(&fields);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!(
            r#"<div id="dynamic-form-container">{}</div>"#,
            build_form(&fields).to_html()
        )));
    }

    #[test]
    fn confirmation_escapes_submitted_values() {
        let submission = Submission {
            id: 3,
            data: json!({"device_name": "<b>Pump</b>", "rating": 4}),
            created_at: Utc::now(),
        };
        let html = confirmation_page(&submission);
        assert!(html.contains("Submission #3 stored."));
        assert!(html.contains("<dt>DEVICE NAME</dt><dd>&lt;b&gt;Pump&lt;/b&gt;</dd>"));
        assert!(html.contains("<dd>4</dd>"));
    }
}
