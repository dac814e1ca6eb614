//! Form construction from a [`FieldList`].
//!
//! Every descriptor becomes a `<label>` followed by its control, in list
//! order, inside a `<form method="post">`. A final submit button closes the
//! form. Catalogue forms post to [`FORM_ACTION`]; forms pre-filled from
//! extracted text post to [`FREE_FORM_ACTION`].

use std::collections::HashMap;

use crate::dom::{Document, Element};
use crate::error::CoreError;
use crate::field::{FieldDescriptor, FieldKind, FieldList};

/// Submission endpoint of forms built from the served field list.
pub const FORM_ACTION: &str = "/login/formular/submit/";

/// Submission endpoint of forms pre-filled from extracted text.
pub const FREE_FORM_ACTION: &str = "/submit_dynamic_form";

/// Generated forms always post.
pub const FORM_METHOD: &str = "post";

/// Id of the element the generated form is inserted into.
pub const CONTAINER_ID: &str = "dynamic-form-container";

/// Label of the trailing submit control.
pub const SUBMIT_LABEL: &str = "Submit";

/// Build the form element for `fields`, posting to [`FORM_ACTION`].
pub fn build_form(fields: &FieldList) -> Element {
    build_form_with_action(fields, &HashMap::new(), FORM_ACTION)
}

/// Build a form posting to [`FREE_FORM_ACTION`], pre-filling controls whose
/// name appears in `values`.
pub fn build_prefilled_form(fields: &FieldList, values: &HashMap<String, String>) -> Element {
    build_form_with_action(fields, values, FREE_FORM_ACTION)
}

fn build_form_with_action(
    fields: &FieldList,
    values: &HashMap<String, String>,
    action: &str,
) -> Element {
    let mut form = Element::new("form")
        .with_attr("method", FORM_METHOD)
        .with_attr("action", action);

    for field in fields {
        form.append_child(Element::new("label").with_text(field.label()));
        form.append_child(build_control(field, values.get(&field.name)));
    }

    form.append_child(
        Element::new("input")
            .with_attr("type", "submit")
            .with_attr("value", SUBMIT_LABEL),
    );

    form
}

fn build_control(field: &FieldDescriptor, value: Option<&String>) -> Element {
    let mut control = match &field.kind {
        FieldKind::TextArea => {
            let mut area = Element::new("textarea");
            if let Some(value) = value {
                // Parsers drop one newline right after `<textarea>`.
                if value.starts_with('\n') {
                    area.append_text(format!("\n{value}"));
                } else {
                    area.append_text(value.as_str());
                }
            }
            area
        }
        FieldKind::Input(kind) => {
            let mut input = Element::new("input").with_attr("type", kind.as_str());
            if let Some(value) = value {
                input.set_attr("value", value.as_str());
            }
            input
        }
    };

    control.set_attr("name", field.name.as_str());
    control.set_flag("required", field.required);
    control
}

/// Append `form` to the element with id [`CONTAINER_ID`].
///
/// Existing children of the container are left in place.
pub fn insert_into_container(document: &mut Document, form: Element) -> Result<(), CoreError> {
    let container = document
        .get_element_by_id_mut(CONTAINER_ID)
        .ok_or_else(|| CoreError::ContainerMissing(CONTAINER_ID.to_string()))?;
    container.append_child(form);
    Ok(())
}

/// Page skeleton hosting an empty form container.
pub fn hosting_page(title: &str) -> Document {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(Element::new("title").with_text(title));

    let body = Element::new("body")
        .with_child(Element::new("h1").with_text(title))
        .with_child(Element::new("div").with_attr("id", CONTAINER_ID));

    Document::new(
        Element::new("html")
            .with_attr("lang", "en")
            .with_child(head)
            .with_child(body),
    )
}
