//! Integration tests for the page-load renderer against a mocked server.

use assert_matches::assert_matches;
use formular_core::dom::{Document, Element};
use formular_core::error::CoreError;
use formular_core::form::{hosting_page, CONTAINER_ID, FORM_ACTION};
use formular_renderer::{on_page_ready, render_page, HttpFieldSource, RenderError, FIELDS_PATH};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_fields(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FIELDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn renders_required_text_field() {
    let server =
        serve_fields(r#"{"fields":[{"name":"full_name","type":"text","required":true}]}"#).await;
    let source = HttpFieldSource::new(server.uri());

    let document = render_page("Login", &source).await.unwrap();

    let container = document.get_element_by_id(CONTAINER_ID).unwrap();
    let form = container.child_elements().next().unwrap();
    assert_eq!(form.tag, "form");
    assert_eq!(form.attr("method"), Some("post"));
    assert_eq!(form.attr("action"), Some(FORM_ACTION));

    let labels = form.descendants_by_tag("label");
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text_content(), "FULL NAME");

    let input = form
        .descendants_by_tag("input")
        .into_iter()
        .find(|i| i.attr("name") == Some("full_name"))
        .unwrap();
    assert_eq!(input.attr("type"), Some("text"));
    assert!(input.has_attr("required"));
}

#[tokio::test]
async fn textarea_and_optional_fields_follow_response_order() {
    let server = serve_fields(
        r#"{"fields":[
            {"name":"notes","type":"textarea"},
            {"name":"email","type":"email","required":false},
            {"name":"age","type":"number"}
        ]}"#,
    )
    .await;

    let document = render_page("Order", &HttpFieldSource::new(server.uri()))
        .await
        .unwrap();
    let form = document
        .get_element_by_id(CONTAINER_ID)
        .and_then(|c| c.child_elements().next())
        .unwrap();

    let names: Vec<_> = form.child_elements().filter_map(|e| e.attr("name")).collect();
    assert_eq!(names, vec!["notes", "email", "age"]);

    let notes = form.child_elements().find(|e| e.attr("name") == Some("notes")).unwrap();
    assert_eq!(notes.tag, "textarea");
    assert!(form.child_elements().all(|e| !e.has_attr("required")));
}

#[tokio::test]
async fn existing_container_content_is_kept() {
    let server = serve_fields(r#"{"fields":[]}"#).await;
    let mut document = hosting_page("Keep");
    document
        .get_element_by_id_mut(CONTAINER_ID)
        .unwrap()
        .append_child(Element::new("p").with_text("intro"));

    on_page_ready(&mut document, &HttpFieldSource::new(server.uri()))
        .await
        .unwrap();

    let tags: Vec<_> = document
        .get_element_by_id(CONTAINER_ID)
        .unwrap()
        .child_elements()
        .map(|e| e.tag.clone())
        .collect();
    assert_eq!(tags, vec!["p", "form"]);
}

#[tokio::test]
async fn server_error_aborts_render() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FIELDS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut document = hosting_page("Fail");
    let before = document.clone();
    let err = on_page_ready(&mut document, &HttpFieldSource::new(server.uri()))
        .await
        .unwrap_err();

    assert_matches!(err, RenderError::Status { status: 500 });
    assert_eq!(document, before);
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = serve_fields("not valid json").await;

    let err = render_page("Bad", &HttpFieldSource::new(server.uri()))
        .await
        .unwrap_err();

    assert_matches!(err, RenderError::Decode(_));
}

#[tokio::test]
async fn descriptor_without_name_is_decode_error() {
    let server = serve_fields(r#"{"fields":[{"type":"text"}]}"#).await;

    let err = render_page("Bad", &HttpFieldSource::new(server.uri()))
        .await
        .unwrap_err();

    assert_matches!(err, RenderError::Decode(_));
}

#[tokio::test]
async fn missing_container_fails_after_fetch() {
    // `expect(1)` asserts the request was still made.
    let server = serve_fields(r#"{"fields":[{"name":"a","type":"text"}]}"#).await;
    let mut document = Document::new(Element::new("html").with_child(Element::new("body")));

    let err = on_page_ready(&mut document, &HttpFieldSource::new(server.uri()))
        .await
        .unwrap_err();

    assert_matches!(err, RenderError::Core(CoreError::ContainerMissing(_)));
}

#[tokio::test]
async fn unreachable_server_is_fetch_error() {
    let err = render_page("Down", &HttpFieldSource::new("http://127.0.0.1:1"))
        .await
        .unwrap_err();

    assert_matches!(err, RenderError::Fetch(_));
}
