//! `formular-render` -- renders the dynamic form page from a running server.
//!
//! Fetches `/dynamic_form_fields` once and prints the complete page HTML to
//! stdout.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default                 |
//! |---------------------|----------|-------------------------|
//! | `FORMULAR_BASE_URL` | no       | `http://localhost:3000` |
//! | `FORMULAR_TITLE`    | no       | `Dynamic form`          |

use formular_renderer::{render_page, HttpFieldSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TITLE: &str = "Dynamic form";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the page.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formular_renderer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url =
        std::env::var("FORMULAR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let title = std::env::var("FORMULAR_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());

    let source = HttpFieldSource::new(base_url);
    tracing::info!(url = %source.fields_url(), "Rendering dynamic form page");

    match render_page(&title, &source).await {
        Ok(document) => println!("{}", document.to_html()),
        Err(e) => {
            tracing::error!(error = %e, "Rendering failed");
            std::process::exit(1);
        }
    }
}
