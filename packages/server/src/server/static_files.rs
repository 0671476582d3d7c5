use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the HTML front ends at compile time
#[derive(RustEmbed)]
#[folder = "static"]
pub struct StaticAssets;

/// Serve the browse UI
pub async fn serve_app() -> Response {
    serve_asset("app.html")
}

/// Serve the quick-add form
pub async fn serve_add() -> Response {
    serve_asset("add.html")
}

fn serve_asset(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
