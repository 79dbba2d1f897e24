//! # Embedded Site Assets
//!
//! Serves the trunk build of the frontend, compiled into the binary from
//! `static/dist` (copied there by `build.rs`).
//!
//! Any path that is not a file falls back to `index.html` so that client-side
//! routes such as `/contact` or a mistyped `/kittens` survive a page reload;
//! the SPA itself decides what to render, including its 404 page.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Default handler for every request.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

/// Maps a request path to a file path inside the bundle.
pub fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        INDEX
    } else {
        path
    }
}

fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let file_path = asset_path(request_path);

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => {
                debug!("No asset for {}, serving {}", request_path, INDEX);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use include_dir::{DirEntry, File};

    static FIXTURE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>smelly-cat</html>")),
            DirEntry::File(File::new("app.js", b"console.log(1)")),
        ],
    );

    static EMPTY: Dir = Dir::new("", &[]);

    #[test]
    fn root_maps_to_index() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path(""), "index.html");
        assert_eq!(asset_path("/styles.css"), "styles.css");
    }

    #[actix_web::test]
    async fn files_are_served_with_their_mime_type() {
        let response = serve_from(&FIXTURE, "/app.js");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let response = serve_from(&FIXTURE, "/contact");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"<html>smelly-cat</html>");
    }

    #[actix_web::test]
    async fn empty_bundle_is_not_found() {
        let response = serve_from(&EMPTY, "/");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
