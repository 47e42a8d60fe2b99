//! Static file serving module
//!
//! Maps decoded request paths onto the served root and builds file,
//! redirect, listing, and error responses.

use crate::handler::listing;
use crate::http::{self, mime, response};
use crate::logger;
use crate::server::ServeContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files served in place of a directory listing when present.
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Serve a decoded request path from the root directory.
///
/// `raw_path` is the still-encoded URI path; redirect targets are built
/// from it so encoded segments survive the round trip to the client.
pub async fn serve_path(
    ctx: &ServeContext,
    decoded_path: &str,
    raw_path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let Some(resolved) = resolve_path(&ctx.root, decoded_path) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        // Relative hrefs in the listing only resolve correctly when the
        // browser sees a trailing slash on the directory URL.
        if !decoded_path.ends_with('/') {
            return http::build_redirect_response(&format!("{raw_path}/"));
        }

        for index in INDEX_FILES {
            let candidate = resolved.join(index);
            if candidate.is_file() {
                return serve_file(&candidate, is_head).await;
            }
        }

        return serve_listing(&resolved, decoded_path, is_head).await;
    }

    serve_file(&resolved, is_head).await
}

/// Resolve a decoded request path against the canonical root.
///
/// Returns None when the target does not exist or resolves outside the
/// root (`..` segments, symlinks pointing elsewhere). The caller answers
/// 404 either way, so probing requests learn nothing about the outside.
fn resolve_path(root: &Path, decoded_path: &str) -> Option<PathBuf> {
    let relative = decoded_path.trim_start_matches('/');
    let joined = root.join(relative);

    let canonical = joined.canonicalize().ok()?;
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path escape blocked: {} -> {}",
            decoded_path,
            canonical.display()
        ));
        return None;
    }

    Some(canonical)
}

async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::content_type_for(path);
            response::build_file_response(content, content_type, is_head)
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Read refused for '{}': {e}", path.display()));
            http::build_403_response()
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
            http::build_404_response()
        }
    }
}

async fn serve_listing(dir: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match listing::render_directory(dir, request_path).await {
        Ok(html) => response::build_html_response(html, is_head),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Listing refused for '{}': {e}", dir.display()));
            http::build_403_response()
        }
        Err(e) => {
            logger::log_error(&format!("Failed to list '{}': {e}", dir.display()));
            http::build_404_response()
        }
    }
}
