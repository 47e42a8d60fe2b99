//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method gate, path decoding,
//! and dispatch to the static file resolver.

use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::server::ServeContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: Arc<ServeContext>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let raw_path = req.uri().path();
    let is_head = *method == Method::HEAD;

    // 1. Only GET and HEAD are served; everything else is refused up front
    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    // 2. Percent-decode the request path
    let Some(decoded) = decode_path(raw_path) else {
        logger::log_warning(&format!("Undecodable request path: {raw_path}"));
        return Ok(http::build_404_response());
    };

    // 3. Resolve against the served root and build the response
    let response = static_files::serve_path(&ctx, &decoded, raw_path, is_head).await;
    Ok(response)
}

/// Check HTTP method and return a 405 for anything but GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Percent-decode a request path.
///
/// Returns None for sequences that do not decode to valid UTF-8 and for
/// embedded NUL bytes; the caller answers 404 without touching the disk.
fn decode_path(raw: &str) -> Option<String> {
    let decoded = urlencoding::decode(raw).ok()?;
    if decoded.contains('\0') {
        return None;
    }
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_head_pass_the_gate() {
        assert!(check_http_method(&Method::GET).is_none());
        assert!(check_http_method(&Method::HEAD).is_none());
    }

    #[test]
    fn test_other_methods_refused() {
        for method in [
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ] {
            let resp = check_http_method(&method).expect("must be refused");
            assert_eq!(resp.status(), 405);
        }
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/plain").as_deref(), Some("/plain"));
        assert_eq!(
            decode_path("/with%20space.mp4").as_deref(),
            Some("/with space.mp4")
        );
        assert_eq!(decode_path("/a%26b").as_deref(), Some("/a&b"));
    }

    #[test]
    fn test_decode_path_rejects_nul() {
        assert!(decode_path("/bad%00path").is_none());
    }

    #[test]
    fn test_decode_path_rejects_invalid_utf8() {
        assert!(decode_path("/bad%ff%fe").is_none());
    }
}
