//! No-cache response decorator
//!
//! The reason this server exists: every response, whatever its status,
//! carries a header set telling browsers and proxies not to reuse what
//! they received. Live-updating media would otherwise render stale.

use hyper::header::{HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use hyper::Response;

/// `Cache-Control` value stamped on every response.
pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// `Pragma` value for HTTP/1.0-era clients and proxies.
pub const PRAGMA_VALUE: &str = "no-cache";

/// `Expires` value; any date in the past (or 0) means already expired.
pub const EXPIRES_VALUE: &str = "0";

/// Stamp the fixed no-cache header set onto a response.
///
/// The connection service applies this after the handler has produced its
/// response, so error statuses are decorated the same way as file bodies.
/// Existing values for the three headers are replaced, not appended.
pub fn apply_no_cache<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
    headers.insert(PRAGMA, HeaderValue::from_static(PRAGMA_VALUE));
    headers.insert(EXPIRES, HeaderValue::from_static(EXPIRES_VALUE));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    #[test]
    fn test_headers_added_verbatim() {
        let response = Response::new(Full::new(Bytes::from("body")));
        let stamped = apply_no_cache(response);

        assert_eq!(
            stamped.headers().get(CACHE_CONTROL).unwrap(),
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(stamped.headers().get(PRAGMA).unwrap(), "no-cache");
        assert_eq!(stamped.headers().get(EXPIRES).unwrap(), "0");
    }

    #[test]
    fn test_error_responses_are_stamped_too() {
        let response = Response::builder()
            .status(404)
            .body(Full::new(Bytes::from("404 Not Found")))
            .unwrap();
        let stamped = apply_no_cache(response);

        assert_eq!(stamped.status(), 404);
        assert_eq!(
            stamped.headers().get(CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_VALUE
        );
        assert_eq!(stamped.headers().get(EXPIRES).unwrap(), EXPIRES_VALUE);
    }

    #[test]
    fn test_existing_cache_header_is_replaced() {
        let response = Response::builder()
            .status(200)
            .header(CACHE_CONTROL, "public, max-age=3600")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let stamped = apply_no_cache(response);

        let values: Vec<_> = stamped.headers().get_all(CACHE_CONTROL).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], CACHE_CONTROL_VALUE);
    }
}
