// Connection handling module
// One spawned task per accepted connection; hyper drives HTTP/1.1 on it.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::header::CONTENT_LENGTH;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use super::ServeContext;
use crate::handler;
use crate::http::no_cache;
use crate::logger;

/// Serve one connection on its own task.
///
/// The service composes the router with the no-cache decorator: the
/// handler produces a response, and every response is stamped on its way
/// out regardless of status code.
pub fn spawn(stream: TcpStream, peer_addr: SocketAddr, ctx: Arc<ServeContext>) {
    if ctx.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let ctx = Arc::clone(&ctx);
            async move {
                let method = req.method().to_string();
                let path = req.uri().path().to_string();

                let response = handler::handle_request(req, Arc::clone(&ctx)).await?;
                let response = no_cache::apply_no_cache(response);

                if ctx.access_log {
                    let mut entry =
                        logger::AccessLogEntry::new(peer_addr.ip().to_string(), method, path);
                    entry.status = response.status().as_u16();
                    entry.body_bytes = body_bytes(&response);
                    logger::log_access(&entry);
                }

                Ok::<_, std::convert::Infallible>(response)
            }
        });

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service);

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Body size for the access log, read back from Content-Length.
fn body_bytes<B>(response: &hyper::Response<B>) -> usize {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
