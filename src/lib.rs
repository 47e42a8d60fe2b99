//! acidserve — a static file server that defeats client-side caching.
//!
//! Serves a directory tree over HTTP/1.1 and stamps every response with a
//! fixed no-cache header set, so browsers refetch live-updating video and
//! image files instead of replaying stale cache entries.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::Config;
pub use error::ServerError;
pub use server::Server;
