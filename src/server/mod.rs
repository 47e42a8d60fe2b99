//! Server module
//!
//! Owns the listening socket and the accept loop. The server is an
//! explicitly constructed value: `bind` produces it, `run` drives it until
//! the shutdown notification fires, and returning from `run` drops the
//! listener so no further connections are accepted.

mod connection;
mod listener;
pub mod signal;

// Re-export commonly used types
pub use signal::SignalHandler;

use crate::config::Config;
use crate::error::ServerError;
use crate::logger;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Immutable context shared read-only across all connection tasks.
#[derive(Debug)]
pub struct ServeContext {
    /// Canonical root directory; containment checks compare against this.
    pub root: PathBuf,
    /// Whether to emit an access log line per request.
    pub access_log: bool,
}

/// A bound static file server.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    ctx: Arc<ServeContext>,
}

impl Server {
    /// Canonicalize the served root and bind the listening socket.
    ///
    /// Must be called from within a tokio runtime. Binding failures are
    /// fatal to startup; the caller propagates them and exits.
    pub fn bind(config: &Config) -> Result<Self, ServerError> {
        let root = PathBuf::from(&config.root.dir)
            .canonicalize()
            .map_err(|source| ServerError::Root {
                dir: config.root.dir.clone(),
                source,
            })?;

        let addr = config.socket_addr()?;
        let listener =
            listener::bind_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            ctx: Arc::new(ServeContext {
                root,
                access_log: config.logging.access_log,
            }),
        })
    }

    /// Address the listener actually bound (resolves port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Canonical root directory being served.
    pub fn root(&self) -> &Path {
        &self.ctx.root
    }

    /// Accept connections until the shutdown notification fires.
    ///
    /// Each accepted connection is served on its own task, so one slow
    /// client never blocks the accept loop. Accept errors are logged and
    /// the loop continues. When shutdown is observed the loop returns and
    /// the listener drops; in-flight connection tasks finish on their own.
    pub async fn run(self, shutdown: Arc<Notify>) {
        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => {
                            connection::spawn(stream, peer_addr, Arc::clone(&self.ctx));
                        }
                        Err(e) => {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }

                () = shutdown.notified() => {
                    logger::log_shutdown();
                    break;
                }
            }
        }
    }
}
