// Error types
// Startup failures are fatal and abort the process; per-request failures
// are translated to HTTP statuses in the handler and never appear here.

use std::io;
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured host:port pair does not parse as a socket address.
    #[error("invalid listen address '{addr}': {source}")]
    Addr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    /// The listening socket could not be bound (port already in use,
    /// insufficient privilege).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The served root directory does not exist or is not accessible.
    #[error("cannot serve root directory '{dir}': {source}")]
    Root {
        dir: String,
        #[source]
        source: io::Error,
    },
}
