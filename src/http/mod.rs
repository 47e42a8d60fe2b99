//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from file-system logic: content-type
//! inference, response builders, and the no-cache response decorator.

pub mod mime;
pub mod no_cache;
pub mod response;

// Re-export commonly used builders
pub use no_cache::apply_no_cache;
pub use response::{
    build_403_response, build_404_response, build_405_response, build_redirect_response,
};
