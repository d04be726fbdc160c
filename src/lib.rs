//! Patent claims lookup service.
//!
//! Wraps [`patent_scrape`] in a small HTTP API: a caller posts a patent
//! identifier and gets back the patent's numbered claims, or an error that
//! says which of these happened:
//!
//! - no identifier supplied (`400`)
//! - page retrieved, no claims found (`404`)
//! - page could not be retrieved (`502`)
//! - anything else (`500`, details only in the logs)
//!
//! Lookups are independent: no caching, no retries, no shared mutable state.

pub mod config;
pub mod error;
pub mod lookup;
pub mod server;

pub use config::{ServerConfig, ServiceConfig};
pub use error::{LookupError, Result, ServiceError};
pub use lookup::lookup_claims;
pub use server::{ClaimsServer, ErrorResponse, PatentRequest, PatentResponse, router};
