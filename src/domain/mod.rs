//! Domain layer for card-labeler
//!
//! Card, project and label models, the error types, and the port the
//! services talk to GitHub through.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ApiError, ApiResult, DomainError, DomainResult, ResolveError};
