//! Core types shared across the storefront: the error taxonomy, sequential
//! id generation, and lenient input coercion.

pub mod coerce;
pub mod error;
pub mod id;

pub use error::{ApiError, ApiJson};
pub use id::IdSequence;
