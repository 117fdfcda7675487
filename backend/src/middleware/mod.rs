//! Middleware for the money tracker API

mod tracing;

pub use self::tracing::request_tracing;
