//! HTTP middleware for request processing.
//!
//! Provides the cross-origin policy and request tracing.

pub mod cors;
pub mod tracing;
