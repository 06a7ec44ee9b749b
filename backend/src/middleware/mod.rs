//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns,
//! currently trace identifier propagation.

pub mod trace;

pub use trace::Trace;
