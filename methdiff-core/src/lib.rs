//! Shared primitives for the methdiff toolkit.
//!
//! `methdiff-core` provides the foundation the other methdiff crates build on:
//!
//! - **Error types** — [`MethdiffError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Summarizable`] for statistical result types

pub mod error;
pub mod traits;

pub use error::{MethdiffError, Result};
pub use traits::*;
