//! Simulator error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SwarmError` via `From` impls, or keep them separate (swarm-output does).
//! Both patterns are acceptable; prefer whichever keeps error sites clean.
//!
//! The per-frame step itself is a total function and has no error path —
//! `SwarmError` only surfaces at construction, resize, and I/O boundaries.

use thiserror::Error;

/// The top-level error type for `swarm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `swarm-*` crates.
pub type SwarmResult<T> = Result<T, SwarmError>;
