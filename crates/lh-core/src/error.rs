//! Framework error type and the shared error taxonomy.
//!
//! Sub-crates define their own error enums (`ChannelError`, `HeadError`,
//! `TipError`, …) and classify each variant into an [`ErrorKind`] so callers
//! can decide how to recover without matching on every crate's variants.

use thiserror::Error;

/// Coarse classification shared by every `lh-*` error type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// A spacing or reachability check failed.  The caller may fall back to a
    /// different channel subset or to single-channel execution.
    InfeasibleGeometry,
    /// Not enough clean tips are available.  The caller may refill, reduce
    /// the requested count, or abort the run.
    InsufficientSupply,
    /// A caller-side contract violation (mismatched slice or mask lengths).
    /// Indicates a defect in the calling code.
    InvalidConfiguration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::InfeasibleGeometry   => "infeasible geometry",
            ErrorKind::InsufficientSupply   => "insufficient supply",
            ErrorKind::InvalidConfiguration => "invalid configuration",
        })
    }
}

/// Errors produced by `lh-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("cannot parse well coordinates from {0:?}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfiguration
    }
}

/// Shorthand result type for `lh-core`.
pub type CoreResult<T> = Result<T, CoreError>;
