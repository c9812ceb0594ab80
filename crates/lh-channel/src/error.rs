use lh_core::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChannelError {
    #[error("channel {channel} cannot reach position {position:.3} mm")]
    CannotReachPosition { channel: usize, position: f64 },

    #[error("channel {channel} cannot move to the requested position: gap {gap:.3} mm outside [{min:.3}, {max:.3}]")]
    CannotMove {
        channel: usize,
        gap:     f64,
        min:     f64,
        max:     f64,
    },

    #[error("channels must be evenly spaced: gap {gap:.3} mm before channel {channel} differs from {expected:.3} mm")]
    UnevenSpacing {
        channel:  usize,
        gap:      f64,
        expected: f64,
    },

    #[error("{what} length {got} does not match channel count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("channel configuration error: {0}")]
    Config(String),
}

impl ChannelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChannelError::CannotReachPosition { .. }
            | ChannelError::CannotMove { .. }
            | ChannelError::UnevenSpacing { .. } => ErrorKind::InfeasibleGeometry,
            ChannelError::LengthMismatch { .. } | ChannelError::Config(_) => {
                ErrorKind::InvalidConfiguration
            }
        }
    }
}

pub type ChannelResult<T> = Result<T, ChannelError>;
