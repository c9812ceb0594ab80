use lh_channel::ChannelError;
use lh_core::{Coordinates2D, ErrorKind, WellCoords};
use lh_tips::TipError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HeadError {
    #[error("head {0:?} has no adaptor loaded")]
    NoAdaptor(String),

    #[error("channel {channel} is unused inside a run of a non-independent head")]
    NonContiguous { channel: usize },

    #[error("{requested} channels requested, adaptor has {available}")]
    TooManyChannels { requested: usize, available: usize },

    #[error("{requested} tips requested, only {available} channels are free")]
    TooManyTips { requested: usize, available: usize },

    #[error("well {0} is not on the target container")]
    NoSuchWell(WellCoords),

    #[error("well {well} can hold only {capacity} tips at once")]
    WellFull { well: WellCoords, capacity: usize },

    #[error("offset {offset} between channels {from} and {to} is outside [{min}, {max}]")]
    OffsetOutOfRange {
        from:   usize,
        to:     usize,
        offset: Coordinates2D,
        min:    Coordinates2D,
        max:    Coordinates2D,
    },

    #[error("channel {channel} already holds a tip")]
    TipAlreadyLoaded { channel: usize },

    #[error("{what} length {got} does not match channel count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Tips(#[from] TipError),
}

impl HeadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeadError::NonContiguous { .. }
            | HeadError::TooManyChannels { .. }
            | HeadError::NoSuchWell(_)
            | HeadError::WellFull { .. }
            | HeadError::OffsetOutOfRange { .. } => ErrorKind::InfeasibleGeometry,
            HeadError::NoAdaptor(_)
            | HeadError::TooManyTips { .. }
            | HeadError::TipAlreadyLoaded { .. }
            | HeadError::LengthMismatch { .. } => ErrorKind::InvalidConfiguration,
            HeadError::Channel(e) => e.kind(),
            HeadError::Tips(e) => e.kind(),
        }
    }
}

pub type HeadResult<T> = Result<T, HeadError>;
