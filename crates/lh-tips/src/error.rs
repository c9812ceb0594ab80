use lh_core::{ErrorKind, Orientation};
use lh_labware::LabwareError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipError {
    #[error("mask length mismatch: got {got}, tipbox {orientation} line holds {expected}")]
    MaskLengthMismatch {
        expected:    usize,
        got:         usize,
        orientation: Orientation,
    },

    #[error("{wanted} clean tips in a {orientation} line not found or unknown orientation")]
    NotFound {
        wanted:      usize,
        orientation: Orientation,
    },

    #[error("not enough tips in tipbox: requested {requested}, {available} clean")]
    NotEnoughTips { requested: usize, available: usize },

    #[error(transparent)]
    Labware(#[from] LabwareError),
}

impl TipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TipError::MaskLengthMismatch { .. } => ErrorKind::InvalidConfiguration,
            TipError::NotFound { .. } | TipError::NotEnoughTips { .. } => {
                ErrorKind::InsufficientSupply
            }
            TipError::Labware(e) => e.kind(),
        }
    }
}

pub type TipResult<T> = Result<T, TipError>;
