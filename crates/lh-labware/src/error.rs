//! Labware error type.

use thiserror::Error;

use lh_core::{ErrorKind, WellCoords};

/// Errors produced by `lh-labware`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabwareError {
    #[error("address {0} is outside the container")]
    OutOfBounds(WellCoords),

    #[error("no tip at {0}")]
    NoTip(WellCoords),

    #[error("slot {0} already holds a tip")]
    SlotOccupied(WellCoords),

    #[error("labware configuration error: {0}")]
    Config(String),
}

impl LabwareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabwareError::NoTip(_) => ErrorKind::InsufficientSupply,
            LabwareError::OutOfBounds(_)
            | LabwareError::SlotOccupied(_)
            | LabwareError::Config(_) => ErrorKind::InvalidConfiguration,
        }
    }
}

pub type LabwareResult<T> = Result<T, LabwareError>;
