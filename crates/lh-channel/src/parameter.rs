//! Static description of a head's channels.

use lh_core::Orientation;

use crate::{ChannelError, ChannelResult};

/// Channel count, layout, and independence of a head or adaptor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelParameter {
    pub name: String,
    /// Number of channels.
    pub multi: usize,
    /// `true` if each channel can be used (and positioned) on its own;
    /// `false` if the channels move as one rigid block.
    pub independent: bool,
    pub orientation: Orientation,
}

impl ChannelParameter {
    /// A rigid (non-independent) head.
    pub fn new(name: impl Into<String>, multi: usize, orientation: Orientation) -> Self {
        Self { name: name.into(), multi, independent: false, orientation }
    }

    pub fn with_independent(mut self, independent: bool) -> Self {
        self.independent = independent;
        self
    }

    /// Reject descriptions no hardware can have.
    pub fn validate(&self) -> ChannelResult<()> {
        if self.multi == 0 {
            return Err(ChannelError::Config(format!(
                "channel parameter {:?} has no channels",
                self.name
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn is_single_channel(&self) -> bool {
        self.multi == 1
    }
}
