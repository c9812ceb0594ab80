//! The adaptor: the unit that carries a head's channels and their tips.

use lh_channel::{AxisSpacing, ChannelParameter};
use lh_core::Coordinates2D;
use lh_labware::Tip;

use crate::{HeadError, HeadResult};

/// A set of channels with per-axis spacing limits and, optionally, one tip
/// per channel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adaptor {
    /// Adaptor type name.  Plates key their multi-tip well targets on it.
    pub name:    String,
    pub params:  ChannelParameter,
    pub spacing: AxisSpacing,
    tips:        Vec<Option<Tip>>,
}

impl Adaptor {
    pub fn new(
        name:    impl Into<String>,
        params:  ChannelParameter,
        spacing: AxisSpacing,
    ) -> HeadResult<Self> {
        params.validate()?;
        let tips = vec![None; params.multi];
        Ok(Self { name: name.into(), params, spacing, tips })
    }

    /// An adaptor whose channels sit `pitch` apart, immovably.
    pub fn rigid(name: impl Into<String>, params: ChannelParameter, pitch: f64) -> HeadResult<Self> {
        let spacing = AxisSpacing::rigid(params.orientation, pitch);
        Self::new(name, params, spacing)
    }

    #[inline]
    pub fn channel_count(&self) -> usize {
        self.params.multi
    }

    /// Smallest offset between adjacent channels, per axis.
    pub fn smallest_channel_spacing(&self) -> Coordinates2D {
        self.spacing.smallest()
    }

    /// Largest offset between adjacent channels, per axis.
    pub fn largest_channel_spacing(&self) -> Coordinates2D {
        self.spacing.largest()
    }

    // ── Tips ──────────────────────────────────────────────────────────────

    pub fn tips(&self) -> &[Option<Tip>] {
        &self.tips
    }

    pub fn n_tips_loaded(&self) -> usize {
        self.tips.iter().flatten().count()
    }

    /// Load one optional tip per channel.
    ///
    /// Fails without loading anything if any channel given a tip already
    /// holds one.
    pub fn load_tips(&mut self, tips: Vec<Option<Tip>>) -> HeadResult<()> {
        if tips.len() != self.tips.len() {
            return Err(HeadError::LengthMismatch {
                expected: self.tips.len(),
                got:      tips.len(),
                what:     "tips",
            });
        }
        if let Some(channel) = (0..tips.len()).find(|&i| tips[i].is_some() && self.tips[i].is_some()) {
            return Err(HeadError::TipAlreadyLoaded { channel });
        }
        for (slot, tip) in self.tips.iter_mut().zip(tips) {
            if tip.is_some() {
                *slot = tip;
            }
        }
        Ok(())
    }

    /// Drop every loaded tip, returning them in channel order.
    pub fn unload_tips(&mut self) -> Vec<Tip> {
        self.tips.iter_mut().filter_map(Option::take).collect()
    }
}
