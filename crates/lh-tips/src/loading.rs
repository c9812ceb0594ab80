//! Tip-pickup planning.
//!
//! # Chunks
//!
//! A plan is a list of chunks; each chunk is a run of tips the head can pick
//! up in one pass.  The planner walks the rack in the configured order and
//! grows a chunk while consecutive positions hold clean tips.  A chunk ends
//! at an empty (or dirty) slot, or where the walk jumps to a new row *and*
//! column at once, such as the wrap from the bottom of one column to the
//! top of the next.  Chunks therefore never span more than one rack line.
//!
//! # Sequential loading
//!
//! Without sequential loading a chunk is only used if it alone covers all
//! the tips still needed.  With it, short chunks are kept and the head loads
//! over several passes.  Reverse sequential loading returns the same chunks
//! last-first, each with its tips last-first.

use tracing::debug;

use lh_core::{AddressIterator, HorizontalDirection, MajorOrder, VerticalDirection, WellCoords};
use lh_labware::Tipbox;

use crate::{TipError, TipResult};

/// Whether a full load may be assembled from several shorter pickups.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequentialTipLoading {
    /// Every pickup must supply all remaining tips at once.
    #[default]
    Disabled,
    /// Partial pickups allowed, in walk order.
    Forward,
    /// Partial pickups allowed, chunks and tips within them reversed.
    Reverse,
}

impl SequentialTipLoading {
    #[inline]
    pub fn allows_partial(self) -> bool {
        !matches!(self, SequentialTipLoading::Disabled)
    }
}

/// How a head takes tips from a rack.  Built once from the device
/// description; the `with_*` methods return modified copies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TipLoadingBehaviour {
    /// Refill an exhausted rack instead of failing.
    pub auto_refill_tipboxes: bool,
    pub loading_order:        MajorOrder,
    pub vertical_direction:   VerticalDirection,
    pub horizontal_direction: HorizontalDirection,
    pub chunking:             SequentialTipLoading,
}

impl TipLoadingBehaviour {
    pub fn with_auto_refill(mut self, on: bool) -> Self {
        self.auto_refill_tipboxes = on;
        self
    }

    pub fn with_order(
        mut self,
        order:      MajorOrder,
        vertical:   VerticalDirection,
        horizontal: HorizontalDirection,
    ) -> Self {
        self.loading_order = order;
        self.vertical_direction = vertical;
        self.horizontal_direction = horizontal;
        self
    }

    pub fn with_chunking(mut self, chunking: SequentialTipLoading) -> Self {
        self.chunking = chunking;
        self
    }

    /// Plan which tips to pick up to load `num` tips from `tipbox`.
    ///
    /// Returns the chunks in pickup order.  The rack is only modified if it
    /// holds fewer than `num` clean tips and auto-refill is on; the planned
    /// tips themselves stay in place (see [`Tipbox::take_planned`]).
    ///
    /// # Errors
    ///
    /// [`TipError::NotEnoughTips`] if the rack cannot supply `num` tips under
    /// this behaviour's chunking policy.
    pub fn get_behaviour(&self, tipbox: &mut Tipbox, num: usize) -> TipResult<Vec<Vec<WellCoords>>> {
        if num == 0 {
            return Ok(Vec::new());
        }

        let clean = tipbox.n_clean_tips();
        if clean < num {
            if !self.auto_refill_tipboxes {
                return Err(TipError::NotEnoughTips { requested: num, available: clean });
            }
            tipbox.refill();
        }

        let mut plan = Plan { chunks: Vec::new(), chunk: Vec::new(), remaining: num, chunking: self.chunking };
        let mut prev: Option<WellCoords> = None;
        let walk = AddressIterator::over(
            &*tipbox,
            self.loading_order,
            self.vertical_direction,
            self.horizontal_direction,
        );

        for wc in walk {
            if plan.remaining == 0 {
                break;
            }
            let present = tipbox.has_clean_tip(wc);
            let jumped = prev.is_some_and(|p| p.x != wc.x && p.y != wc.y);
            if !present || jumped {
                plan.close_chunk();
            }
            if present {
                plan.chunk.push(wc);
                if plan.chunk.len() == plan.remaining {
                    plan.close_chunk();
                }
            }
            prev = Some(wc);
        }
        plan.close_chunk();

        if plan.remaining > 0 {
            return Err(TipError::NotEnoughTips { requested: num, available: tipbox.n_clean_tips() });
        }

        let mut chunks = plan.chunks;
        if self.chunking == SequentialTipLoading::Reverse {
            chunks.reverse();
            for chunk in &mut chunks {
                chunk.reverse();
            }
        }

        debug!(tipbox = %tipbox.name, num, passes = chunks.len(), "planned tip pickup");
        Ok(chunks)
    }
}

struct Plan {
    chunks:    Vec<Vec<WellCoords>>,
    chunk:     Vec<WellCoords>,
    remaining: usize,
    chunking:  SequentialTipLoading,
}

impl Plan {
    /// End the current chunk, keeping it if the chunking policy allows.
    fn close_chunk(&mut self) {
        if self.chunk.is_empty() {
            return;
        }
        let mut chunk = std::mem::take(&mut self.chunk);
        if chunk.len() >= self.remaining || self.chunking.allows_partial() {
            chunk.truncate(self.remaining);
            self.remaining -= chunk.len();
            self.chunks.push(chunk);
        }
    }
}
