//! Masked clean-tip search and removal.
//!
//! # Masks and lines
//!
//! A mask has one entry per channel; `true` means the channel wants a tip.
//! A vertical head picks tips down one rack column (a "line"), a horizontal
//! head along one row.  Position `i` of a mask maps to position `i` of the
//! line, so `has_clean_tips(3, [true, false, true], Vertical)` asks for the
//! tips at column 3, rows 0 and 2 (`A4` and `C4`).
//!
//! # Search order
//!
//! Lines are tried in ascending index order and, within a line, alignments
//! in ascending start position.  The first match wins.  Callers (and tests)
//! rely on this to get the same tips for the same rack state every time.

use tracing::debug;

use lh_core::{Addressable, Orientation, WellCoords};
use lh_labware::{Tip, Tipbox};

use crate::{TipError, TipResult};

/// Tips removed from a rack by one successful masked pickup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipAllocation {
    /// One entry per element of the caller's mask: the address the channel
    /// picks from, or `None` where the mask was `false`.
    pub addresses: Vec<Option<WellCoords>>,
    /// Removed tips with the address each came from, in mask order.
    pub tips: Vec<(WellCoords, Tip)>,
}

impl TipAllocation {
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

/// Clean-tip search over a grid of tip slots.
pub trait TipInventory {
    /// `true` iff every `mask[i] == true` position on line `offset` holds a
    /// present, clean tip.  Positions past the end of the line never do.
    fn has_clean_tips(&self, offset: usize, mask: &[bool], orientation: Orientation) -> bool;

    /// Slide `mask` along line `offset` and return the first alignment whose
    /// tips are all present and clean, as a full-line address list (`None`
    /// where the aligned mask is `false`).
    fn search_clean_tips(
        &self,
        offset:      usize,
        mask:        &[bool],
        orientation: Orientation,
    ) -> Option<Vec<Option<WellCoords>>>;

    /// Find the first line that satisfies `mask` and remove its tips.
    ///
    /// With `can_trim`, leading and trailing `false` entries are ignored for
    /// the search, so the pattern may land anywhere on a line.  Without it,
    /// `mask` must be exactly one line long.
    ///
    /// Nothing is removed unless the whole pattern is found.
    ///
    /// # Errors
    ///
    /// - [`TipError::MaskLengthMismatch`] when `!can_trim` and the mask is
    ///   not one line long.
    /// - [`TipError::NotFound`] when no line satisfies the mask.
    fn get_tips_masked(
        &mut self,
        mask:        &[bool],
        orientation: Orientation,
        can_trim:    bool,
    ) -> TipResult<TipAllocation>;

    /// Put the tips of an earlier allocation back where they came from.
    ///
    /// Every target slot is checked before anything is written, so on error
    /// the rack is unchanged.  An address listed twice is rejected.
    fn restore(&mut self, allocation: TipAllocation) -> TipResult<()>;
}

impl TipInventory for Tipbox {
    fn has_clean_tips(&self, offset: usize, mask: &[bool], orientation: Orientation) -> bool {
        mask.iter()
            .enumerate()
            .filter(|&(_, &want)| want)
            .all(|(i, _)| self.has_clean_tip(WellCoords::on_line(orientation, offset, i)))
    }

    fn search_clean_tips(
        &self,
        offset:      usize,
        mask:        &[bool],
        orientation: Orientation,
    ) -> Option<Vec<Option<WellCoords>>> {
        let line_len = self.line_len(orientation);
        if offset >= self.n_lines(orientation) || mask.len() > line_len {
            return None;
        }

        let mut inflated = vec![false; line_len];
        for start in 0..=line_len - mask.len() {
            inflated.fill(false);
            inflated[start..start + mask.len()].copy_from_slice(mask);
            if self.has_clean_tips(offset, &inflated, orientation) {
                return Some(
                    inflated
                        .iter()
                        .enumerate()
                        .map(|(i, &want)| want.then(|| WellCoords::on_line(orientation, offset, i)))
                        .collect(),
                );
            }
        }
        None
    }

    fn get_tips_masked(
        &mut self,
        mask:        &[bool],
        orientation: Orientation,
        can_trim:    bool,
    ) -> TipResult<TipAllocation> {
        let wanted = mask.iter().filter(|&&b| b).count();

        let search_mask = if can_trim {
            match (mask.iter().position(|&b| b), mask.iter().rposition(|&b| b)) {
                (Some(first), Some(last)) => &mask[first..=last],
                _ => {
                    return Ok(TipAllocation { addresses: vec![None; mask.len()], tips: vec![] });
                }
            }
        } else {
            let expected = self.line_len(orientation);
            if mask.len() != expected {
                return Err(TipError::MaskLengthMismatch { expected, got: mask.len(), orientation });
            }
            mask
        };

        for line in 0..self.n_lines(orientation) {
            let Some(found) = self.search_clean_tips(line, search_mask, orientation) else {
                continue;
            };

            // Matched tips in line order pair up with the mask's `true`
            // entries in mask order.
            let mut matched = found.into_iter().flatten();
            let addresses: Vec<Option<WellCoords>> = mask
                .iter()
                .map(|&want| if want { matched.next() } else { None })
                .collect();

            let mut tips = Vec::with_capacity(wanted);
            for wc in addresses.iter().flatten() {
                tips.push((*wc, self.remove_tip(*wc)?));
            }

            debug!(
                tipbox = %self.name,
                %orientation,
                line,
                taken = tips.len(),
                left = self.n_clean_tips(),
                "allocated masked tips"
            );
            return Ok(TipAllocation { addresses, tips });
        }

        Err(TipError::NotFound { wanted, orientation })
    }

    fn restore(&mut self, allocation: TipAllocation) -> TipResult<()> {
        for (i, (wc, _)) in allocation.tips.iter().enumerate() {
            if allocation.tips[..i].iter().any(|(seen, _)| seen == wc) {
                return Err(lh_labware::LabwareError::SlotOccupied(*wc).into());
            }
            match self.slot(*wc) {
                None => return Err(lh_labware::LabwareError::OutOfBounds(*wc).into()),
                Some(s) if s.is_occupied() => {
                    return Err(lh_labware::LabwareError::SlotOccupied(*wc).into());
                }
                Some(_) => {}
            }
        }
        for (wc, tip) in allocation.tips {
            self.put_tip(wc, tip)?;
        }
        Ok(())
    }
}
