//! Grid-shaped tip storage.
//!
//! # Data layout
//!
//! Slots are stored row-major in a single `Vec`:
//!
//! ```text
//! slots[ y * n_cols + x ]
//! ```
//!
//! The grid dimensions never change after construction; only slot contents
//! (present / empty, clean / dirty) are mutated.  Anything that serializes a
//! tipbox can rely on that.

use tracing::info;

use lh_core::{Addressable, Coordinates2D, Coordinates3D, TipId, TipboxId, WellCoords};

use crate::{LabwareError, LabwareResult, Slot, Tip};

/// A rack of tips addressable by [`WellCoords`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tipbox {
    pub id:   TipboxId,
    pub name: String,
    /// Tip type minted on construction and on every refill.
    pub tip_kind: String,
    /// Deck position of the center of the A1 tip.
    pub origin: Coordinates3D,
    /// Center-to-center distance between adjacent columns (`x`) and rows (`y`).
    pub pitch: Coordinates2D,

    n_cols:   usize,
    n_rows:   usize,
    slots:    Vec<Slot>,
    next_tip: TipId,
}

impl Tipbox {
    /// A full rack of clean tips.
    pub fn new(
        id:       TipboxId,
        name:     impl Into<String>,
        tip_kind: impl Into<String>,
        n_cols:   usize,
        n_rows:   usize,
        origin:   Coordinates3D,
        pitch:    Coordinates2D,
    ) -> Self {
        let mut tb = Self::empty(id, name, tip_kind, n_cols, n_rows, origin, pitch);
        tb.fill();
        tb
    }

    /// A rack of the given shape with no tips in it.
    pub fn empty(
        id:       TipboxId,
        name:     impl Into<String>,
        tip_kind: impl Into<String>,
        n_cols:   usize,
        n_rows:   usize,
        origin:   Coordinates3D,
        pitch:    Coordinates2D,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tip_kind: tip_kind.into(),
            origin,
            pitch,
            n_cols,
            n_rows,
            slots: vec![Slot::Empty; n_cols * n_rows],
            next_tip: TipId(0),
        }
    }

    /// Standard 96-position rack (12 × 8, 9 mm pitch), full.
    pub fn sbs_96(id: TipboxId, name: impl Into<String>, tip_kind: impl Into<String>) -> Self {
        Self::new(
            id, name, tip_kind, 12, 8,
            Coordinates3D::new(14.38, 11.24, 60.0),
            Coordinates2D::new(9.0, 9.0),
        )
    }

    // ── Slot access ───────────────────────────────────────────────────────

    #[inline]
    fn index(&self, wc: WellCoords) -> Option<usize> {
        (wc.x < self.n_cols && wc.y < self.n_rows).then(|| wc.y * self.n_cols + wc.x)
    }

    /// The slot at `wc`, or `None` if `wc` is outside the rack.
    pub fn slot(&self, wc: WellCoords) -> Option<&Slot> {
        self.index(wc).map(|i| &self.slots[i])
    }

    pub fn tip_at(&self, wc: WellCoords) -> Option<&Tip> {
        self.slot(wc).and_then(Slot::tip)
    }

    pub fn has_tip(&self, wc: WellCoords) -> bool {
        self.slot(wc).is_some_and(Slot::is_occupied)
    }

    pub fn has_clean_tip(&self, wc: WellCoords) -> bool {
        self.slot(wc).is_some_and(Slot::has_clean_tip)
    }

    /// Number of occupied slots, dirty tips included.
    pub fn n_tips(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn n_clean_tips(&self) -> usize {
        self.slots.iter().filter(|s| s.has_clean_tip()).count()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove and return the tip at `wc`.
    pub fn remove_tip(&mut self, wc: WellCoords) -> LabwareResult<Tip> {
        let i = self.index(wc).ok_or(LabwareError::OutOfBounds(wc))?;
        self.slots[i].take().ok_or(LabwareError::NoTip(wc))
    }

    /// Put a tip (typically a used, dirty one) back into an empty slot.
    pub fn put_tip(&mut self, wc: WellCoords, tip: Tip) -> LabwareResult<()> {
        let i = self.index(wc).ok_or(LabwareError::OutOfBounds(wc))?;
        if self.slots[i].is_occupied() {
            return Err(LabwareError::SlotOccupied(wc));
        }
        self.slots[i] = Slot::Occupied(tip);
        Ok(())
    }

    /// Flag the tip at `wc` as dirty without removing it.
    pub fn mark_dirty(&mut self, wc: WellCoords) -> LabwareResult<()> {
        let i = self.index(wc).ok_or(LabwareError::OutOfBounds(wc))?;
        match &mut self.slots[i] {
            Slot::Occupied(t) => {
                t.dirty = true;
                Ok(())
            }
            Slot::Empty => Err(LabwareError::NoTip(wc)),
        }
    }

    /// Remove every tip named by a pickup plan.
    ///
    /// All addresses are checked before anything is removed, so on error the
    /// rack is unchanged.
    pub fn take_planned(&mut self, plan: &[Vec<WellCoords>]) -> LabwareResult<Vec<Tip>> {
        let mut seen = Vec::new();
        for &wc in plan.iter().flatten() {
            let i = self.index(wc).ok_or(LabwareError::OutOfBounds(wc))?;
            if !self.slots[i].is_occupied() || seen.contains(&i) {
                return Err(LabwareError::NoTip(wc));
            }
            seen.push(i);
        }
        Ok(seen.into_iter().filter_map(|i| self.slots[i].take()).collect())
    }

    /// Replace every slot with a fresh clean tip.  Dirty tips are discarded.
    pub fn refill(&mut self) {
        info!(tipbox = %self.name, before = self.n_clean_tips(), "refilling tipbox");
        self.fill();
    }

    /// Remove every tip.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
    }

    fn fill(&mut self) {
        for i in 0..self.slots.len() {
            let tip = Tip::new(self.next_tip, self.tip_kind.clone());
            self.next_tip = self.next_tip.next();
            self.slots[i] = Slot::Occupied(tip);
        }
    }
}

impl Addressable for Tipbox {
    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn well_center(&self, wc: WellCoords) -> Option<Coordinates3D> {
        self.add_is_valid(wc).then(|| {
            self.origin
                + Coordinates3D::new(wc.x as f64 * self.pitch.x, wc.y as f64 * self.pitch.y, 0.0)
        })
    }
}
