//! Tips and the slots that hold them.

use lh_core::TipId;

/// A single disposable (or washable) tip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tip {
    pub id: TipId,
    /// Tip type name, e.g. `"Gilson200"`.  Shared by every tip in a rack.
    pub kind: String,
    /// Set once a tip has touched liquid.  Dirty tips are never allocated.
    pub dirty: bool,
}

impl Tip {
    pub fn new(id: TipId, kind: impl Into<String>) -> Self {
        Self { id, kind: kind.into(), dirty: false }
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        !self.dirty
    }
}

/// One cell of a tip rack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Occupied(Tip),
    #[default]
    Empty,
}

impl Slot {
    #[inline]
    pub fn tip(&self) -> Option<&Tip> {
        match self {
            Slot::Occupied(t) => Some(t),
            Slot::Empty => None,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// `true` if the slot holds a tip that is not dirty.
    #[inline]
    pub fn has_clean_tip(&self) -> bool {
        matches!(self, Slot::Occupied(t) if t.is_clean())
    }

    /// Empty the slot, returning whatever it held.
    #[inline]
    pub fn take(&mut self) -> Option<Tip> {
        match std::mem::take(self) {
            Slot::Occupied(t) => Some(t),
            Slot::Empty => None,
        }
    }
}
