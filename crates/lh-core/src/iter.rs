//! Deterministic traversal of every address in a grid.
//!
//! # Ordering
//!
//! ```text
//! ColumnWise, TopToBottom, LeftToRight     RowWise, TopToBottom, LeftToRight
//!   A1 B1 C1 … A2 B2 C2 …                    A1 A2 A3 … B1 B2 B3 …
//! ```
//!
//! The direction enums flip the inner and outer sequences independently.

use crate::{Addressable, WellCoords};

/// Which index varies slowest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MajorOrder {
    /// Walk along a row before moving to the next row.
    RowWise,
    /// Walk down a column before moving to the next column.
    #[default]
    ColumnWise,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalDirection {
    #[default]
    TopToBottom,
    BottomToTop,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Iterator over every [`WellCoords`] of an `n_cols × n_rows` grid.
#[derive(Clone, Debug)]
pub struct AddressIterator {
    n_cols:     usize,
    n_rows:     usize,
    order:      MajorOrder,
    vertical:   VerticalDirection,
    horizontal: HorizontalDirection,
    /// Linear position in traversal order, `0 ..= n_cols * n_rows`.
    step:       usize,
}

impl AddressIterator {
    pub fn new(
        n_cols:     usize,
        n_rows:     usize,
        order:      MajorOrder,
        vertical:   VerticalDirection,
        horizontal: HorizontalDirection,
    ) -> Self {
        Self { n_cols, n_rows, order, vertical, horizontal, step: 0 }
    }

    /// Iterate over the full grid of `container`.
    pub fn over<A: Addressable + ?Sized>(
        container:  &A,
        order:      MajorOrder,
        vertical:   VerticalDirection,
        horizontal: HorizontalDirection,
    ) -> Self {
        Self::new(container.n_cols(), container.n_rows(), order, vertical, horizontal)
    }

    fn total(&self) -> usize {
        self.n_cols * self.n_rows
    }

    fn coords_at(&self, step: usize) -> WellCoords {
        let (col, row) = match self.order {
            MajorOrder::ColumnWise => (step / self.n_rows, step % self.n_rows),
            MajorOrder::RowWise    => (step % self.n_cols, step / self.n_cols),
        };
        let x = match self.horizontal {
            HorizontalDirection::LeftToRight => col,
            HorizontalDirection::RightToLeft => self.n_cols - 1 - col,
        };
        let y = match self.vertical {
            VerticalDirection::TopToBottom => row,
            VerticalDirection::BottomToTop => self.n_rows - 1 - row,
        };
        WellCoords::new(x, y)
    }
}

impl Iterator for AddressIterator {
    type Item = WellCoords;

    fn next(&mut self) -> Option<WellCoords> {
        if self.step >= self.total() {
            return None;
        }
        let wc = self.coords_at(self.step);
        self.step += 1;
        Some(wc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total().saturating_sub(self.step);
        (left, Some(left))
    }
}

impl ExactSizeIterator for AddressIterator {}
