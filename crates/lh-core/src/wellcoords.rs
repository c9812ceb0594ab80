//! Integer grid addresses into plates and tip racks.
//!
//! `X` is the column index and `Y` the row index, both zero-based.  The
//! conventional A1 notation puts the row letter first: `"C5"` is
//! `WellCoords { x: 4, y: 2 }`.  Rows past `Z` continue `AA`, `AB`, …
//! (1536-well plates have 32 rows).
//!
//! "No address" is expressed as `Option<WellCoords>::None` rather than a
//! sentinel value.

use std::fmt;
use std::str::FromStr;

use crate::{Coordinates2D, Coordinates3D, CoreError, Orientation};

/// A `(column, row)` address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WellCoords {
    pub x: usize,
    pub y: usize,
}

impl WellCoords {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Address of position `pos` along line `line` for a given channel
    /// orientation: a vertical line is a column, a horizontal line a row.
    #[inline]
    pub fn on_line(orientation: Orientation, line: usize, pos: usize) -> Self {
        match orientation {
            Orientation::Vertical   => WellCoords::new(line, pos),
            Orientation::Horizontal => WellCoords::new(pos, line),
        }
    }

    /// Row label: `A` … `Z`, then `AA`, `AB`, …
    pub fn row_letters(&self) -> String {
        let mut n = self.y + 1;
        let mut out = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            out.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        out.reverse();
        // Only ASCII capitals are ever pushed.
        String::from_utf8_lossy(&out).into_owned()
    }

    /// A1-style label, e.g. `"H12"`.
    pub fn format_a1(&self) -> String {
        format!("{}{}", self.row_letters(), self.x + 1)
    }
}

impl fmt::Display for WellCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_a1())
    }
}

impl FromStr for WellCoords {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| CoreError::Parse(s.to_owned()))?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || digits.is_empty() {
            return Err(CoreError::Parse(s.to_owned()));
        }

        let mut row = 0usize;
        for c in letters.bytes() {
            let c = c.to_ascii_uppercase();
            row = row
                .checked_mul(26)
                .and_then(|r| r.checked_add((c - b'A') as usize + 1))
                .ok_or_else(|| CoreError::Parse(s.to_owned()))?;
        }

        let col: usize = digits.parse().map_err(|_| CoreError::Parse(s.to_owned()))?;
        if col == 0 {
            return Err(CoreError::Parse(s.to_owned()));
        }

        Ok(WellCoords::new(col - 1, row - 1))
    }
}

// ── Addressable ───────────────────────────────────────────────────────────────

/// A grid-shaped container (plate or tip rack) that can be addressed by
/// [`WellCoords`].
///
/// This is the narrow geometry interface the planning crates consume; the
/// liquid and volume model lives elsewhere.
pub trait Addressable {
    fn n_rows(&self) -> usize;

    fn n_cols(&self) -> usize;

    /// Deck position of the center of the well (or tip) at `wc`, or `None`
    /// if the address is outside the container.
    fn well_center(&self, wc: WellCoords) -> Option<Coordinates3D>;

    /// Offsets from the well center at which several channels of the named
    /// adaptor may access the same well at once.  Empty means only one
    /// channel may use a well at a time.
    fn well_targets(&self, _adaptor: &str) -> &[Coordinates2D] {
        &[]
    }

    /// `true` if `wc` lies inside the grid.
    #[inline]
    fn add_is_valid(&self, wc: WellCoords) -> bool {
        wc.x < self.n_cols() && wc.y < self.n_rows()
    }

    /// Number of positions along one line for a head of this orientation:
    /// rows for a vertical head, columns for a horizontal one.
    #[inline]
    fn line_len(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Vertical   => self.n_rows(),
            Orientation::Horizontal => self.n_cols(),
        }
    }

    /// Number of lines scanned for a head of this orientation.
    #[inline]
    fn n_lines(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Vertical   => self.n_cols(),
            Orientation::Horizontal => self.n_rows(),
        }
    }
}
