//! Channel orientation shared by heads, adaptors, and tip searches.

/// The axis along which a multi-channel head's channels are laid out.
///
/// A vertical head spans a plate column (channel `i` addresses row `i`); a
/// horizontal head spans a plate row (channel `i` addresses column `i`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The perpendicular orientation.
    #[inline]
    pub fn flip(self) -> Orientation {
        match self {
            Orientation::Vertical   => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Vertical   => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
