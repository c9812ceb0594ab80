//! Plate geometry.
//!
//! A plate is modelled only as far as channel addressing needs: a regular
//! grid of wells with a fixed pitch, plus optional per-adaptor "targets":
//! offsets from a well's center at which several channels may enter the same
//! (large) well simultaneously, e.g. a trough addressed by all eight channels
//! of a vertical head.

use std::collections::BTreeMap;

use lh_core::{Addressable, Coordinates2D, Coordinates3D, PlateId, WellCoords};

use crate::{LabwareError, LabwareResult};

/// A grid of wells at a fixed pitch.
///
/// Do not construct directly; use [`PlateBuilder`] or one of the SBS
/// constructors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plate {
    pub id:     PlateId,
    pub name:   String,
    /// Deck position of the center of well A1, at the well top.
    pub origin: Coordinates3D,
    /// Center-to-center distance between adjacent columns (`x`) and rows (`y`).
    pub pitch:  Coordinates2D,

    n_cols:  usize,
    n_rows:  usize,
    targets: BTreeMap<String, Vec<Coordinates2D>>,
}

impl Plate {
    /// Standard 96-well plate: 8 rows × 12 columns, 9 mm pitch.
    pub fn sbs_96(id: PlateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name:    name.into(),
            origin:  Coordinates3D::new(14.38, 11.24, 14.2),
            pitch:   Coordinates2D::new(9.0, 9.0),
            n_cols:  12,
            n_rows:  8,
            targets: BTreeMap::new(),
        }
    }

    /// Standard 384-well plate: 16 rows × 24 columns, 4.5 mm pitch.
    pub fn sbs_384(id: PlateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name:    name.into(),
            origin:  Coordinates3D::new(12.13, 8.99, 14.4),
            pitch:   Coordinates2D::new(4.5, 4.5),
            n_cols:  24,
            n_rows:  16,
            targets: BTreeMap::new(),
        }
    }

    /// Register the simultaneous-access targets for one adaptor type.
    pub fn set_targets(&mut self, adaptor: impl Into<String>, targets: Vec<Coordinates2D>) {
        self.targets.insert(adaptor.into(), targets);
    }
}

impl Addressable for Plate {
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

    fn well_targets(&self, adaptor: &str) -> &[Coordinates2D] {
        self.targets.get(adaptor).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ── PlateBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Plate`] from catalogue geometry, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use lh_core::{Addressable, Coordinates2D, PlateId};
/// use lh_labware::PlateBuilder;
///
/// let trough = PlateBuilder::new(PlateId(0), "trough", 12, 1)
///     .pitch(Coordinates2D::new(9.0, 0.0))
///     .targets("VerticalHead", (0..8).map(|i| Coordinates2D::new(0.0, -31.5 + 9.0 * i as f64)).collect())
///     .build()
///     .unwrap();
/// assert_eq!(trough.well_targets("VerticalHead").len(), 8);
/// ```
pub struct PlateBuilder {
    id:      PlateId,
    name:    String,
    n_cols:  usize,
    n_rows:  usize,
    origin:  Coordinates3D,
    pitch:   Coordinates2D,
    targets: BTreeMap<String, Vec<Coordinates2D>>,
}

impl PlateBuilder {
    pub fn new(id: PlateId, name: impl Into<String>, n_cols: usize, n_rows: usize) -> Self {
        Self {
            id,
            name: name.into(),
            n_cols,
            n_rows,
            origin:  Coordinates3D::ZERO,
            pitch:   Coordinates2D::new(9.0, 9.0),
            targets: BTreeMap::new(),
        }
    }

    /// Deck position of well A1's center.  Default: the deck origin.
    pub fn origin(mut self, origin: Coordinates3D) -> Self {
        self.origin = origin;
        self
    }

    /// Well pitch.  Default: 9 mm in both directions.
    pub fn pitch(mut self, pitch: Coordinates2D) -> Self {
        self.pitch = pitch;
        self
    }

    /// Simultaneous-access targets for the named adaptor.
    pub fn targets(mut self, adaptor: impl Into<String>, targets: Vec<Coordinates2D>) -> Self {
        self.targets.insert(adaptor.into(), targets);
        self
    }

    /// Validate and return the plate.
    pub fn build(self) -> LabwareResult<Plate> {
        if self.n_cols == 0 || self.n_rows == 0 {
            return Err(LabwareError::Config(format!(
                "plate {:?} must have at least one row and column, got {}×{}",
                self.name, self.n_cols, self.n_rows
            )));
        }
        if self.pitch.x < 0.0 || self.pitch.y < 0.0 {
            return Err(LabwareError::Config(format!(
                "plate {:?} has negative pitch {}",
                self.name, self.pitch
            )));
        }

        Ok(Plate {
            id:      self.id,
            name:    self.name,
            origin:  self.origin,
            pitch:   self.pitch,
            n_cols:  self.n_cols,
            n_rows:  self.n_rows,
            targets: self.targets,
        })
    }
}
