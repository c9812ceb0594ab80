//! `lh-core` — foundational types for the `rust_lh` liquid-handling framework.
//!
//! This crate is a dependency of every other `lh-*` crate.  It has no `lh-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`ids`]         | `TipId`, `PlateId`, `TipboxId`                          |
//! | [`geo`]         | `Coordinates2D`, `Coordinates3D`                        |
//! | [`wellcoords`]  | `WellCoords`, A1-style parsing, `Addressable` trait     |
//! | [`iter`]        | `AddressIterator`, `MajorOrder`, loading directions     |
//! | [`orientation`] | `Orientation` (vertical / horizontal channel layout)    |
//! | [`error`]       | `CoreError`, `ErrorKind`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod iter;
pub mod orientation;
pub mod wellcoords;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult, ErrorKind};
pub use geo::{Coordinates2D, Coordinates3D};
pub use ids::{PlateId, TipId, TipboxId};
pub use iter::{AddressIterator, HorizontalDirection, MajorOrder, VerticalDirection};
pub use orientation::Orientation;
pub use wellcoords::{Addressable, WellCoords};
