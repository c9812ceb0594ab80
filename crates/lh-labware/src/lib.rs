//! `lh-labware` — consumables placed on the deck.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`tip`]    | `Tip`, `Slot`                                              |
//! | [`tipbox`] | `Tipbox` — a grid of optional tips, mutated as tips go     |
//! | [`plate`]  | `Plate`, `PlateBuilder` — well geometry and access targets |
//! | [`error`]  | `LabwareError`, `LabwareResult<T>`                         |
//!
//! Liquid contents, volumes, and component lineage are not modelled here;
//! plates only expose the geometry that reachability checks need.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod plate;
pub mod tip;
pub mod tipbox;

#[cfg(test)]
mod tests;

pub use error::{LabwareError, LabwareResult};
pub use plate::{Plate, PlateBuilder};
pub use tip::{Slot, Tip};
pub use tipbox::Tipbox;
