//! `lh-tips` — finding and taking clean tips.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`inventory`] | `TipInventory` (masked search and removal on a `Tipbox`), `TipAllocation` |
//! | [`loading`]   | `TipLoadingBehaviour`, `SequentialTipLoading` — pickup planning |
//! | [`error`]     | `TipError`, `TipResult<T>`                                   |
//!
//! # Concurrency
//!
//! Everything here is synchronous and mutates the `Tipbox` it is handed.
//! Successful allocations are not idempotent: asking twice for the same mask
//! takes two disjoint sets of tips.  Planners that share a rack must
//! serialize access themselves, or work on a clone and commit the result.

pub mod error;
pub mod inventory;
pub mod loading;


pub use error::{TipError, TipResult};
pub use inventory::{TipAllocation, TipInventory};
pub use loading::{SequentialTipLoading, TipLoadingBehaviour};
