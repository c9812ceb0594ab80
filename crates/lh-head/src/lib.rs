//! `lh-head` — multi-channel pipetting heads and what they can reach.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`adaptor`] | `Adaptor` — channels, per-axis spacing limits, loaded tips    |
//! | [`head`]    | `Head` — adaptor slot, tip-loading behaviour, tip pickup plans |
//! | [`reach`]   | `Head::can_reach` / `Head::check_reach`, `REACH_TOLERANCE`    |
//! | [`error`]   | `HeadError`, `HeadResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod adaptor;
pub mod error;
pub mod head;
pub mod reach;


pub use adaptor::Adaptor;
pub use error::{HeadError, HeadResult};
pub use head::Head;
pub use reach::REACH_TOLERANCE;
