//! `lh-channel` — how the channels of a multi-channel head may be arranged.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`parameter`] | `ChannelParameter` — channel count, orientation, independence |
//! | [`spacing`]   | `ChannelSpacing`, `Target`, `AxisSpacing`                  |
//! | [`error`]     | `ChannelError`, `ChannelResult<T>`                         |
//!
//! Values here are built once from a device-capability description and are
//! never mutated while planning.  With the `serde` feature they can be loaded
//! straight from that description.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod parameter;
pub mod spacing;

#[cfg(test)]
mod tests;

pub use error::{ChannelError, ChannelResult};
pub use parameter::ChannelParameter;
pub use spacing::{AxisSpacing, ChannelSpacing, Target, POSITION_EPSILON};
