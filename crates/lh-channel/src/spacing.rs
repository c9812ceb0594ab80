//! Per-axis channel spacing models.
//!
//! # Model
//!
//! Every adaptor has one [`ChannelSpacing`] per deck axis.  Positions are
//! given in millimetres in the adaptor's own frame, one value per channel:
//!
//! ```text
//! Fixed       pos[i] = i * pitch                       (nothing moves)
//! Extendable  0 <= pos[i] <= max, each channel alone   (0 or max only unless partial)
//! Relative    min <= pos[i+1] - pos[i] <= max          (each gap on its own)
//! Accordion   as Relative, and every gap equal
//! ```
//!
//! Travel time is the slowest channel's distance over the axis speed; axes
//! are treated as independent and motion as linear.
//!
//! # Free targets
//!
//! A caller asks for a new arrangement with one [`Target`] per channel.
//! `Target::Free` means "don't care"; the model picks a value and, on
//! success, writes it back so downstream command generation sees concrete
//! positions for every channel.

use std::time::Duration;

use lh_core::{Coordinates2D, Orientation};
use tracing::debug;

use crate::{ChannelError, ChannelResult};

/// Slack allowed when matching a requested position against a fixed pitch
/// or when checking that accordion gaps are equal.
pub const POSITION_EPSILON: f64 = 1e-5;

// ── Target ────────────────────────────────────────────────────────────────────

/// Requested final position of one channel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Constrained(f64),
    Free,
}

impl Target {
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Target::Constrained(v) => Some(v),
            Target::Free => None,
        }
    }

    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Target::Free)
    }
}

impl From<Option<f64>> for Target {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Target::Free, Target::Constrained)
    }
}

// ── ChannelSpacing ────────────────────────────────────────────────────────────

/// Mechanical constraint on channel positions along one axis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelSpacing {
    /// Channels are separated by one immutable pitch.
    Fixed { pitch: f64 },

    /// Each channel slides on its own between 0 and `maximum_extension`.
    /// Without `partial_extension` only the two extremes are allowed.
    Extendable {
        maximum_extension: f64,
        partial_extension: bool,
        /// mm/s
        extension_speed:   f64,
    },

    /// Every gap between adjacent channels varies independently within
    /// `[min_spacing, max_spacing]`.
    Relative {
        min_spacing: f64,
        max_spacing: f64,
        /// mm/s
        speed:       f64,
    },

    /// Like `Relative`, but all gaps are always equal (a scissor mechanism).
    Accordion {
        min_spacing: f64,
        max_spacing: f64,
        /// mm/s
        speed:       f64,
    },
}

impl ChannelSpacing {
    /// Smallest achievable offset between adjacent channels.
    pub fn min_gap(&self) -> f64 {
        match *self {
            ChannelSpacing::Fixed { pitch } => pitch,
            ChannelSpacing::Extendable { maximum_extension, .. } => -maximum_extension,
            ChannelSpacing::Relative { min_spacing, .. }
            | ChannelSpacing::Accordion { min_spacing, .. } => min_spacing,
        }
    }

    /// Largest achievable offset between adjacent channels.
    pub fn max_gap(&self) -> f64 {
        match *self {
            ChannelSpacing::Fixed { pitch } => pitch,
            ChannelSpacing::Extendable { maximum_extension, .. } => maximum_extension,
            ChannelSpacing::Relative { max_spacing, .. }
            | ChannelSpacing::Accordion { max_spacing, .. } => max_spacing,
        }
    }

    /// How long it takes to move from `initial` to `targets`.
    ///
    /// On success every `Target::Free` in `targets` is replaced by the
    /// position chosen for that channel.  On error `targets` is untouched.
    ///
    /// # Errors
    ///
    /// - [`ChannelError::LengthMismatch`] if the slices differ in length.
    /// - [`ChannelError::CannotReachPosition`] / [`ChannelError::CannotMove`] /
    ///   [`ChannelError::UnevenSpacing`] if the arrangement is not physically
    ///   possible.
    pub fn time_to_move_between(
        &self,
        initial: &[f64],
        targets: &mut [Target],
    ) -> ChannelResult<Duration> {
        let (resolved, time) = self.resolve(initial, targets)?;
        for (t, v) in targets.iter_mut().zip(resolved) {
            *t = Target::Constrained(v);
        }
        Ok(time)
    }

    /// Pure form of [`time_to_move_between`](Self::time_to_move_between):
    /// returns the resolved positions instead of writing them back.
    pub fn resolve(
        &self,
        initial: &[f64],
        targets: &[Target],
    ) -> ChannelResult<(Vec<f64>, Duration)> {
        if initial.len() != targets.len() {
            return Err(ChannelError::LengthMismatch {
                expected: initial.len(),
                got:      targets.len(),
                what:     "final positions",
            });
        }

        let out = match *self {
            ChannelSpacing::Fixed { pitch } => resolve_fixed(pitch, targets)?,
            ChannelSpacing::Extendable { maximum_extension, partial_extension, extension_speed } => {
                resolve_extendable(maximum_extension, partial_extension, extension_speed, initial, targets)?
            }
            ChannelSpacing::Relative { min_spacing, max_spacing, speed } => {
                resolve_relative(min_spacing, max_spacing, speed, initial, targets)?
            }
            ChannelSpacing::Accordion { min_spacing, max_spacing, speed } => {
                resolve_accordion(min_spacing, max_spacing, speed, initial, targets)?
            }
        };

        debug!(spacing = ?self, channels = initial.len(), secs = out.1.as_secs_f64(), "resolved channel positions");
        Ok(out)
    }
}

fn resolve_fixed(pitch: f64, targets: &[Target]) -> ChannelResult<(Vec<f64>, Duration)> {
    let resolved: Vec<f64> = (0..targets.len()).map(|i| i as f64 * pitch).collect();
    for (channel, (t, &slot)) in targets.iter().zip(&resolved).enumerate() {
        match t.value() {
            Some(v) if !v.is_finite() || (v - slot).abs() > POSITION_EPSILON => {
                return Err(ChannelError::CannotReachPosition { channel, position: v });
            }
            _ => {}
        }
    }
    Ok((resolved, Duration::ZERO))
}

fn resolve_extendable(
    maximum:  f64,
    partial:  bool,
    speed:    f64,
    initial:  &[f64],
    targets:  &[Target],
) -> ChannelResult<(Vec<f64>, Duration)> {
    let resolved: Vec<f64> = targets
        .iter()
        .zip(initial)
        .map(|(t, &init)| t.value().unwrap_or(init))
        .collect();

    for (channel, &v) in resolved.iter().enumerate() {
        let in_range = (0.0..=maximum).contains(&v);
        let at_stop = v == 0.0 || v == maximum;
        if !in_range || (!partial && !at_stop) {
            return Err(ChannelError::CannotReachPosition { channel, position: v });
        }
    }

    let time = travel_time(initial, &resolved, speed)?;
    Ok((resolved, time))
}

fn resolve_relative(
    min:     f64,
    max:     f64,
    speed:   f64,
    initial: &[f64],
    targets: &[Target],
) -> ChannelResult<(Vec<f64>, Duration)> {
    let n = targets.len();
    if n < 2 {
        let resolved = targets
            .iter()
            .zip(initial)
            .map(|(t, &init)| t.value().unwrap_or(init))
            .collect();
        return Ok((resolved, Duration::ZERO));
    }

    let specified: Vec<usize> = (0..n).filter(|&i| !targets[i].is_free()).collect();
    let resolved = match (specified.first(), specified.last()) {
        (Some(&first), Some(&last)) => {
            let mut out: Vec<f64> = targets.iter().map(|t| t.value().unwrap_or(0.0)).collect();

            // Outside the specified span, step away at the minimum spacing:
            // the arrangement least likely to hit anything.
            for k in 0..first {
                out[k] = out[first] - (first - k) as f64 * min;
            }
            for k in last + 1..n {
                out[k] = out[last] + (k - last) as f64 * min;
            }
            for pair in specified.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let step = (out[b] - out[a]) / (b - a) as f64;
                for k in a + 1..b {
                    out[k] = out[a] + (k - a) as f64 * step;
                }
            }
            out
        }
        _ => initial.to_vec(),
    };

    check_gaps(&resolved, min, max)?;
    let time = travel_time(initial, &resolved, speed)?;
    Ok((resolved, time))
}

fn resolve_accordion(
    min:     f64,
    max:     f64,
    speed:   f64,
    initial: &[f64],
    targets: &[Target],
) -> ChannelResult<(Vec<f64>, Duration)> {
    let n = targets.len();
    if n < 2 {
        return resolve_relative(min, max, speed, initial, targets);
    }

    let specified: Vec<(usize, f64)> = targets
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.value().map(|v| (i, v)))
        .collect();

    let resolved = match specified.as_slice() {
        [] => initial.to_vec(),
        [(anchor, v)] => {
            // One fixed point: keep the current gap if it is legal.
            let current = initial[1] - initial[0];
            let gap = if (min..=max).contains(&current) { current } else { min };
            (0..n).map(|k| v + (k as f64 - *anchor as f64) * gap).collect()
        }
        [(a, va), .., (b, vb)] => {
            let gap = (vb - va) / (b - a) as f64;
            for pair in specified.windows(2) {
                let ((i, vi), (k, vk)) = (pair[0], pair[1]);
                let local = (vk - vi) / (k - i) as f64;
                if (local - gap).abs() > POSITION_EPSILON {
                    return Err(ChannelError::UnevenSpacing { channel: k, gap: local, expected: gap });
                }
            }
            (0..n).map(|k| va + (k as f64 - *a as f64) * gap).collect()
        }
    };

    let first_gap = resolved[1] - resolved[0];
    for channel in 2..n {
        let gap = resolved[channel] - resolved[channel - 1];
        if (gap - first_gap).abs() > POSITION_EPSILON {
            return Err(ChannelError::UnevenSpacing { channel, gap, expected: first_gap });
        }
    }
    check_gaps(&resolved, min, max)?;
    let time = travel_time(initial, &resolved, speed)?;
    Ok((resolved, time))
}

/// Every adjacent gap of `pos` must lie in `[min, max]`.
fn check_gaps(pos: &[f64], min: f64, max: f64) -> ChannelResult<()> {
    for channel in 1..pos.len() {
        let gap = pos[channel] - pos[channel - 1];
        if !(min..=max).contains(&gap) {
            return Err(ChannelError::CannotMove { channel, gap, min, max });
        }
    }
    Ok(())
}

/// Slowest channel's travel distance over `speed`.
fn travel_time(initial: &[f64], resolved: &[f64], speed: f64) -> ChannelResult<Duration> {
    let furthest = initial
        .iter()
        .zip(resolved)
        .map(|(a, b)| (b - a).abs())
        .fold(0.0f64, f64::max);
    if furthest == 0.0 {
        return Ok(Duration::ZERO);
    }
    if speed.is_nan() || speed <= 0.0 {
        return Err(ChannelError::Config(format!("axis speed must be positive, got {speed}")));
    }
    Duration::try_from_secs_f64(furthest / speed)
        .map_err(|e| ChannelError::Config(format!("travel time out of range: {e}")))
}

// ── AxisSpacing ───────────────────────────────────────────────────────────────

/// The spacing models of an adaptor's two horizontal axes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSpacing {
    pub x: ChannelSpacing,
    pub y: ChannelSpacing,
}

impl AxisSpacing {
    /// A rigid head: channels `pitch` apart along the orientation's axis and
    /// perfectly aligned on the other.
    pub fn rigid(orientation: Orientation, pitch: f64) -> Self {
        let along = ChannelSpacing::Fixed { pitch };
        let across = ChannelSpacing::Fixed { pitch: 0.0 };
        match orientation {
            Orientation::Vertical   => Self { x: across, y: along },
            Orientation::Horizontal => Self { x: along, y: across },
        }
    }

    /// The model along which channels of `orientation` are laid out.
    pub fn along(&self, orientation: Orientation) -> &ChannelSpacing {
        match orientation {
            Orientation::Vertical   => &self.y,
            Orientation::Horizontal => &self.x,
        }
    }

    /// Smallest offset between adjacent channels, per axis.
    pub fn smallest(&self) -> Coordinates2D {
        Coordinates2D::new(self.x.min_gap(), self.y.min_gap())
    }

    /// Largest offset between adjacent channels, per axis.
    pub fn largest(&self) -> Coordinates2D {
        Coordinates2D::new(self.x.max_gap(), self.y.max_gap())
    }

    /// Time for both axes to reach their targets, moving concurrently.
    ///
    /// Free targets on both axes are written back only if both axes succeed.
    pub fn time_to_move_between(
        &self,
        initial: &[Coordinates2D],
        x:       &mut [Target],
        y:       &mut [Target],
    ) -> ChannelResult<Duration> {
        let ix: Vec<f64> = initial.iter().map(|c| c.x).collect();
        let iy: Vec<f64> = initial.iter().map(|c| c.y).collect();
        let (rx, tx) = self.x.resolve(&ix, x)?;
        let (ry, ty) = self.y.resolve(&iy, y)?;

        for (t, v) in x.iter_mut().zip(rx) {
            *t = Target::Constrained(v);
        }
        for (t, v) in y.iter_mut().zip(ry) {
            *t = Target::Constrained(v);
        }
        Ok(tx.max(ty))
    }
}
