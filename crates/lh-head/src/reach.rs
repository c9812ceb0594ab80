//! Simultaneous reachability of a set of wells.
//!
//! Channel `i` of the request goes to `addresses[i]`; `None` leaves it idle.
//! The check, in order:
//!
//! | Step | Rule                                                              |
//! |------|-------------------------------------------------------------------|
//! | 1    | A rigid head trims idle channels at both ends; idle inside → fail |
//! | 2    | No more addressed slots than the adaptor has channels             |
//! | 3    | Every well exists; repeated wells use the plate's per-adaptor targets |
//! | 4    | Offset between successive used channels, per channel of gap       |
//! | 5    | That offset lies within the adaptor's spacing limits ± tolerance  |

use lh_core::{Addressable, Coordinates2D, WellCoords};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Head, HeadError, HeadResult};

/// Positional slack, in millimetres, allowed on every channel offset.
pub const REACH_TOLERANCE: f64 = 0.1;

impl Head {
    /// `true` if the loaded adaptor can address every requested well at once.
    ///
    /// A head with no adaptor reaches nothing.
    pub fn can_reach<A: Addressable + ?Sized>(&self, plate: &A, addresses: &[Option<WellCoords>]) -> bool {
        match self.check_reach(plate, addresses) {
            Ok(()) => true,
            Err(e) => {
                trace!(head = %self.name, reason = %e, "unreachable");
                false
            }
        }
    }

    /// As [`can_reach`](Self::can_reach), reporting the first violated rule.
    pub fn check_reach<A: Addressable + ?Sized>(
        &self,
        plate:     &A,
        addresses: &[Option<WellCoords>],
    ) -> HeadResult<()> {
        let adaptor = self.require_adaptor()?;

        let request = if self.params.independent {
            addresses
        } else {
            contiguous_run(addresses)?
        };

        if request.iter().all(Option::is_none) {
            return Ok(());
        }
        let channels = adaptor.channel_count();
        if request.len() > channels {
            return Err(HeadError::TooManyChannels { requested: request.len(), available: channels });
        }

        let targets = plate.well_targets(&adaptor.name);
        let mut uses: FxHashMap<WellCoords, usize> = FxHashMap::default();
        let mut used: Vec<(usize, Coordinates2D)> = Vec::with_capacity(request.len());

        for (channel, wc) in request.iter().enumerate() {
            let Some(wc) = *wc else { continue };
            let center = plate.well_center(wc).ok_or(HeadError::NoSuchWell(wc))?.to_2d();

            let n = uses.entry(wc).or_insert(0);
            let position = if targets.is_empty() {
                if *n > 0 {
                    return Err(HeadError::WellFull { well: wc, capacity: 1 });
                }
                center
            } else {
                let offset = targets
                    .get(*n)
                    .ok_or(HeadError::WellFull { well: wc, capacity: targets.len() })?;
                center + *offset
            };
            *n += 1;
            used.push((channel, position));
        }

        let min = adaptor.smallest_channel_spacing();
        let max = adaptor.largest_channel_spacing();
        for pair in used.windows(2) {
            let (from, a) = pair[0];
            let (to, b) = pair[1];
            let offset = (b - a) / (to - from) as f64;
            if !offset.within(min, max, REACH_TOLERANCE) {
                return Err(HeadError::OffsetOutOfRange { from, to, offset, min, max });
            }
        }
        Ok(())
    }
}

/// Strip idle channels from both ends; reject an idle channel in between.
fn contiguous_run(addresses: &[Option<WellCoords>]) -> HeadResult<&[Option<WellCoords>]> {
    let Some(first) = addresses.iter().position(Option::is_some) else {
        return Ok(&[]);
    };
    // `first` exists, so `last` does too.
    let last = addresses.iter().rposition(Option::is_some).unwrap_or(first);
    let run = &addresses[first..=last];
    match run.iter().position(Option::is_none) {
        Some(gap) => Err(HeadError::NonContiguous { channel: first + gap }),
        None => Ok(run),
    }
}
