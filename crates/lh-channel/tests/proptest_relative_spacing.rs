//! Property-based invariant tests for relative channel spacing.
//!
//! 1. Every successful resolution keeps each adjacent gap in `[min, max]`
//! 2. Targets built from a legal arrangement always resolve
//! 3. Constrained targets are never moved by resolution
//! 4. Failure leaves the target slice untouched

use lh_channel::{ChannelSpacing, Target};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// `(min, max, gaps, keep)`: whole-millimetre limits, a legal arrangement's
/// gaps, and which channels the request pins down.
fn legal_request() -> impl Strategy<Value = (f64, f64, Vec<f64>, Vec<bool>)> {
    (1u32..10, 0u32..20, 2usize..12).prop_flat_map(|(min, extra, n)| {
        let max = min + extra;
        (
            Just(min as f64),
            Just(max as f64),
            prop::collection::vec((min..=max).prop_map(f64::from), n - 1),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn positions(start: f64, gaps: &[f64]) -> Vec<f64> {
    let mut out = vec![start];
    for g in gaps {
        let last = *out.last().unwrap();
        out.push(last + g);
    }
    out
}

proptest! {
    #[test]
    fn legal_requests_resolve_within_limits(
        (min, max, gaps, keep) in legal_request(),
        start in -50i32..50,
    ) {
        let spacing = ChannelSpacing::Relative { min_spacing: min, max_spacing: max, speed: 10.0 };
        let want = positions(start as f64, &gaps);
        let initial = positions(0.0, &vec![min; gaps.len()]);
        let mut targets: Vec<Target> = want
            .iter()
            .zip(&keep)
            .map(|(&v, &k)| if k { Target::Constrained(v) } else { Target::Free })
            .collect();
        let before = targets.clone();

        prop_assert!(spacing.time_to_move_between(&initial, &mut targets).is_ok());

        let got: Vec<f64> = targets.iter().map(|t| t.value().unwrap()).collect();
        for w in got.windows(2) {
            let gap = w[1] - w[0];
            prop_assert!(gap >= min && gap <= max, "gap {gap} outside [{min}, {max}]");
        }
        for (b, g) in before.iter().zip(&got) {
            if let Target::Constrained(v) = b {
                prop_assert_eq!(v, g);
            }
        }
    }

    #[test]
    fn arbitrary_requests_respect_limits_or_fail_cleanly(
        raw in prop::collection::vec(prop::option::of(-100.0f64..100.0), 2..10),
        min in 1.0f64..9.0,
        extra in 0.0f64..20.0,
    ) {
        let max = min + extra;
        let spacing = ChannelSpacing::Relative { min_spacing: min, max_spacing: max, speed: 25.0 };
        let initial = positions(0.0, &vec![min; raw.len() - 1]);
        let mut targets: Vec<Target> = raw.iter().copied().map(Target::from).collect();
        let before = targets.clone();

        match spacing.time_to_move_between(&initial, &mut targets) {
            Ok(_) => {
                let got: Vec<f64> = targets.iter().map(|t| t.value().unwrap()).collect();
                for w in got.windows(2) {
                    let gap = w[1] - w[0];
                    prop_assert!(gap >= min && gap <= max);
                }
            }
            Err(_) => prop_assert_eq!(targets, before),
        }
    }
}
