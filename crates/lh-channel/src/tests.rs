//! Unit tests for lh-channel.

#[cfg(test)]
mod helpers {
    use std::time::Duration;

    use crate::Target;

    pub fn c(v: f64) -> Target {
        Target::Constrained(v)
    }

    pub const F: Target = Target::Free;

    pub fn values(ts: &[Target]) -> Vec<f64> {
        ts.iter().map(|t| t.value().expect("all targets resolved")).collect()
    }

    pub fn secs_close(d: Duration, secs: f64) -> bool {
        (d.as_secs_f64() - secs).abs() < 1e-9
    }
}

// ── Fixed ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fixed {
    use std::time::Duration;

    use super::helpers::{c, values, F};
    use crate::{ChannelError, ChannelSpacing};

    const NINE: ChannelSpacing = ChannelSpacing::Fixed { pitch: 9.0 };

    #[test]
    fn free_slots_take_the_pitch() {
        let mut t = [c(0.0), F, c(18.0)];
        let d = NINE.time_to_move_between(&[0.0, 9.0, 18.0], &mut t).unwrap();
        assert_eq!(d, Duration::ZERO);
        assert_eq!(values(&t), [0.0, 9.0, 18.0]);
    }

    #[test]
    fn tiny_deviation_is_tolerated() {
        let mut t = [c(0.0), c(9.000_001)];
        assert!(NINE.time_to_move_between(&[0.0, 9.0], &mut t).is_ok());
    }

    #[test]
    fn off_pitch_request_fails() {
        let mut t = [c(0.0), c(10.0)];
        let err = NINE.time_to_move_between(&[0.0, 9.0], &mut t).unwrap_err();
        assert_eq!(err, ChannelError::CannotReachPosition { channel: 1, position: 10.0 });
        assert!(err.to_string().contains("cannot reach position"));
    }

    #[test]
    fn nan_request_fails_and_leaves_targets() {
        let mut t = [c(f64::NAN), F];
        let err = NINE.time_to_move_between(&[0.0, 9.0], &mut t).unwrap_err();
        assert!(matches!(err, ChannelError::CannotReachPosition { channel: 0, position } if position.is_nan()));
        assert!(t[0].value().is_some_and(f64::is_nan));
        assert!(t[1].is_free());
    }
}

// ── Extendable ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod extendable {
    use super::helpers::{c, secs_close, values, F};
    use crate::{ChannelError, ChannelSpacing};

    fn ext(partial: bool) -> ChannelSpacing {
        ChannelSpacing::Extendable {
            maximum_extension: 10.0,
            partial_extension: partial,
            extension_speed:   5.0,
        }
    }

    #[test]
    fn extremes_only() {
        let mut t = [c(10.0), F, c(0.0)];
        let d = ext(false).time_to_move_between(&[0.0, 0.0, 10.0], &mut t).unwrap();
        assert_eq!(values(&t), [10.0, 0.0, 0.0]);
        assert!(secs_close(d, 2.0));
    }

    #[test]
    fn partial_position_needs_partial_extension() {
        let mut t = [c(5.0)];
        let err = ext(false).time_to_move_between(&[0.0], &mut t).unwrap_err();
        assert_eq!(err, ChannelError::CannotReachPosition { channel: 0, position: 5.0 });
        assert_eq!(t, [c(5.0)]);

        let d = ext(true).time_to_move_between(&[0.0], &mut t).unwrap();
        assert!(secs_close(d, 1.0));
    }

    #[test]
    fn out_of_range_fails() {
        for bad in [-0.5, 10.5] {
            let mut t = [c(bad)];
            assert!(ext(true).time_to_move_between(&[0.0], &mut t).is_err());
        }
    }

    #[test]
    fn free_slot_keeps_an_invalid_current_position_invalid() {
        let mut t = [F];
        assert!(ext(false).time_to_move_between(&[4.0], &mut t).is_err());
        assert_eq!(t, [F]);
    }
}

// ── Relative ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod relative {
    use std::time::Duration;

    use super::helpers::{c, secs_close, values, F};
    use crate::{ChannelError, ChannelSpacing, Target};

    const REL: ChannelSpacing = ChannelSpacing::Relative {
        min_spacing: 9.0,
        max_spacing: 18.0,
        speed:       10.0,
    };

    #[test]
    fn interior_interpolates_and_edges_step_at_minimum() {
        let mut t = [F, c(10.0), F, c(40.0), F];
        let d = REL
            .time_to_move_between(&[0.0, 9.0, 18.0, 27.0, 36.0], &mut t)
            .unwrap();
        assert_eq!(values(&t), [1.0, 10.0, 25.0, 40.0, 49.0]);
        assert!(secs_close(d, 1.3));
    }

    #[test]
    fn evenly_interpolates_over_longer_gaps() {
        let mut t = [c(0.0), F, F, c(30.0)];
        REL.time_to_move_between(&[0.0, 9.0, 18.0, 27.0], &mut t).unwrap();
        assert_eq!(values(&t), [0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn nothing_specified_stays_put() {
        let mut t = [F, F, F];
        let d = REL.time_to_move_between(&[0.0, 9.0, 20.0], &mut t).unwrap();
        assert_eq!(d, Duration::ZERO);
        assert_eq!(values(&t), [0.0, 9.0, 20.0]);
    }

    #[test]
    fn gap_outside_range_fails() {
        let mut t = [c(0.0), c(5.0)];
        let err = REL.time_to_move_between(&[0.0, 9.0], &mut t).unwrap_err();
        assert!(matches!(err, ChannelError::CannotMove { channel: 1, .. }));
        assert!(err.to_string().contains("channel cannot move to the requested position"));

        let mut t = [c(0.0), F, c(40.0)];
        assert!(REL.time_to_move_between(&[0.0, 9.0, 18.0], &mut t).is_err());
        assert_eq!(t, [c(0.0), F, c(40.0)]);
    }

    #[test]
    fn single_channel_is_trivial() {
        let mut t = [F];
        assert_eq!(REL.time_to_move_between(&[3.0], &mut t).unwrap(), Duration::ZERO);
        assert_eq!(t, [Target::Constrained(3.0)]);
    }

    #[test]
    fn length_mismatch_is_a_configuration_error() {
        let mut t = [F, F];
        let err = REL.time_to_move_between(&[0.0, 9.0, 18.0], &mut t).unwrap_err();
        assert_eq!(err.kind(), lh_core::ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn zero_speed_with_motion_is_rejected() {
        let stuck = ChannelSpacing::Relative { min_spacing: 9.0, max_spacing: 18.0, speed: 0.0 };
        let mut t = [c(1.0), F];
        assert!(matches!(
            stuck.time_to_move_between(&[0.0, 9.0], &mut t),
            Err(ChannelError::Config(_))
        ));
    }
}

// ── Accordion ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod accordion {
    use super::helpers::{c, values, F};
    use crate::{ChannelError, ChannelSpacing};

    const ACC: ChannelSpacing = ChannelSpacing::Accordion {
        min_spacing: 9.0,
        max_spacing: 18.0,
        speed:       10.0,
    };

    #[test]
    fn two_anchors_fix_the_common_gap() {
        let mut t = [c(0.0), F, F, c(36.0)];
        ACC.time_to_move_between(&[0.0, 9.0, 18.0, 27.0], &mut t).unwrap();
        assert_eq!(values(&t), [0.0, 12.0, 24.0, 36.0]);
    }

    #[test]
    fn uneven_request_fails() {
        let mut t = [c(0.0), c(9.0), F, c(36.0)];
        let err = ACC.time_to_move_between(&[0.0, 9.0, 18.0, 27.0], &mut t).unwrap_err();
        assert!(matches!(err, ChannelError::UnevenSpacing { .. }));
        assert_eq!(err.kind(), lh_core::ErrorKind::InfeasibleGeometry);
    }

    #[test]
    fn one_anchor_keeps_current_gap() {
        let mut t = [F, c(50.0), F];
        ACC.time_to_move_between(&[0.0, 10.0, 20.0], &mut t).unwrap();
        assert_eq!(values(&t), [40.0, 50.0, 60.0]);
    }

    #[test]
    fn common_gap_must_be_in_range() {
        let mut t = [c(0.0), F, c(40.0)];
        assert!(matches!(
            ACC.time_to_move_between(&[0.0, 9.0, 18.0], &mut t),
            Err(ChannelError::CannotMove { .. })
        ));
    }
}

// ── AxisSpacing / ChannelParameter ────────────────────────────────────────────

#[cfg(test)]
mod axis {
    use lh_core::{Coordinates2D, Orientation};

    use super::helpers::{c, F};
    use crate::{AxisSpacing, ChannelParameter, ChannelSpacing};

    #[test]
    fn rigid_limits() {
        let v = AxisSpacing::rigid(Orientation::Vertical, 9.0);
        assert_eq!(v.smallest(), Coordinates2D::new(0.0, 9.0));
        assert_eq!(v.largest(), Coordinates2D::new(0.0, 9.0));
        assert_eq!(v.along(Orientation::Vertical), &ChannelSpacing::Fixed { pitch: 9.0 });

        let h = AxisSpacing::rigid(Orientation::Horizontal, 4.5);
        assert_eq!(h.smallest(), Coordinates2D::new(4.5, 0.0));
    }

    #[test]
    fn extendable_limits_are_symmetric() {
        let s = AxisSpacing {
            x: ChannelSpacing::Extendable {
                maximum_extension: 30.0,
                partial_extension: true,
                extension_speed:   20.0,
            },
            y: ChannelSpacing::Relative { min_spacing: 9.0, max_spacing: 20.0, speed: 20.0 },
        };
        assert_eq!(s.smallest(), Coordinates2D::new(-30.0, 9.0));
        assert_eq!(s.largest(), Coordinates2D::new(30.0, 20.0));
    }

    #[test]
    fn both_axes_or_neither() {
        let s = AxisSpacing {
            x: ChannelSpacing::Extendable {
                maximum_extension: 30.0,
                partial_extension: true,
                extension_speed:   10.0,
            },
            y: ChannelSpacing::Fixed { pitch: 9.0 },
        };
        let initial = [Coordinates2D::new(0.0, 0.0), Coordinates2D::new(0.0, 9.0)];

        let mut x = [c(20.0), F];
        let mut y = [F, c(12.0)];
        assert!(s.time_to_move_between(&initial, &mut x, &mut y).is_err());
        assert_eq!(x, [c(20.0), F]);

        let mut y = [F, F];
        let d = s.time_to_move_between(&initial, &mut x, &mut y).unwrap();
        assert_eq!(x, [c(20.0), c(0.0)]);
        assert_eq!(y, [c(0.0), c(9.0)]);
        assert!((d.as_secs_f64() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn parameter_validation() {
        let p = ChannelParameter::new("Head8", 8, Orientation::Vertical);
        assert!(!p.independent);
        assert!(p.validate().is_ok());
        assert!(ChannelParameter::new("none", 0, Orientation::Vertical).validate().is_err());
        assert!(ChannelParameter::new("one", 1, Orientation::Vertical).is_single_channel());
        assert!(p.with_independent(true).independent);
    }
}
