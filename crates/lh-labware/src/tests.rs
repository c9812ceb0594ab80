//! Unit tests for lh-labware.

#[cfg(test)]
mod helpers {
    use lh_core::{Coordinates2D, Coordinates3D, TipboxId};
    use crate::Tipbox;

    /// A 4 × 3 rack at 9 mm pitch with its A1 tip at the deck origin.
    pub fn small_box() -> Tipbox {
        Tipbox::new(
            TipboxId(1), "small", "Gilson20", 4, 3,
            Coordinates3D::ZERO,
            Coordinates2D::new(9.0, 9.0),
        )
    }
}

// ── Tip / Slot ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod slot {
    use lh_core::TipId;
    use crate::{Slot, Tip};

    #[test]
    fn take_empties_the_slot() {
        let mut s = Slot::Occupied(Tip::new(TipId(3), "Gilson200"));
        assert!(s.has_clean_tip());
        let t = s.take().unwrap();
        assert_eq!(t.id, TipId(3));
        assert_eq!(s, Slot::Empty);
        assert!(s.take().is_none());
    }

    #[test]
    fn dirty_tip_is_present_but_not_clean() {
        let mut t = Tip::new(TipId(0), "Gilson200");
        t.dirty = true;
        let s = Slot::Occupied(t);
        assert!(s.is_occupied());
        assert!(!s.has_clean_tip());
    }
}

// ── Tipbox ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tipbox {
    use lh_core::{Addressable, Coordinates3D, WellCoords};
    use crate::LabwareError;

    #[test]
    fn new_box_is_full_and_unique() {
        let tb = super::helpers::small_box();
        assert_eq!(tb.n_tips(), 12);
        assert_eq!(tb.n_clean_tips(), 12);
        let mut ids: Vec<_> = (0..4)
            .flat_map(|x| (0..3).map(move |y| WellCoords::new(x, y)))
            .map(|wc| tb.tip_at(wc).unwrap().id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn remove_and_put_back() {
        let mut tb = super::helpers::small_box();
        let wc = WellCoords::new(2, 1);
        let mut tip = tb.remove_tip(wc).unwrap();
        assert!(!tb.has_tip(wc));
        assert_eq!(tb.remove_tip(wc), Err(LabwareError::NoTip(wc)));

        tip.dirty = true;
        tb.put_tip(wc, tip.clone()).unwrap();
        assert!(tb.has_tip(wc));
        assert!(!tb.has_clean_tip(wc));
        assert_eq!(tb.n_clean_tips(), 11);
        assert_eq!(tb.put_tip(wc, tip), Err(LabwareError::SlotOccupied(wc)));
    }

    #[test]
    fn out_of_bounds() {
        let mut tb = super::helpers::small_box();
        let wc = WellCoords::new(4, 0);
        assert!(tb.slot(wc).is_none());
        assert_eq!(tb.remove_tip(wc), Err(LabwareError::OutOfBounds(wc)));
        assert!(tb.well_center(wc).is_none());
    }

    #[test]
    fn refill_mints_fresh_clean_tips() {
        let mut tb = super::helpers::small_box();
        let old = tb.tip_at(WellCoords::new(0, 0)).unwrap().id;
        tb.mark_dirty(WellCoords::new(0, 0)).unwrap();
        tb.remove_tip(WellCoords::new(1, 1)).unwrap();
        assert_eq!(tb.n_clean_tips(), 10);

        tb.refill();
        assert_eq!(tb.n_clean_tips(), 12);
        assert_ne!(tb.tip_at(WellCoords::new(0, 0)).unwrap().id, old);
        assert_eq!(tb.n_cols(), 4);
        assert_eq!(tb.n_rows(), 3);
    }

    #[test]
    fn take_planned_is_all_or_nothing() {
        let mut tb = super::helpers::small_box();
        tb.remove_tip(WellCoords::new(3, 2)).unwrap();

        let bad = vec![
            vec![WellCoords::new(0, 0), WellCoords::new(0, 1)],
            vec![WellCoords::new(3, 2)],
        ];
        assert_eq!(tb.take_planned(&bad), Err(LabwareError::NoTip(WellCoords::new(3, 2))));
        assert_eq!(tb.n_tips(), 11);

        let dup = vec![vec![WellCoords::new(0, 0)], vec![WellCoords::new(0, 0)]];
        assert!(tb.take_planned(&dup).is_err());
        assert_eq!(tb.n_tips(), 11);

        let good = vec![vec![WellCoords::new(0, 0), WellCoords::new(0, 1)]];
        assert_eq!(tb.take_planned(&good).unwrap().len(), 2);
        assert_eq!(tb.n_tips(), 9);
    }

    #[test]
    fn tip_centers_follow_pitch() {
        let tb = super::helpers::small_box();
        assert_eq!(
            tb.well_center(WellCoords::new(3, 2)),
            Some(Coordinates3D::new(27.0, 18.0, 0.0))
        );
    }

    #[test]
    fn clear_removes_everything() {
        let mut tb = super::helpers::small_box();
        tb.clear();
        assert_eq!(tb.n_tips(), 0);
    }
}

// ── Plate ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plate {
    use lh_core::{Addressable, Coordinates2D, PlateId, WellCoords};
    use crate::{LabwareError, Plate, PlateBuilder};

    #[test]
    fn sbs_dimensions() {
        let p96 = Plate::sbs_96(PlateId(0), "p96");
        assert_eq!((p96.n_cols(), p96.n_rows()), (12, 8));
        let p384 = Plate::sbs_384(PlateId(1), "p384");
        assert_eq!((p384.n_cols(), p384.n_rows()), (24, 16));
        assert!(p384.add_is_valid("P24".parse().unwrap()));
        assert!(!p96.add_is_valid("I1".parse().unwrap()));
    }

    #[test]
    fn well_center_spacing() {
        let p = Plate::sbs_96(PlateId(0), "p96");
        let a1 = p.well_center(WellCoords::new(0, 0)).unwrap();
        let b1 = p.well_center(WellCoords::new(0, 1)).unwrap();
        let d = (b1 - a1).to_2d();
        assert!((d.y - 9.0).abs() < 1e-9);
        assert!(d.x.abs() < 1e-9);
    }

    #[test]
    fn targets_are_per_adaptor() {
        let mut p = Plate::sbs_96(PlateId(0), "p96");
        assert!(p.well_targets("any").is_empty());
        p.set_targets("Head8", vec![Coordinates2D::new(0.0, -4.5), Coordinates2D::new(0.0, 4.5)]);
        assert_eq!(p.well_targets("Head8").len(), 2);
        assert!(p.well_targets("Head1").is_empty());
    }

    #[test]
    fn builder_validates() {
        let err = PlateBuilder::new(PlateId(0), "bad", 0, 8).build().unwrap_err();
        assert!(matches!(err, LabwareError::Config(_)));

        let p = PlateBuilder::new(PlateId(0), "res", 1, 1).build().unwrap();
        assert_eq!(p.n_cols(), 1);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_roundtrip {
    use lh_core::{Addressable, WellCoords};

    #[test]
    fn depleted_tipbox_keeps_its_shape() {
        let mut tb = super::helpers::small_box();
        tb.remove_tip(WellCoords::new(1, 2)).unwrap();
        let json = serde_json::to_string(&tb).unwrap();
        let back: crate::Tipbox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tb);
        assert_eq!((back.n_cols(), back.n_rows()), (4, 3));
    }
}
