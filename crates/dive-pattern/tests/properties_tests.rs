use dive_pattern::*;
use proptest::prelude::*;

/// Any in-range parameter set, drawn in whole hundredths of a millimetre
fn parameter_set() -> impl Strategy<Value = ParameterSet> {
    (
        (10000i64..=49800, 10000i64..=49800),
        (5000i64..=10000, 9000i64..=20000, 500i64..=2000),
        proptest::option::of(3000i64..=20000),
        (3000i64..=5000, 2000i64..=3000, 2000i64..=4600, 5000i64..=8000),
        proptest::option::of(prop_oneof![Just(Page::One), Just(Page::Two)]),
    )
        .prop_map(|((pw, ph), (w, h, d), middle, (f, ld, sw, pd), page)| {
            let mm = |units: i64| units as f64 / 100.0;
            ParameterSet::builder()
                .page_width(mm(pw))
                .page_height(mm(ph))
                .dimensions(mm(h), mm(w), mm(d))
                .device_screen_middle(middle.map(mm))
                .lens_focal_length(mm(f))
                .lens_diameter(mm(ld))
                .strap_width(mm(sw))
                .pupillary_distance(mm(pd))
                .page(page)
                .build()
                .unwrap()
        })
}

proptest! {
    #[test]
    fn generation_is_deterministic(params in parameter_set()) {
        prop_assert_eq!(generate(&params), generate(&params));
    }

    #[test]
    fn screen_offsets_sum_to_height(params in parameter_set()) {
        let sum = params.screen_offset(Side::Right) + params.screen_offset(Side::Left);
        prop_assert_eq!(sum, params.device_height().hundredths() as f64);
    }

    #[test]
    fn centred_screen_gives_identical_sides(params in parameter_set()) {
        let params = params.with_value(Field::DeviceScreenMiddle, None).unwrap();
        let pattern = generate(&params);
        prop_assert!(!pattern.mirrored);
        prop_assert_eq!(pattern.left.points.sequence(), pattern.right.points.sequence());
        prop_assert_eq!(
            PatternPoints::construct(&params, Side::Left).sequence(),
            pattern.right.points.sequence()
        );
    }

    #[test]
    fn shroud_flap_is_mirrored(params in parameter_set()) {
        for side in Side::ALL {
            let points = PatternPoints::construct(&params, side);
            let seq = points.sequence();
            prop_assert_eq!(seq.len(), POINT_COUNT);
            prop_assert_eq!(seq[index::FLAP_TIP_MIRROR], seq[index::FLAP_TIP].mirrored());
            if !points.angles.is_degenerate() {
                prop_assert_eq!(
                    seq[index::FLAP_CREASE_MIRROR],
                    seq[index::FLAP_CREASE].mirrored()
                );
            }
            prop_assert!(points.angles.flap.abs() <= points.angles.cone);
        }
    }

    #[test]
    fn fold_never_passes_half_page(params in parameter_set()) {
        let pattern = generate(&params);
        let limit = (params.page_width().hundredths() as f64 / 2.0).round() as i64 + 50;
        for placement in pattern.layout.pages {
            prop_assert!(placement.translate.x <= limit);
        }
    }

    #[test]
    fn pages_share_the_fold(params in parameter_set()) {
        let layout = generate(&params).layout;
        prop_assert_eq!(layout.pages[0].translate.x, layout.pages[1].translate.x);
        prop_assert!(layout.pages.iter().any(|p| p.visible));
    }
}
