use dive_pattern::*;

fn params(width: f64, height: f64, depth: f64, focal: f64, middle: Option<f64>) -> ParameterSet {
    ParameterSet::builder()
        .device_width(width)
        .device_height(height)
        .device_depth(depth)
        .lens_focal_length(focal)
        .device_screen_middle(middle)
        .build()
        .unwrap()
}

fn coords(points: &PatternPoints) -> Vec<(i64, i64)> {
    points.sequence().iter().map(|p| (p.x, p.y)).collect()
}

const DEFAULT_SEQUENCE: [(i64, i64); POINT_COUNT] = [
    (0, 11874),
    (1300, 13074),
    (6730, 13074),
    (5800, 9000),
    (6596, 10169),
    (9699, 10757),
    (9885, 9775),
    (9885, 10775),
    (10885, 10775),
    (10885, 2225),
    (9885, 2225),
    (9885, 3225),
    (9699, 2243),
    (6596, 2831),
    (5800, 4000),
    (5600, 4000),
    (5600, 0),
    (5600, 4000),
    (5800, 4000),
    (6730, 7976),
    (7448, 7976),
    (7448, 8694),
    (6730, 8694),
    (7448, 8694),
    (11533, 9469),
    (11533, 14469),
    (7448, 15344),
    (1300, 15344),
    (0, 14144),
];

#[test]
fn test_default_sequence() {
    let params = ParameterSet::default();
    let right = PatternPoints::construct(&params, Side::Right);
    let left = PatternPoints::construct(&params, Side::Left);
    assert_eq!(coords(&right), DEFAULT_SEQUENCE);
    assert_eq!(coords(&left), DEFAULT_SEQUENCE);
}

#[test]
fn test_default_anchor_points() {
    let points = PatternPoints::construct(&ParameterSet::default(), Side::Right);
    assert_eq!(points.shroud_tab, Point::new(0, 11874));
    assert_eq!(points.shroud_corner, Point::new(1300, 13074));
    assert_eq!(points.lens_apex, Point::new(5800, 9000));
    assert_eq!(points.pocket_top, Point::new(5600, 0));
    assert!((points.angles.cone - 0.97288).abs() < 1e-4);
    assert!(!points.angles.is_degenerate());
}

#[test]
fn test_off_center_screen_sides() {
    let params = params(65.5, 132.6, 6.18, 40.0, Some(70.0));
    assert_eq!(params.screen_offset(Side::Right), 6260.0);
    assert_eq!(params.screen_offset(Side::Left), 7000.0);

    let right = coords(&PatternPoints::construct(&params, Side::Right));
    assert_eq!(
        right,
        [
            (0, 11874),
            (1300, 13074),
            (6360, 13074),
            (5800, 9000),
            (6593, 10171),
            (9637, 10757),
            (9826, 9775),
            (9826, 10775),
            (10826, 10775),
            (10826, 2225),
            (9826, 2225),
            (9826, 3225),
            (9637, 2243),
            (6593, 2829),
            (5800, 4000),
            (5600, 4000),
            (5600, 0),
            (5600, 4000),
            (5800, 4000),
            (6360, 7976),
            (7078, 7976),
            (7078, 8694),
            (6360, 8694),
            (7078, 8694),
            (11104, 9469),
            (11104, 14469),
            (7078, 15344),
            (1300, 15344),
            (0, 14144),
        ]
    );

    let left = coords(&PatternPoints::construct(&params, Side::Left));
    assert_eq!(
        left,
        [
            (0, 11874),
            (1300, 13074),
            (7100, 13074),
            (5800, 9000),
            (6601, 10166),
            (9794, 10758),
            (9976, 9775),
            (9976, 10775),
            (10976, 10775),
            (10976, 2225),
            (9976, 2225),
            (9976, 3225),
            (9794, 2242),
            (6601, 2834),
            (5800, 4000),
            (5600, 4000),
            (5600, 0),
            (5600, 4000),
            (5800, 4000),
            (7100, 7976),
            (7818, 7976),
            (7818, 8694),
            (7100, 8694),
            (7818, 8694),
            (11994, 9469),
            (11994, 14469),
            (7818, 15344),
            (1300, 15344),
            (0, 14144),
        ]
    );
}

#[test]
fn test_large_device() {
    let params = params(100.0, 200.0, 20.0, 30.0, None);
    let points = PatternPoints::construct(&params, Side::Right);
    assert_eq!(
        coords(&points),
        [
            (0, 11705),
            (1300, 12905),
            (10100, 12905),
            (5800, 9000),
            (6847, 9951),
            (10525, 12400),
            (10961, 11500),
            (10961, 12500),
            (11961, 12500),
            (11961, 500),
            (10961, 500),
            (10961, 1500),
            (10525, 600),
            (6847, 3049),
            (5800, 4000),
            (5600, 4000),
            (5600, 0),
            (5600, 4000),
            (5800, 4000),
            (10100, 7829),
            (12200, 7829),
            (12200, 9929),
            (10100, 9929),
            (12200, 9929),
            (17361, 12429),
            (17361, 17429),
            (12200, 20029),
            (1300, 20029),
            (0, 18829),
        ]
    );
}

#[test]
fn test_screen_edge_behind_apex_caps_flap() {
    // Right offset 130 - 90 = 40 mm puts the screen edge left of the lens apex.
    let params = params(80.0, 130.0, 8.0, 40.0, Some(90.0));
    let right = PatternPoints::construct(&params, Side::Right);
    assert_eq!(right.screen_edge, Point::new(4100, 13272));
    assert_eq!(right.angles.flap, right.angles.cone);
    assert_eq!(right.flap_crease, Point::new(6423, 10270));
    assert_eq!(right.flap_tip, Point::new(9862, 11446));
    assert_eq!(right.pocket_corner, Point::new(4100, 8179));
    assert_eq!(right.rear_corner, Point::new(9386, 10579));
    assert_eq!(right.rear_base, Point::new(5000, 17179));

    let left = PatternPoints::construct(&params, Side::Left);
    assert_eq!(left.screen_edge, Point::new(9100, 13272));
    assert_eq!(left.flap_crease, Point::new(6664, 10119));
    assert_eq!(left.flap_tip, Point::new(10641, 11460));
    assert_eq!(left.rear_corner, Point::new(15122, 10579));
}

#[test]
fn test_outlines_share_pocket_top() {
    let points = PatternPoints::construct(&ParameterSet::default(), Side::Right);
    let upper = points.upper_outline();
    let lower = points.lower_outline();
    assert_eq!(upper.len() + lower.len(), POINT_COUNT + 1);
    assert_eq!(upper[index::UPPER_END], constants::POCKET_TOP);
    assert_eq!(lower[0], constants::POCKET_TOP);
}
