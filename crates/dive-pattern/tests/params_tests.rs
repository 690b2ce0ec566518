use dive_pattern::*;

#[test]
fn test_defaults() {
    let params = ParameterSet::default();
    assert_eq!(params.page_width(), Length::from_mm(297.0));
    assert_eq!(params.page_height(), Length::from_mm(420.0));
    assert_eq!(params.device_width(), Length::from_mm(65.5));
    assert_eq!(params.device_height(), Length::from_mm(132.6));
    assert_eq!(params.device_depth(), Length::from_mm(6.18));
    assert_eq!(params.device_screen_middle(), None);
    assert_eq!(params.lens_focal_length(), Length::from_mm(40.0));
    assert_eq!(params.lens_diameter(), Length::from_mm(26.0));
    assert_eq!(params.strap_width(), Length::from_mm(40.0));
    assert_eq!(params.pupillary_distance(), Length::from_mm(60.0));
    assert_eq!(params.page(), None);
    assert!(params.is_screen_centered());
}

#[test]
fn test_range_boundaries() {
    let params = ParameterSet::default();

    // Inclusive bounds
    assert!(params.set("strap_width", "20").is_ok());
    assert!(params.set("strap_width", "46").is_ok());
    assert!(params.set("lens_diameter", "20").is_ok());
    assert!(params.set("lens_diameter", "30").is_ok());
    assert!(params.set("page_width", "498").is_ok());

    let err = params.set("strap_width", "19").unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: "strap_width",
            value: 19.0,
            min: 20.0,
            max: 46.0,
        }
    );
    assert_eq!(err.field(), "strap_width");

    assert!(params.set("lens_diameter", "19").is_err());
    assert!(params.set("lens_diameter", "31").is_err());
    assert!(params.set("device_depth", "4.99").is_err());
    assert!(params.set("pupillary_distance", "80.01").is_err());
    assert!(params.set("device_screen_middle", "29").is_err());
}

#[test]
fn test_pd_alias() {
    let params = ParameterSet::default().set("pd", "64").unwrap();
    assert_eq!(params.pupillary_distance(), Length::from_mm(64.0));
}

#[test]
fn test_unknown_field() {
    let err = ParameterSet::default().set("color", "red").unwrap_err();
    assert_eq!(err, ValidationError::UnknownField("color".to_string()));
    assert_eq!(err.to_string(), "Incorrect property name: color");
}

#[test]
fn test_required_field_cannot_be_unset() {
    let err = ParameterSet::default().set("device_width", "").unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "device_width" });
    assert!(ParameterSet::default().set("lens_focal_length", "None").is_err());
}

#[test]
fn test_screen_middle_set_and_unset() {
    let params = ParameterSet::default().set("device_screen_middle", "70").unwrap();
    assert_eq!(params.device_screen_middle(), Some(Length::from_mm(70.0)));
    assert!(!params.is_screen_centered());

    let cleared = params.set("device_screen_middle", "None").unwrap();
    assert_eq!(cleared.device_screen_middle(), None);
    let cleared = params.set("device_screen_middle", "").unwrap();
    assert_eq!(cleared.device_screen_middle(), None);

    // Half the height counts as centred
    let half = ParameterSet::default().set("device_screen_middle", "66.3").unwrap();
    assert!(half.is_screen_centered());
}

#[test]
fn test_height_change_resets_screen_middle() {
    let params = ParameterSet::default()
        .set("device_screen_middle", "70")
        .unwrap()
        .set("device_height", "140")
        .unwrap();
    assert_eq!(params.device_screen_middle(), None);
    assert_eq!(params.device_height(), Length::from_mm(140.0));
}

#[test]
fn test_dimensions_shorthand() {
    let start = ParameterSet::default()
        .set("device_width", "70")
        .unwrap()
        .set("device_screen_middle", "60")
        .unwrap();
    let params = start.set("dimensions", "132.6x65.5x6.18").unwrap();
    assert_eq!(params, ParameterSet::default());

    let upper = start.set("dimensions", "150X70X9").unwrap();
    assert_eq!(upper.device_height(), Length::from_mm(150.0));
    assert_eq!(upper.device_width(), Length::from_mm(70.0));
    assert_eq!(upper.device_depth(), Length::from_mm(9.0));
}

#[test]
fn test_dimensions_are_atomic() {
    let start = ParameterSet::default().set("device_screen_middle", "70").unwrap();

    // Width out of range: nothing changes
    let err = start.set("dimensions", "150x40x9").unwrap_err();
    assert_eq!(err.field(), "device_width");
    assert_eq!(start.device_height(), Length::from_mm(132.6));
    assert_eq!(start.device_screen_middle(), Some(Length::from_mm(70.0)));

    for raw in ["150x70", "150x70x9x1", "tall", "150xwidex9", ""] {
        assert!(
            matches!(
                start.set("dimensions", raw),
                Err(ValidationError::MalformedDimensions(_))
            ),
            "{raw:?} should be malformed"
        );
    }
}

#[test]
fn test_values_round_to_hundredths() {
    let params = ParameterSet::default().set("device_depth", "6.184").unwrap();
    assert_eq!(params.device_depth().hundredths(), 618);
    assert_eq!(params.value_text(Field::DeviceDepth), "6.18");
}

#[test]
fn test_screen_offsets_sum_to_height() {
    let params = ParameterSet::default().set("device_screen_middle", "50.25").unwrap();
    let total = params.screen_offset(Side::Right) + params.screen_offset(Side::Left);
    assert_eq!(total, params.device_height().hundredths() as f64);

    let odd = ParameterSet::default().set("device_height", "132.61").unwrap();
    assert_eq!(odd.screen_offset(Side::Right), 6630.5);
    assert_eq!(odd.screen_offset(Side::Left), 6630.5);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_round_trip() {
    let params = ParameterSet::default()
        .set("device_screen_middle", "70")
        .unwrap()
        .set("page", "2")
        .unwrap();
    let json = serde_json::to_string(&params).unwrap();
    assert!(json.contains("\"device_screen_middle\":70.0"));
    assert!(json.contains("\"page\":2"));

    let loaded: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, params);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_partial_and_invalid() {
    let loaded: ParameterSet = serde_json::from_str(r#"{"device_width": 70}"#).unwrap();
    assert_eq!(loaded.device_width(), Length::from_mm(70.0));
    assert_eq!(loaded.device_height(), ParameterSet::default().device_height());

    assert!(serde_json::from_str::<ParameterSet>(r#"{"strap_width": 10}"#).is_err());
    assert!(serde_json::from_str::<ParameterSet>(r#"{"page": 3}"#).is_err());
}
