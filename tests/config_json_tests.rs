use chart_brush::api::{AxisConfig, AxisKind, BrushConfig, OrdinalPlacement, TickInterval};
use chart_brush::core::{BrushGeometry, BrushPadding, DomainBoundInput};
use chart_brush::BrushError;

#[test]
fn brush_config_round_trips_through_json() {
    let config = BrushConfig::default()
        .with_gap(4)
        .with_always_show_text(true)
        .with_leave_timeout_ms(250)
        .with_padding(BrushPadding::uniform(2.0));
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(BrushConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn brush_config_fills_missing_fields_with_defaults() {
    let config = BrushConfig::from_json_str(r#"{ "gap": 3 }"#).expect("parse");
    assert_eq!(config.gap, 3);
    assert_eq!(config.leave_timeout_ms, 1_000);
    assert!(!config.always_show_text);
}

#[test]
fn invalid_brush_json_is_a_config_error() {
    assert!(matches!(
        BrushConfig::from_json_str(r#"{ "gap": 0 }"#),
        Err(BrushError::InvalidConfig(_))
    ));
    assert!(matches!(
        BrushConfig::from_json_str("not json"),
        Err(BrushError::InvalidConfig(_))
    ));
}

#[test]
fn axis_config_round_trips_with_bound_expressions() {
    let config = AxisConfig::number()
        .with_tick_count(6.0)
        .with_interval(TickInterval::Every(2))
        .with_domain(0.0, "dataMax + 10");
    let json = config.to_json_pretty().expect("serialize");
    let parsed = AxisConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
    assert_eq!(
        parsed.domain,
        Some([
            DomainBoundInput::Number(0.0),
            DomainBoundInput::Expression("dataMax + 10".to_owned())
        ])
    );
}

#[test]
fn axis_config_defaults_match_category_axis() {
    let config = AxisConfig::from_json_str("{}").expect("parse");
    assert_eq!(config.kind, AxisKind::Category);
    assert_eq!(config.interval, TickInterval::PreserveEnd);
    assert_eq!(config.min_tick_gap, 5.0);
    assert!(config.allow_duplicated_category);
    assert_eq!(config.placement, OrdinalPlacement::Point);
}

#[test]
fn invalid_axis_json_is_rejected() {
    assert!(AxisConfig::from_json_str(r#"{ "min_tick_gap": -4.0 }"#).is_err());
    assert!(AxisConfig::from_json_str(r#"{ "kind": "Radial" }"#).is_err());
}

#[test]
fn geometry_validation_reports_the_box() {
    let err = BrushGeometry::new(0.0, 0.0, -10.0, 40.0)
        .validate()
        .expect_err("negative width");
    assert!(matches!(err, BrushError::InvalidGeometry { width, .. } if width == -10.0));
    assert!(BrushGeometry::new(0.0, 0.0, 10.0, 40.0).validate().is_ok());
}
