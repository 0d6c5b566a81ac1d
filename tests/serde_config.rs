#![cfg(feature = "serde")]

use curvelab::{
    Color, Comparison, ComparisonSlot, CurveFamily, CurveSpec, ParamKey, ParameterSet,
    RenderStyle,
};

#[test]
fn test_spec_round_trip() {
    let spec: CurveSpec = "interpolatingSpring(stiffness: 250, damping: 12.5)"
        .parse()
        .unwrap();
    let json = serde_json::to_string(&spec).unwrap();
    assert_eq!(
        json,
        r#"{"family":"interpolatingSpring","params":{"stiffness":250.0,"damping":12.5}}"#
    );
    let back: CurveSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn test_spec_params_default_to_empty() {
    let spec: CurveSpec = serde_json::from_str(r#"{"family":"bouncy"}"#).unwrap();
    assert_eq!(spec, CurveSpec::with_defaults(CurveFamily::Bouncy));
}

#[test]
fn test_spec_is_validated_on_load() {
    let result: Result<CurveSpec, _> =
        serde_json::from_str(r#"{"family":"interactiveSpring","params":{"response":0.0}}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("response"));

    let result: Result<CurveSpec, _> = serde_json::from_str(r#"{"family":"wobble"}"#);
    assert!(result.is_err());
}

#[test]
fn test_parameter_set_is_a_plain_map() {
    let params = ParameterSet::from([(ParamKey::DampingFraction, 0.7)]);
    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(json, r#"{"dampingFraction":0.7}"#);
    let back: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_render_style_fills_missing_fields() {
    let style: RenderStyle = serde_json::from_str(r#"{"curve_width":3.0}"#).unwrap();
    assert_eq!(style.curve_width, 3.0);
    assert_eq!(style.padding_ratio, 0.1);
    assert_eq!(style.dash, [4.0, 4.0]);
}

#[test]
fn test_comparison_slots_round_trip() {
    let mut comparison = Comparison::new();
    comparison
        .push(CurveSpec::with_defaults(CurveFamily::EaseInOut))
        .unwrap();
    comparison
        .push("spring(bounce: 0.5)".parse().unwrap())
        .unwrap();
    comparison.toggle(0).unwrap();

    let json = serde_json::to_string(comparison.slots()).unwrap();
    let slots: Vec<ComparisonSlot> = serde_json::from_str(&json).unwrap();
    assert_eq!(slots.as_slice(), comparison.slots());
    assert!(!slots[0].active);
    assert_eq!(slots[1].color, Color::ORANGE);
}

