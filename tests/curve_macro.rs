#![cfg(feature = "macros")]

use curvelab::{CurveFamily, CurveSpec, ParamKey, ParameterSet, TimingCurve, curve};

#[test]
fn test_curve_macro_bare_family() {
    let ease = curve!("easeOut");
    assert_eq!(ease, CurveSpec::with_defaults(CurveFamily::EaseOut));
    assert!(ease.params().is_empty());
}

#[test]
fn test_curve_macro_with_params() {
    let spring = curve!("spring(bounce: 0.3)");
    assert_eq!(spring.family(), CurveFamily::Spring);
    assert_eq!(spring.param(ParamKey::Bounce), 0.3);
    assert_eq!(spring.progress(0.0), 0.0);
    assert!((spring.progress(2.0) - 1.0).abs() < 0.01);
}

#[test]
fn test_curve_macro_matches_runtime_parse() {
    let built = curve!("interpolatingSpring(stiffness: 250, damping: 12.5)");
    let parsed: CurveSpec = "interpolatingSpring(stiffness: 250, damping: 12.5)"
        .parse()
        .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_curve_macro_matches_constructor() {
    let built = curve!("interactiveSpring(response: 0.4, dampingFraction: 0.7)");
    let expected = CurveSpec::new(
        CurveFamily::InteractiveSpring,
        ParameterSet::new()
            .with(ParamKey::Response, 0.4)
            .with(ParamKey::DampingFraction, 0.7),
    )
    .unwrap();
    assert_eq!(built, expected);
    assert!((built.time_scale() - 1.24).abs() < 1e-12);
}

#[test]
fn test_curve_macro_negative_bounce() {
    // Negative bounce is finite, so accepted; it damps harder
    let spring = curve!("spring(bounce: -0.5)");
    assert_eq!(spring.param(ParamKey::Bounce), -0.5);
    assert_eq!(spring.time_scale(), 1.0);
}

#[test]
fn test_curve_macro_preset_array() {
    fn presets() -> [CurveSpec; 3] {
        [curve!("smooth"), curve!("snappy(extraBounce: 0.1)"), curve!("bouncy")]
    }
    let families: Vec<CurveFamily> = presets().iter().map(CurveSpec::family).collect();
    assert_eq!(
        families,
        vec![CurveFamily::Smooth, CurveFamily::Snappy, CurveFamily::Bouncy]
    );
}
