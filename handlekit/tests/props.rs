use handlekit::{Direction, HandleConfig, HandleError, HandleOptions};

// ============================================================================
// Defaults and merging
// ============================================================================

#[test]
fn test_defaults() {
    let config = HandleConfig::default();

    assert_eq!(config.class_name, "");
    assert_eq!(config.parent, None);
    assert_eq!(config.min_bound, 0.0);
    assert_eq!(config.max_bound, 1.0);
    assert!(!config.is_bound);
    assert!(!config.is_inversed);
    assert_eq!(config.direction, Direction::X);
    assert_eq!(config.snap_point, 0.0);
    assert_eq!(config.snap_strength, 0.0);
}

#[test]
fn test_overrides_merge_over_defaults() {
    let options = HandleOptions::new()
        .class_name("volume")
        .direction(Direction::Y)
        .snap(0.5, 0.1);

    let config = HandleConfig::from_options(&options);

    assert_eq!(config.class_name, "volume");
    assert_eq!(config.direction, Direction::Y);
    assert_eq!(config.snap_point, 0.5);
    assert_eq!(config.snap_strength, 0.1);
    // Untouched fields keep their defaults
    assert_eq!(config.max_bound, 1.0);
    assert!(!config.is_bound);
}

// ============================================================================
// JSON options
// ============================================================================

#[test]
fn test_options_from_json() {
    let options = HandleOptions::from_json(
        r#"{
            "className": "seek",
            "parent": "track",
            "minBound": 0.1,
            "maxBound": 0.9,
            "isBound": true,
            "isInversed": true,
            "direction": "y",
            "snapPoint": 0.5,
            "snapStrength": 0.05
        }"#,
    )
    .expect("valid options");

    let config = HandleConfig::from_options(&options);
    assert_eq!(config.class_name, "seek");
    assert_eq!(config.parent.as_deref(), Some("track"));
    assert_eq!(config.min_bound, 0.1);
    assert_eq!(config.max_bound, 0.9);
    assert!(config.is_bound);
    assert!(config.is_inversed);
    assert_eq!(config.direction, Direction::Y);
    assert_eq!(config.snap_point, 0.5);
    assert_eq!(config.snap_strength, 0.05);
}

#[test]
fn test_empty_json_is_all_defaults() {
    let options = HandleOptions::from_json("{}").expect("valid options");
    assert_eq!(HandleConfig::from_options(&options), HandleConfig::default());
}

#[test]
fn test_null_on_progress_is_accepted() {
    let options = HandleOptions::from_json(r#"{ "onProgress": null, "minBound": 0.2 }"#)
        .expect("valid options");
    assert!(options.on_progress.is_none());
    assert_eq!(HandleConfig::from_options(&options).min_bound, 0.2);

    let options = HandleOptions::from_json(r#"{ "onProgress": "not a function" }"#)
        .expect("valid options");
    assert!(options.on_progress.is_none());
}

#[test]
fn test_bad_direction_is_rejected() {
    let result = HandleOptions::from_json(r#"{ "direction": "z" }"#);
    assert!(matches!(result, Err(HandleError::Options(_))));
}

#[test]
fn test_unknown_key_is_rejected() {
    let result = HandleOptions::from_json(r#"{ "snapStrenght": 0.1 }"#);
    assert!(result.is_err());
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_direction_parse() {
    assert_eq!("x".parse::<Direction>().ok(), Some(Direction::X));
    assert_eq!("y".parse::<Direction>().ok(), Some(Direction::Y));

    let err = "X".parse::<Direction>().unwrap_err();
    assert!(matches!(err, HandleError::InvalidDirection(ref s) if s == "X"));
    assert_eq!(err.to_string(), "Invalid direction 'X', expected 'x' or 'y'");
}

#[test]
fn test_direction_sign() {
    assert_eq!(Direction::X.sign(), 1.0);
    assert_eq!(Direction::Y.sign(), -1.0);
    assert_eq!(Direction::Y.to_string(), "y");
}
