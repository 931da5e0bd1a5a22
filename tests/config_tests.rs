// Configuration and input decoding, plus the small value types the
// adapter leans on.

use landscape_core::{
    Coalescer, DurationValue, LandscapeConfig, LandscapeData, LandscapeError, LandscapeOptions,
    LanguageTable, Margin, Rgb, Tween,
};

#[test]
fn empty_config_uses_defaults() {
    let config = LandscapeConfig::from_json("{}").unwrap();
    assert_eq!(config, LandscapeConfig::default());
    assert_eq!(config.margin, Margin::uniform(20.0));
    assert_eq!(config.colors.points, "#CA5252");
    assert_eq!(config.landmarks.max_landmarks, 400);
    assert!(config.tooltip.enabled);
    assert_eq!(config.detail_base_url, "http://videolectures.net/");
}

#[test]
fn partial_config_overrides_fields() {
    let json = r##"{
        "margin": { "left": 40 },
        "colors": { "background": "#eee" },
        "landmarks": { "maxLandmarks": 50 },
        "tooltip": { "databaseDate": "01.01.2020" }
    }"##;
    let config = LandscapeConfig::from_json(json).unwrap();
    assert_eq!(config.margin.left, 40.0);
    assert_eq!(config.margin.top, 20.0);
    assert_eq!(config.colors.points, "#CA5252");
    assert_eq!(config.landmarks.max_landmarks, 50);
    assert!(config.landmarks.enabled);
    assert_eq!(config.tooltip.database_date, "01.01.2020");

    let options = LandscapeOptions::from_config(&config);
    assert_eq!(options.background_color, Rgb::new(0xee, 0xee, 0xee));
    assert_eq!(options.landmarks.as_ref().map(|l| l.max_landmarks), Some(50));
    assert_eq!(
        options.tooltip.as_ref().map(|t| t.database_date.as_str()),
        Some("01.01.2020")
    );
}

#[test]
fn bad_colors_fall_back_to_defaults() {
    let mut config = LandscapeConfig::default();
    config.colors.points = "red".into();
    let options = LandscapeOptions::from_config(&config);
    assert_eq!(options.point_color, Rgb::new(0xca, 0x52, 0x52));
}

#[test]
fn malformed_config_is_an_error() {
    let err = LandscapeConfig::from_json("{\"margin\": 3}").unwrap_err();
    assert!(matches!(err, LandscapeError::InvalidData(_)));
}

#[test]
fn data_decodes_from_source_json() {
    let json = r#"{ "points": [
        { "slug": "a", "title": "A", "language": "en", "published": "2010-01-01",
          "duration": "125", "views": 3, "x": 0.1, "y": 0.9,
          "landmarkTags": [["ml", 0.5], ["ai", 2]] },
        { "slug": "b", "title": "B", "language": "sl", "published": "2011-01-01",
          "duration": 60.7, "x": 0.5, "y": 0.5 }
    ] }"#;
    let data = LandscapeData::from_json(json).unwrap();
    let points = data.points.unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].duration.whole_seconds(), 125);
    assert_eq!(points[0].views, 3.0);
    let tags = points[0].landmark_tags.as_ref().unwrap();
    assert_eq!(tags[1].0, "ai");
    assert_eq!(tags[1].1, 2.0);

    assert_eq!(points[1].duration, DurationValue::Seconds(60.7));
    assert_eq!(points[1].duration.whole_seconds(), 60);
    assert_eq!(points[1].views, 0.0);
    assert!(points[1].author.is_none());
    assert!(points[1].landmark_tags.is_none());
}

#[test]
fn data_without_points_field_decodes_to_none() {
    let data = LandscapeData::from_json("{}").unwrap();
    assert!(data.points.is_none());
}

#[test]
fn record_without_title_is_rejected() {
    let json =
        r#"{ "points": [ { "slug": "a", "language": "en", "published": "", "x": 0, "y": 0 } ] }"#;
    assert!(matches!(
        LandscapeData::from_json(json),
        Err(LandscapeError::InvalidData(_))
    ));
}

#[test]
fn odd_durations_count_as_zero() {
    assert_eq!(DurationValue::Text("abc".into()).whole_seconds(), 0);
    assert_eq!(DurationValue::Text("-5".into()).whole_seconds(), 0);
    assert_eq!(DurationValue::Seconds(f64::NAN).whole_seconds(), 0);
    assert_eq!(DurationValue::Text("90s".into()).whole_seconds(), 90);
}

#[test]
fn hex_colors_parse_and_print() {
    assert_eq!(Rgb::from_hex("#CA5252"), Some(Rgb::new(202, 82, 82)));
    assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
    assert_eq!(Rgb::from_hex("CA5252"), None);
    assert_eq!(Rgb::from_hex("#12345"), None);
    assert_eq!(Rgb::from_hex("#gg0000"), None);
    assert_eq!(Rgb::new(202, 82, 82).to_string(), "#ca5252");
}

#[test]
fn brighter_lifts_channels() {
    assert_eq!(Rgb::new(202, 82, 82).brighter(1.0), Rgb::new(255, 117, 117));
    assert_eq!(Rgb::new(0, 0, 0).brighter(1.0), Rgb::new(30, 30, 30));
    // near-black channels are floored before lifting
    assert_eq!(Rgb::new(10, 0, 100).brighter(1.0), Rgb::new(42, 0, 142));
    assert_eq!(Rgb::WHITE.brighter(1.0), Rgb::WHITE);
}

#[test]
fn coalescer_honours_only_the_latest_ticket() {
    let mut resize = Coalescer::new(100);
    assert_eq!(resize.window_ms(), 100);
    let first = resize.schedule();
    let second = resize.schedule();
    assert!(!resize.is_latest(first));
    assert!(resize.is_latest(second));
}

#[test]
fn language_table_lookup() {
    let common = LanguageTable::common();
    assert_eq!(common.name("en"), Some("English"));
    assert_eq!(common.name("sl"), Some("Slovene"));
    assert_eq!(common.name("xx"), None);

    let custom = LanguageTable::from_pairs([("tlh", "Klingon")]);
    assert_eq!(custom.name("tlh"), Some("Klingon"));
    assert_eq!(custom.name("en"), None);
}

#[test]
fn tween_eases_and_settles() {
    let mut t = Tween::new(0.0, 100.0, 1000.0);
    assert_eq!(t.value(), 0.0);
    t.advance(250.0);
    assert!((t.value() - 6.25).abs() < 1e-3);
    t.advance(250.0);
    assert!((t.value() - 50.0).abs() < 1e-3);
    t.advance(5000.0);
    assert!(t.is_done());
    assert_eq!(t.value(), 100.0);

    t.retarget(0.0, 1000.0);
    assert_eq!(t.from, 100.0);
    t.set(7.0);
    assert!(t.is_done());
    assert_eq!(t.value(), 7.0);
}
