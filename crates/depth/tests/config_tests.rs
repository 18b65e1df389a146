use {
    base::Vec2,
    depth::{ConfigError, StreamConfig},
    std::path::PathBuf,
    video::Conversion,
};

#[test]
fn test_empty_config_uses_defaults() {
    let config: StreamConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, StreamConfig::default());
    assert_eq!(config.conversion, Conversion::Direct);
    assert_eq!(config.depth.input_size(), Vec2::new(256, 256));
    assert_eq!(config.depth.threads, 4);
}

#[test]
fn test_load_config_file() {
    let path = std::env::temp_dir().join(format!("depth-stream-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "model_path": "models/depth_anything_v2_vits.onnx",
            "conversion": { "mode": "jpeg", "quality": 80 },
            "depth": { "input_width": 518, "input_height": 392, "threads": 2 }
        }"#,
    )
    .unwrap();

    let config = StreamConfig::load(&path).unwrap();
    assert_eq!(
        config.model_path,
        PathBuf::from("models/depth_anything_v2_vits.onnx")
    );
    assert_eq!(config.conversion, Conversion::Jpeg { quality: 80 });
    assert_eq!(config.depth.input_size(), Vec2::new(518, 392));
    assert_eq!(config.depth.threads, 2);
    assert_eq!(config.depth.stretch_gain, 9.0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_reports_missing_and_invalid_files() {
    assert!(matches!(
        StreamConfig::load("/nonexistent/stream.json"),
        Err(ConfigError::Io(_))
    ));

    let path = std::env::temp_dir().join(format!("depth-stream-bad-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "conversion": { "mode": "png" } }"#).unwrap();
    assert!(matches!(StreamConfig::load(&path), Err(ConfigError::Parse(_))));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_config_serializes_back() {
    let config = StreamConfig::default().with_conversion(Conversion::Jpeg { quality: 90 });
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""mode":"jpeg""#));
    let parsed: StreamConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
