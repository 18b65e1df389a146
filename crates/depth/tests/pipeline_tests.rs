mod common;

use {
    base::Vec2,
    common::*,
    depth::{DepthPipeline, FrameError, StreamConfig},
    image::Image,
    inference::DepthEstimator,
    std::sync::atomic::Ordering,
    video::{Conversion, Plane, RawFrame},
};

fn column_mean(image: &Image, x: usize) -> f32 {
    let sum: u32 = (0..image.height()).map(|y| image.pixel(x, y)[0] as u32).sum();
    sum as f32 / image.height() as f32
}

#[test]
fn test_gradient_frame_with_diagonal_fixture() {
    let releases = Releases::default();
    let engine = FixtureEngine::new(diagonal());
    let calls = engine.calls.clone();
    let mut pipeline = DepthPipeline::new(estimator(engine), Conversion::Direct);

    let depth = pipeline
        .process(gradient_frame(42, Vec2::new(640, 480), &releases))
        .unwrap();
    assert_eq!(depth.sequence, 42);
    assert_eq!(depth.image.size, Vec2::new(640, 480));
    assert_eq!(depth.image.pixel(0, 0), [0, 0, 0]);
    assert_eq!(depth.image.pixel(639, 479), [255, 255, 255]);
    assert!(column_mean(&depth.image, 0) < column_mean(&depth.image, 639));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(releases.count(), 1);

    // at the fixture's own resolution the decoder output is exact
    let table = pipeline
        .estimator()
        .decode(&diagonal(), Vec2::new(3, 3))
        .unwrap();
    let luma: Vec<u8> = table.data.chunks_exact(3).map(|c| c[0]).collect();
    assert_eq!(luma, vec![0, 131, 189, 131, 189, 227, 189, 227, 255]);
}

#[test]
fn test_gradient_frame_through_echo_engine() {
    let releases = Releases::default();
    let mut pipeline = DepthPipeline::new(estimator(EchoEngine), Conversion::Direct);
    let depth = pipeline
        .process(gradient_frame(0, Vec2::new(640, 480), &releases))
        .unwrap();
    assert_eq!(depth.image.size, Vec2::new(640, 480));
    assert_eq!(depth.image.pixel(0, 240), [0, 0, 0]);
    assert_eq!(depth.image.pixel(639, 240), [255, 255, 255]);
    assert!(column_mean(&depth.image, 0) < column_mean(&depth.image, 639));
}

#[test]
fn test_jpeg_conversion_keeps_frame_size() {
    let releases = Releases::default();
    let mut pipeline = DepthPipeline::new(
        estimator(FixtureEngine::new(diagonal())),
        Conversion::Jpeg { quality: 80 },
    );
    let depth = pipeline
        .process(gradient_frame(3, Vec2::new(320, 240), &releases))
        .unwrap();
    assert_eq!(depth.image.size, Vec2::new(320, 240));
    assert_eq!(releases.count(), 1);
}

#[test]
fn test_odd_frame_size_round_trips() {
    let releases = Releases::default();
    let mut pipeline = DepthPipeline::new(estimator(EchoEngine), Conversion::Direct);
    let depth = pipeline
        .process(gradient_frame(1, Vec2::new(33, 17), &releases))
        .unwrap();
    assert_eq!(depth.image.size, Vec2::new(33, 17));
}

#[test]
fn test_malformed_frame_is_released() {
    let releases = Releases::default();
    let engine = FixtureEngine::new(diagonal());
    let calls = engine.calls.clone();
    let mut pipeline = DepthPipeline::new(estimator(engine), Conversion::Direct);

    let counter = releases.clone();
    let size = Vec2::new(8, 8);
    let frame = RawFrame::new(
        5,
        size,
        Plane::packed(vec![0; 20], 8),
        Plane::packed(vec![128; 16], 4),
        Plane::packed(vec![128; 16], 4),
    )
    .with_release(move || {
        counter.0.fetch_add(1, Ordering::SeqCst);
    });

    assert!(matches!(
        pipeline.process(frame),
        Err(FrameError::Conversion(_))
    ));
    assert_eq!(releases.count(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // the next good frame goes through
    assert!(pipeline.process(gradient_frame(6, size, &releases)).is_ok());
    assert_eq!(releases.count(), 2);
}

#[test]
fn test_missing_model_skips_frames() {
    let config = StreamConfig::default().with_model_path("/nonexistent/depth.onnx");
    let mut pipeline = DepthPipeline::from_config(&config);
    assert!(!pipeline.is_enabled());

    let releases = Releases::default();
    for sequence in 0..3 {
        let result = pipeline.process(gradient_frame(sequence, Vec2::new(64, 48), &releases));
        assert!(matches!(result, Err(FrameError::Disabled)));
    }
    assert_eq!(releases.count(), 3);
}

#[test]
fn test_closed_estimator_disables_pipeline() {
    let mut estimator = estimator(FixtureEngine::new(diagonal()));
    estimator.close();
    let mut pipeline = DepthPipeline::new(estimator, Conversion::Direct);
    let releases = Releases::default();
    assert!(matches!(
        pipeline.process(gradient_frame(0, Vec2::new(8, 8), &releases)),
        Err(FrameError::Disabled)
    ));
    let estimator: DepthEstimator = pipeline.into_estimator();
    assert!(estimator.init_error().is_some());
}
