use {
    anyhow::{Context, Result},
    base::{Vec2, log},
    depth::{DepthFrame, DepthPipeline, DepthStream, StreamConfig},
    minifb::{Key, Window, WindowOptions},
    tokio::sync::watch,
    video::{Conversion, RawFrame},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const OVERLAY_ALPHA: f32 = 0.6;
const STATS_INTERVAL: u64 = 150;

/// Synthetic YU12 capture: a bright disc drifting over a horizontal gradient.
fn capture(sequence: u64) -> Result<RawFrame> {
    let size = Vec2::new(WIDTH, HEIGHT);
    let chroma = size.half_rounded_up();
    let t = sequence as f32 * 0.05;
    let cx = WIDTH as f32 * (0.5 + 0.3 * t.cos());
    let cy = HEIGHT as f32 * (0.5 + 0.3 * (1.3 * t).sin());
    let radius = HEIGHT as f32 * 0.2;

    let mut data = Vec::with_capacity(size.area() + chroma.area() * 2);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let background = (x * 160 / WIDTH) as f32;
            let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let disc = (1.0 - d / radius).max(0.0) * 255.0;
            data.push(background.max(disc) as u8);
        }
    }
    // warm tint in U, cool in V
    data.extend(std::iter::repeat_n(110u8, chroma.area()));
    data.extend(std::iter::repeat_n(150u8, chroma.area()));
    Ok(RawFrame::from_yu12(sequence, size, &data)?)
}

/// Copy of the newest depth frame. The watch lock is held only for the clone.
fn latest_overlay(overlay: &watch::Receiver<Option<DepthFrame>>) -> Option<DepthFrame> {
    overlay.borrow().clone()
}

fn load_config() -> Result<StreamConfig> {
    match std::env::args().nth(1) {
        Some(arg) if arg.ends_with(".json") => {
            StreamConfig::load(&arg).with_context(|| format!("loading {}", arg))
        }
        Some(model) => Ok(StreamConfig::default().with_model_path(model)),
        None => Ok(StreamConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    base::init_stdout_logger();

    let config = load_config()?;
    log::info!("Depth View");
    log::info!("Model: {:?}, conversion: {:?}", config.model_path, config.conversion);

    let (sink, overlay) = watch::channel::<Option<DepthFrame>>(None);
    let stream = DepthStream::start(DepthPipeline::from_config(&config), sink);
    if !stream.is_enabled() {
        log::warn!("No depth model, showing the camera only");
    }

    let mut window = Window::new(
        "Depth View - ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;
    window.set_target_fps(30);

    let mut sequence = 0u64;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame = capture(sequence)?;
        let preview = video::to_rgb(&frame, Conversion::Direct)?;
        stream.push(frame);

        let buffer = match latest_overlay(&overlay) {
            Some(depth) if depth.image.size == preview.size => {
                image::blend_to_u32(&preview, &depth.image, OVERLAY_ALPHA)?
            }
            _ => image::rgb_to_u32(&preview)?,
        };
        window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;

        sequence += 1;
        if sequence % STATS_INTERVAL == 0 {
            log::info!("{:?}", stream.stats());
        }
    }

    log::info!("Exiting...");
    let mut estimator = stream.shutdown().await;
    estimator.close();
    Ok(())
}
