#![allow(dead_code)]

use {
    base::{Tensor, Vec2},
    inference::{DepthConfig, DepthEngine, DepthEstimator, InferError},
    std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
            mpsc,
        },
        time::{Duration, Instant},
    },
    video::RawFrame,
};

pub const WAIT: Duration = Duration::from_secs(5);

/// Counts frames handed back to the capture source.
#[derive(Clone, Default)]
pub struct Releases(pub Arc<AtomicUsize>);

impl Releases {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// YU12 frame with a horizontal luma gradient and neutral chroma.
pub fn gradient_frame(sequence: u64, size: Vec2<usize>, releases: &Releases) -> RawFrame {
    let chroma = size.half_rounded_up();
    let mut data = Vec::with_capacity(size.area() + chroma.area() * 2);
    for _ in 0..size.y {
        data.extend((0..size.x).map(|x| (x * 255 / (size.x - 1).max(1)) as u8));
    }
    data.resize(size.area() + chroma.area() * 2, 128);
    let counter = Arc::clone(&releases.0);
    RawFrame::from_yu12(sequence, size, &data)
        .unwrap()
        .with_release(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
}

/// 3x3 depth grid with `v = x + y`.
pub fn diagonal() -> Tensor<f32> {
    Tensor::new(
        vec![1, 3, 3],
        (0..3).flat_map(|y| (0..3).map(move |x| (x + y) as f32)).collect(),
    )
    .unwrap()
}

pub struct FixtureEngine {
    pub output: Tensor<f32>,
    pub calls: Arc<AtomicUsize>,
}

impl FixtureEngine {
    pub fn new(output: Tensor<f32>) -> Self {
        Self {
            output,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl DepthEngine for FixtureEngine {
    fn input_dims(&self) -> &[i64] {
        &[1, -1, -1, 3]
    }

    fn output_dims(&self) -> &[i64] {
        &[1, -1, -1]
    }

    fn run(&mut self, _input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

/// Returns the red channel of its input as depth, so brighter pixels are deeper.
pub struct EchoEngine;

impl DepthEngine for EchoEngine {
    fn input_dims(&self) -> &[i64] {
        &[1, -1, -1, 3]
    }

    fn output_dims(&self) -> &[i64] {
        &[1, -1, -1]
    }

    fn run(&mut self, input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        let (h, w) = (input.shape[1], input.shape[2]);
        let red = input.data.chunks_exact(3).map(|c| c[0]).collect();
        Ok(Tensor::new(vec![1, h, w], red)?)
    }
}

/// Signals each run on `entered`, then blocks until the test sends on `gate`.
pub struct GateEngine {
    pub entered: mpsc::Sender<()>,
    pub gate: mpsc::Receiver<()>,
    pub calls: Arc<AtomicUsize>,
}

impl DepthEngine for GateEngine {
    fn input_dims(&self) -> &[i64] {
        &[1, -1, -1, 3]
    }

    fn output_dims(&self) -> &[i64] {
        &[1, -1, -1]
    }

    fn run(&mut self, _input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.send(()).ok();
        self.gate
            .recv_timeout(WAIT)
            .map_err(|_| InferError::Runtime("gate never opened".to_string()))?;
        Ok(diagonal())
    }
}

/// Panics on the first run, then behaves like [`FixtureEngine`].
pub struct PanicOnceEngine {
    pub panicked: bool,
}

impl DepthEngine for PanicOnceEngine {
    fn input_dims(&self) -> &[i64] {
        &[1, -1, -1, 3]
    }

    fn output_dims(&self) -> &[i64] {
        &[1, -1, -1]
    }

    fn run(&mut self, _input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        if !self.panicked {
            self.panicked = true;
            panic!("engine fault");
        }
        Ok(diagonal())
    }
}

pub fn small_config() -> DepthConfig {
    DepthConfig::default().with_input_size(Vec2::new(16, 16))
}

pub fn estimator(engine: impl DepthEngine + 'static) -> DepthEstimator {
    DepthEstimator::new(Box::new(engine), &small_config()).unwrap()
}

/// Poll `condition` until it holds or [`WAIT`] runs out.
pub fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < WAIT {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}
