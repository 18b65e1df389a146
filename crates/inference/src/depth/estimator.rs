use {
    super::{
        ContrastStretch, DepthConfig, check_output_shape, postprocess, preprocess,
        resolve_input_size,
    },
    crate::{DepthEngine, InferError, OnnxDevice, OnnxEngine},
    base::{Tensor, Vec2},
    image::Image,
    std::path::Path,
};

/// Depth estimation over an exclusively owned engine.
///
/// If the engine could not be created the estimator is disabled for good:
/// [`infer`](Self::infer) and [`estimate`](Self::estimate) return nothing,
/// and [`init_error`](Self::init_error) says why. Per-call failures never
/// disable it.
pub struct DepthEstimator {
    engine: Option<Box<dyn DepthEngine>>,
    init_error: Option<String>,
    input_size: Vec2<usize>,
    stretch: ContrastStretch,
}

impl std::fmt::Debug for DepthEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepthEstimator")
            .field("enabled", &self.engine.is_some())
            .field("init_error", &self.init_error)
            .field("input_size", &self.input_size)
            .field("stretch", &self.stretch)
            .finish()
    }
}

impl DepthEstimator {
    pub fn new(engine: Box<dyn DepthEngine>, config: &DepthConfig) -> Result<Self, InferError> {
        config.validate()?;
        let input_size = resolve_input_size(engine.input_dims(), config.input_size())?;
        Ok(Self {
            engine: Some(engine),
            init_error: None,
            input_size,
            stretch: config.stretch(),
        })
    }

    /// Build from the outcome of engine creation, disabling on failure.
    pub fn from_result(
        engine: Result<Box<dyn DepthEngine>, InferError>,
        config: &DepthConfig,
    ) -> Self {
        match engine.and_then(|engine| Self::new(engine, config)) {
            Ok(estimator) => estimator,
            Err(err) => {
                log::error!("depth estimation disabled: {}", err);
                Self::disabled(err.to_string(), config)
            }
        }
    }

    pub fn disabled(reason: impl Into<String>, config: &DepthConfig) -> Self {
        Self {
            engine: None,
            init_error: Some(reason.into()),
            input_size: config.input_size(),
            stretch: config.stretch(),
        }
    }

    /// Load an ONNX model on the CPU.
    pub fn open(model_path: impl AsRef<Path>, config: &DepthConfig) -> Self {
        let engine = OnnxEngine::load(model_path, OnnxDevice::Cpu, config.threads)
            .map(|engine| Box::new(engine) as Box<dyn DepthEngine>);
        Self::from_result(engine, config)
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    /// Resolution the encoder resizes to.
    pub fn input_size(&self) -> Vec2<usize> {
        self.input_size
    }

    pub fn stretch(&self) -> ContrastStretch {
        self.stretch
    }

    pub fn encode(&self, image: &Image) -> Result<Tensor<f32>, InferError> {
        preprocess(image, self.input_size)
    }

    /// Run the engine, checking both tensors against its declared dims.
    pub fn try_infer(&mut self, input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        let engine = self.engine.as_mut().ok_or(InferError::Disabled)?;
        let expected = [1, self.input_size.y, self.input_size.x, 3];
        if input.shape != expected {
            return Err(InferError::ShapeMismatch {
                expected: format!("{:?}", expected),
                got: format!("{:?}", input.shape),
            });
        }
        let output = engine.run(input)?;
        check_output_shape(engine.output_dims(), &output.shape)?;
        Ok(output)
    }

    pub fn infer(&mut self, input: &Tensor<f32>) -> Option<Tensor<f32>> {
        match self.try_infer(input) {
            Ok(output) => Some(output),
            Err(InferError::Disabled) => None,
            Err(err) => {
                log::debug!("inference failed: {}", err);
                None
            }
        }
    }

    /// Decode a depth tensor to a gray image of `target` size.
    pub fn decode(&self, depth: &Tensor<f32>, target: Vec2<usize>) -> Result<Image, InferError> {
        postprocess(depth, target, self.stretch)
    }

    /// Encode, infer and decode one RGB image into a depth image of the same size.
    pub fn try_estimate(&mut self, image: &Image) -> Result<Image, InferError> {
        if !self.is_enabled() {
            return Err(InferError::Disabled);
        }
        let input = self.encode(image)?;
        let depth = self.try_infer(&input)?;
        self.decode(&depth, image.size)
    }

    pub fn estimate(&mut self, image: &Image) -> Option<Image> {
        match self.try_estimate(image) {
            Ok(depth) => Some(depth),
            Err(InferError::Disabled) => None,
            Err(err) => {
                log::debug!("depth estimation failed: {}", err);
                None
            }
        }
    }

    /// Release the engine. The estimator stays usable as a disabled one.
    pub fn close(&mut self) {
        if self.engine.take().is_some() {
            log::info!("depth engine closed");
            self.init_error = Some("engine closed".to_string());
        }
    }
}

impl Drop for DepthEstimator {
    fn drop(&mut self) {
        self.close();
    }
}
