use {
    crate::{DepthFrame, FrameError, Stage, StreamConfig, StreamStats},
    inference::{DepthEstimator, Inference},
    std::sync::Arc,
    video::{Conversion, RawFrame},
};

/// One pass per frame: convert, encode, infer, decode.
pub struct DepthPipeline {
    estimator: DepthEstimator,
    conversion: Conversion,
    stats: Arc<StreamStats>,
}

impl DepthPipeline {
    pub fn new(estimator: DepthEstimator, conversion: Conversion) -> Self {
        Self {
            estimator,
            conversion,
            stats: Arc::new(StreamStats::new()),
        }
    }

    /// Load the model named in `config` on the CPU.
    pub fn from_config(config: &StreamConfig) -> Self {
        let estimator = Inference::cpu().use_depth_estimator(&config.model_path, &config.depth);
        Self::new(estimator, config.conversion)
    }

    pub fn is_enabled(&self) -> bool {
        self.estimator.is_enabled()
    }

    pub fn estimator(&self) -> &DepthEstimator {
        &self.estimator
    }

    pub fn stats(&self) -> Arc<StreamStats> {
        Arc::clone(&self.stats)
    }

    /// Run `frame` through every stage.
    ///
    /// The capture buffer is released as soon as the frame is converted, or
    /// on return if conversion fails.
    pub fn process(&mut self, frame: RawFrame) -> Result<DepthFrame, FrameError> {
        if !self.estimator.is_enabled() {
            return Err(FrameError::Disabled);
        }
        let sequence = frame.sequence;
        let size = frame.size;

        self.stats.set_stage(Stage::Converting);
        let rgb = video::to_rgb(&frame, self.conversion)?;
        drop(frame);

        self.stats.set_stage(Stage::Encoding);
        let input = self.estimator.encode(&rgb)?;

        self.stats.set_stage(Stage::Inferring);
        let depth = self.estimator.try_infer(&input)?;

        self.stats.set_stage(Stage::Decoding);
        let image = self.estimator.decode(&depth, size)?;

        Ok(DepthFrame { sequence, image })
    }

    pub fn into_estimator(self) -> DepthEstimator {
        self.estimator
    }
}
