use {
    crate::{DepthConfig, DepthEngine, DepthEstimator, InferError, OnnxDevice, OnnxEngine},
    std::path::Path,
};

/// Device selection for engines created by this process.
#[derive(Debug, Clone, Copy)]
pub struct Inference {
    device: OnnxDevice,
}

impl Inference {
    pub fn cpu() -> Self {
        log::info!("Inference device: CPU");
        Self {
            device: OnnxDevice::Cpu,
        }
    }

    #[cfg(feature = "cuda")]
    pub fn cuda(ordinal: usize) -> Self {
        log::info!("Inference device: CUDA (ordinal {})", ordinal);
        Self {
            device: OnnxDevice::Cuda(ordinal),
        }
    }

    pub fn device(&self) -> OnnxDevice {
        self.device
    }

    pub fn onnx_engine(
        &self,
        model_path: impl AsRef<Path>,
        threads: usize,
    ) -> Result<OnnxEngine, InferError> {
        OnnxEngine::load(model_path, self.device, threads)
    }

    /// Depth estimator for `model_path`, disabled if the model cannot be loaded.
    pub fn use_depth_estimator(
        &self,
        model_path: impl AsRef<Path>,
        config: &DepthConfig,
    ) -> DepthEstimator {
        let engine = self
            .onnx_engine(model_path, config.threads)
            .map(|engine| Box::new(engine) as Box<dyn DepthEngine>);
        DepthEstimator::from_result(engine, config)
    }
}
