use {
    crate::{DepthEngine, InferError},
    base::Tensor,
    memmap2::Mmap,
    ndarray::{ArrayD, IxDyn},
    ort::{inputs, session::Session, value::TensorRef},
    std::{fs::File, path::Path, sync::OnceLock},
};

static ORT_INIT: OnceLock<()> = OnceLock::new();

fn ensure_ort_init() {
    ORT_INIT.get_or_init(|| {
        let _ = ort::init().commit();
    });
}

fn init_error<E: std::fmt::Display>(context: &str) -> impl FnOnce(E) -> InferError + '_ {
    move |e| InferError::EngineInit(format!("{context}: {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnnxDevice {
    Cpu,
    Cuda(usize),
}

/// ONNX Runtime session behind [`DepthEngine`].
pub struct OnnxEngine {
    session: Session,
    input_name: String,
    output_name: String,
    input_dims: Vec<i64>,
    output_dims: Vec<i64>,
}

impl OnnxEngine {
    /// Memory-map the model file and build a session with `threads` intra-op threads.
    pub fn load(
        model_path: impl AsRef<Path>,
        device: OnnxDevice,
        threads: usize,
    ) -> Result<Self, InferError> {
        let path = model_path.as_ref();
        let file = File::open(path)
            .map_err(|e| InferError::EngineInit(format!("cannot open model {:?}: {}", path, e)))?;
        // SAFETY: read-only mapping, dropped once the session has copied the graph
        let model = unsafe { Mmap::map(&file) }
            .map_err(|e| InferError::EngineInit(format!("cannot map model {:?}: {}", path, e)))?;
        let engine = Self::from_memory(&model, device, threads)?;
        log::info!(
            "depth model {:?} loaded: input {:?}, output {:?}",
            path,
            engine.input_dims,
            engine.output_dims
        );
        Ok(engine)
    }

    pub fn from_memory(
        model: &[u8],
        device: OnnxDevice,
        threads: usize,
    ) -> Result<Self, InferError> {
        ensure_ort_init();
        let builder = Session::builder()
            .map_err(init_error("failed to create session builder"))?
            .with_intra_threads(threads.max(1))
            .map_err(init_error("failed to set thread count"))?;
        let builder = match device {
            OnnxDevice::Cpu => builder,
            #[cfg(feature = "cuda")]
            OnnxDevice::Cuda(ordinal) => builder
                .with_execution_providers([
                    ort::execution_providers::CUDAExecutionProvider::default()
                        .with_device_id(ordinal as i32)
                        .build(),
                    ort::execution_providers::CPUExecutionProvider::default().build(),
                ])
                .map_err(init_error("failed to register CUDA"))?,
            #[cfg(not(feature = "cuda"))]
            OnnxDevice::Cuda(_) => {
                return Err(InferError::EngineInit("CUDA feature not enabled".to_string()));
            }
        };
        let session = builder
            .commit_from_memory(model)
            .map_err(init_error("failed to load model"))?;

        let input = session
            .inputs
            .first()
            .ok_or_else(|| InferError::EngineInit("model has no inputs".to_string()))?;
        let output = session
            .outputs
            .first()
            .ok_or_else(|| InferError::EngineInit("model has no outputs".to_string()))?;
        let input_dims = input
            .input_type
            .tensor_shape()
            .map(|shape| shape.to_vec())
            .ok_or_else(|| {
                InferError::EngineInit(format!("input '{}' is not a tensor", input.name))
            })?;
        let output_dims = output
            .output_type
            .tensor_shape()
            .map(|shape| shape.to_vec())
            .ok_or_else(|| {
                InferError::EngineInit(format!("output '{}' is not a tensor", output.name))
            })?;
        let input_name = input.name.clone();
        let output_name = output.name.clone();

        Ok(Self {
            session,
            input_name,
            output_name,
            input_dims,
            output_dims,
        })
    }
}

impl DepthEngine for OnnxEngine {
    fn input_dims(&self) -> &[i64] {
        &self.input_dims
    }

    fn output_dims(&self) -> &[i64] {
        &self.output_dims
    }

    fn run(&mut self, input: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        let array = ArrayD::from_shape_vec(IxDyn(&input.shape), input.data.clone())
            .map_err(|e| InferError::Runtime(format!("failed to create ndarray: {}", e)))?;
        let tensor_ref = TensorRef::from_array_view(array.view())
            .map_err(|e| InferError::Runtime(format!("failed to create tensor ref: {}", e)))?;
        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => tensor_ref])
            .map_err(|e| InferError::Runtime(format!("inference failed: {}", e)))?;
        let depth = outputs[self.output_name.as_str()]
            .try_extract_array::<f32>()
            .map_err(|e| {
                InferError::Runtime(format!("output '{}' is not f32: {}", self.output_name, e))
            })?;
        let shape = depth.shape().to_vec();
        let data = depth.iter().copied().collect();
        Ok(Tensor::new(shape, data)?)
    }
}
