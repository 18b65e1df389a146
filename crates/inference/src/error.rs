use std::fmt;

#[derive(Debug)]
pub enum InferError {
    /// The engine could not be created. Permanent for the estimator that saw it.
    EngineInit(String),
    ShapeMismatch { expected: String, got: String },
    Runtime(String),
    /// The estimator has no engine.
    Disabled,
    Config(String),
    Image(image::ImageError),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::EngineInit(msg) => write!(f, "engine init error: {msg}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
            InferError::Disabled => write!(f, "depth engine is disabled"),
            InferError::Config(msg) => write!(f, "config error: {msg}"),
            InferError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<image::ImageError> for InferError {
    fn from(err: image::ImageError) -> Self {
        InferError::Image(err)
    }
}

impl From<base::TensorError> for InferError {
    fn from(err: base::TensorError) -> Self {
        match err {
            base::TensorError::ShapeMismatch { expected, got } => InferError::ShapeMismatch {
                expected: format!("{expected} elements"),
                got: format!("{got} elements"),
            },
            base::TensorError::ShapeOverflow => InferError::ShapeMismatch {
                expected: "representable shape".to_string(),
                got: "overflowing shape".to_string(),
            },
        }
    }
}
