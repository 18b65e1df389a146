//! Depth estimation on top of an inference engine.
//!
//! [`DepthEstimator`] owns one [`DepthEngine`] and runs the encode, infer and
//! decode steps. [`OnnxEngine`] is the ONNX Runtime implementation.

pub mod backends;
pub mod depth;
pub mod engine;
pub mod error;
pub mod inference;

pub use {
    backends::{OnnxDevice, OnnxEngine},
    depth::{ContrastStretch, DepthConfig, DepthEstimator, postprocess, preprocess},
    engine::DepthEngine,
    error::InferError,
    inference::Inference,
};
