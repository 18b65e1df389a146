pub mod onnx;

pub use onnx::{OnnxDevice, OnnxEngine};
