use {crate::InferError, base::Tensor};

/// A loaded depth model: one float tensor in, one float tensor out.
///
/// Dims follow the ONNX convention, a negative entry is dynamic. Callers
/// must not run one engine from two threads at once; `&mut self` on `run`
/// keeps a single caller.
pub trait DepthEngine: Send {
    /// Declared input dims, `[1, H, W, 3]` for channel-last RGB models.
    fn input_dims(&self) -> &[i64];

    /// Declared output dims, `[1, H, W]`.
    fn output_dims(&self) -> &[i64];

    fn run(&mut self, input: &Tensor<f32>) -> Result<Tensor<f32>, InferError>;
}
