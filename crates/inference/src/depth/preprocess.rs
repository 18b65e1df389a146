use {
    crate::InferError,
    base::{Tensor, Vec2},
    image::Image,
};

/// Resize an `Rgb8` image to `size` and pack it as a `[1, H, W, 3]` tensor in [0, 1].
pub fn preprocess(image: &Image, size: Vec2<usize>) -> Result<Tensor<f32>, InferError> {
    let resized = image::resize(image, size)?;
    let data = resized.data.iter().map(|&c| c as f32 / 255.0).collect();
    Ok(Tensor::new(vec![1, size.y, size.x, 3], data)?)
}
