use {
    super::output_size,
    crate::InferError,
    base::{Tensor, Vec2},
    image::Image,
};

/// Logarithmic contrast stretch `ln(1 + gain * n) / ln(base)`.
///
/// Monotonic on [0, 1], expands values near 0 so near-range depth detail
/// stays visible. With the default gain 9 and base 10 it maps [0, 1] onto itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastStretch {
    pub gain: f32,
    pub base: f32,
}

impl Default for ContrastStretch {
    fn default() -> Self {
        Self {
            gain: 9.0,
            base: 10.0,
        }
    }
}

impl ContrastStretch {
    pub fn apply(&self, n: f32) -> f32 {
        (1.0 + self.gain * n).ln() / self.base.ln()
    }
}

/// Minimum and maximum over all finite values, `(0, 0)` if there are none.
pub fn depth_range(values: &[f32]) -> (f32, f32) {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    if min > max { (0.0, 0.0) } else { (min, max) }
}

fn quantize(s: f32) -> u8 {
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Turn a `[1, H, W]` depth tensor into a `W x H` gray `Rgb8` image.
pub fn depth_to_gray(depth: &Tensor<f32>, stretch: ContrastStretch) -> Result<Image, InferError> {
    let size = output_size(&depth.shape)?;
    let (min, max) = depth_range(&depth.data);
    // the range of two finite f32 values can exceed f32::MAX
    let (min, max) = (min as f64, max as f64);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let luma: Vec<u8> = depth
        .data
        .iter()
        .map(|&v| quantize(stretch.apply(((v as f64 - min) / range) as f32)))
        .collect();
    Ok(Image::gray(size, &luma)?)
}

/// Decode a depth tensor and resize the result to `target`, the captured frame size.
pub fn postprocess(
    depth: &Tensor<f32>,
    target: Vec2<usize>,
    stretch: ContrastStretch,
) -> Result<Image, InferError> {
    let gray = depth_to_gray(depth, stretch)?;
    Ok(image::resize(&gray, target)?)
}
