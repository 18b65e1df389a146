use crate::{Image, ImageError, PixelFormat};

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack an `Rgb8` image into `0RGB` words, the layout framebuffer windows expect.
pub fn rgb_to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    Ok(image
        .data
        .chunks_exact(3)
        .map(|c| pack_u32(c[0], c[1], c[2]))
        .collect())
}

/// Blend `overlay` over `base` with `alpha` in [0, 1], both `Rgb8` of equal size, packed as `0RGB`.
pub fn blend_to_u32(base: &Image, overlay: &Image, alpha: f32) -> Result<Vec<u32>, ImageError> {
    base.format.ensure_format(PixelFormat::Rgb8)?;
    overlay.format.ensure_format(PixelFormat::Rgb8)?;
    if base.data.len() != overlay.data.len() {
        return Err(ImageError::Size {
            expected: base.data.len(),
            got: overlay.data.len(),
        });
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - alpha) + b as f32 * alpha).round() as u8;
    Ok(base
        .data
        .chunks_exact(3)
        .zip(overlay.data.chunks_exact(3))
        .map(|(a, b)| pack_u32(mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])))
        .collect())
}
