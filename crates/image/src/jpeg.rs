use {
    crate::{Image, ImageError, PixelFormat},
    crates_image::ImageEncoder,
};

/// Encode an `Rgb8` image as JPEG. `quality` ranges 1-100.
pub fn rgb_to_jpeg(image: &Image, quality: u8) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(
            &image.data,
            image.size.x as u32,
            image.size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(Image::new(image.size, buffer, PixelFormat::Jpeg))
}
