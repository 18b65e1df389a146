use {
    crate::{Image, ImageError, PixelFormat},
    base::Vec2,
    crates_image::{RgbImage, imageops::FilterType},
};

/// Resample an `Rgb8` image to `size` with a bilinear (triangle) filter.
pub fn resize(image: &Image, size: Vec2<usize>) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    if size.x == 0 || size.y == 0 {
        return Err(ImageError::Size {
            expected: 1,
            got: 0,
        });
    }
    if size == image.size {
        return Ok(image.clone());
    }
    let source = RgbImage::from_raw(
        image.size.x as u32,
        image.size.y as u32,
        image.data.clone(),
    )
    .ok_or(ImageError::Size {
        expected: image.size.area() * 3,
        got: image.data.len(),
    })?;
    let resized = crates_image::imageops::resize(
        &source,
        size.x as u32,
        size.y as u32,
        FilterType::Triangle,
    );
    Ok(Image::new(size, resized.into_raw(), PixelFormat::Rgb8))
}
