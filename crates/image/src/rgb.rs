use {
    crate::{Image, ImageError, PixelFormat, pixelformat::yuv_to_rgb},
    base::Vec2,
};

fn check_len(format: PixelFormat, size: Vec2<usize>, data: &[u8]) -> Result<(), ImageError> {
    let expected = format.buffer_len(size).unwrap_or(0);
    if data.len() != expected {
        return Err(ImageError::Size {
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

// decode a 4:2:0 frame where `chroma(cx, cy)` yields the (u, v) pair of a 2x2 block
fn decode_420(
    size: Vec2<usize>,
    luma: &[u8],
    chroma: impl Fn(usize, usize) -> (u8, u8),
) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for row in 0..size.y {
        for col in 0..size.x {
            let (u, v) = chroma(col / 2, row / 2);
            rgb.extend_from_slice(&yuv_to_rgb(luma[row * size.x + col], u, v));
        }
    }
    rgb
}

/// Decode an NV21 buffer (Y plane, then interleaved V/U) into an `Rgb8` image.
pub fn nv21_to_rgb(size: Vec2<usize>, data: &[u8]) -> Result<Image, ImageError> {
    check_len(PixelFormat::Nv21, size, data)?;
    let (luma, vu) = data.split_at(size.area());
    let chroma_w = size.half_rounded_up().x;
    let rgb = decode_420(size, luma, |cx, cy| {
        let i = (cy * chroma_w + cx) * 2;
        (vu[i + 1], vu[i])
    });
    Ok(Image::new(size, rgb, PixelFormat::Rgb8))
}

/// Decode a YU12 buffer (Y plane, U plane, V plane) into an `Rgb8` image.
pub fn yu12_to_rgb(size: Vec2<usize>, data: &[u8]) -> Result<Image, ImageError> {
    check_len(PixelFormat::Yu12, size, data)?;
    let (luma, chroma) = data.split_at(size.area());
    let chroma_size = size.half_rounded_up();
    let (u_plane, v_plane) = chroma.split_at(chroma_size.area());
    let rgb = decode_420(size, luma, |cx, cy| {
        let i = cy * chroma_size.x + cx;
        (u_plane[i], v_plane[i])
    });
    Ok(Image::new(size, rgb, PixelFormat::Rgb8))
}

/// Decode a `Jpeg` image into an `Rgb8` image.
pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Jpeg)?;
    let decoded =
        crates_image::load_from_memory_with_format(&image.data, crates_image::ImageFormat::Jpeg)
            .map_err(|e| ImageError::Decode(format!("failed to decode JPEG: {}", e)))?
            .to_rgb8();
    let size = Vec2::new(decoded.width() as usize, decoded.height() as usize);
    Ok(Image::new(size, decoded.into_raw(), PixelFormat::Rgb8))
}

/// Convert any supported image to `Rgb8`.
pub fn to_rgb(image: &Image) -> Result<Image, ImageError> {
    match image.format {
        PixelFormat::Rgb8 => Image::rgb(image.size, image.data.clone()),
        PixelFormat::Nv21 => nv21_to_rgb(image.size, &image.data),
        PixelFormat::Yu12 => yu12_to_rgb(image.size, &image.data),
        PixelFormat::Jpeg => jpeg_to_rgb(image),
    }
}
