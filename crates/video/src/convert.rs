use {
    crate::{RawFrame, VideoError},
    image::{Image, PixelFormat},
    serde::{Deserialize, Serialize},
};

/// How a planar frame becomes RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Conversion {
    /// Decode NV21 straight to RGB.
    #[default]
    Direct,
    /// Decode, then pass through a JPEG encode/decode at `quality`. Lossy.
    Jpeg { quality: u8 },
}

/// Reorder a planar frame into a single NV21 buffer: the Y plane, then V/U pairs.
pub fn to_nv21(frame: &RawFrame) -> Result<Image, VideoError> {
    frame.format.ensure_format(PixelFormat::Yu12)?;
    let size = frame.size;
    if size.x == 0 || size.y == 0 {
        return Err(VideoError::Conversion(format!("empty frame {size}")));
    }
    let chroma = size.half_rounded_up();
    frame.y.validate("Y", size)?;
    frame.u.validate("U", chroma)?;
    frame.v.validate("V", chroma)?;

    let mut nv21 = Vec::with_capacity(PixelFormat::Nv21.buffer_len(size).unwrap_or(0));
    for row in 0..size.y {
        let start = row * frame.y.row_stride;
        if frame.y.pixel_stride == 1 {
            nv21.extend_from_slice(&frame.y.data[start..start + size.x]);
        } else {
            nv21.extend((0..size.x).map(|col| frame.y.sample(col, row)));
        }
    }
    for row in 0..chroma.y {
        for col in 0..chroma.x {
            nv21.push(frame.v.sample(col, row));
            nv21.push(frame.u.sample(col, row));
        }
    }
    Ok(Image::new(size, nv21, PixelFormat::Nv21))
}

/// Convert a planar frame to an interleaved `Rgb8` image of the same size.
pub fn to_rgb(frame: &RawFrame, conversion: Conversion) -> Result<Image, VideoError> {
    let nv21 = to_nv21(frame)?;
    let rgb = image::nv21_to_rgb(nv21.size, &nv21.data)?;
    match conversion {
        Conversion::Direct => Ok(rgb),
        Conversion::Jpeg { quality } => {
            let jpeg = image::rgb_to_jpeg(&rgb, quality)?;
            let decoded = image::jpeg_to_rgb(&jpeg)?;
            if decoded.size != frame.size {
                return Err(VideoError::Conversion(format!(
                    "JPEG round trip changed size from {} to {}",
                    frame.size, decoded.size
                )));
            }
            Ok(decoded)
        }
    }
}
