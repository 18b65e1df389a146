use {crate::ImageError, base::Vec2};

// fourcc codes
pub(crate) const FOURCC_RGB8: u32 = u32::from_le_bytes(*b"RGB8");
pub(crate) const FOURCC_NV21: u32 = u32::from_le_bytes(*b"NV21");
pub(crate) const FOURCC_YU12: u32 = u32::from_le_bytes(*b"YU12");
pub(crate) const FOURCC_MJPG: u32 = u32::from_le_bytes(*b"MJPG");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Interleaved 8-bit R, G, B.
    Rgb8,
    /// Full-resolution Y plane followed by interleaved V, U pairs at quarter resolution.
    Nv21,
    /// Y plane, then U plane, then V plane (4:2:0).
    Yu12,
    Jpeg,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Option<Self> {
        match fourcc {
            FOURCC_RGB8 => Some(PixelFormat::Rgb8),
            FOURCC_NV21 => Some(PixelFormat::Nv21),
            FOURCC_YU12 => Some(PixelFormat::Yu12),
            FOURCC_MJPG => Some(PixelFormat::Jpeg),
            _ => None,
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => FOURCC_RGB8,
            PixelFormat::Nv21 => FOURCC_NV21,
            PixelFormat::Yu12 => FOURCC_YU12,
            PixelFormat::Jpeg => FOURCC_MJPG,
        }
    }

    /// Exact buffer length for an image of `size`, `None` for compressed formats.
    pub fn buffer_len(&self, size: Vec2<usize>) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 => Some(size.area() * 3),
            PixelFormat::Nv21 | PixelFormat::Yu12 => {
                Some(size.area() + size.half_rounded_up().area() * 2)
            }
            PixelFormat::Jpeg => None,
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Format {
                expected,
                got: *self,
            });
        }
        Ok(())
    }
}

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    [r, g, b]
}
