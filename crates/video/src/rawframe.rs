use {
    crate::VideoError,
    base::Vec2,
    image::PixelFormat,
    std::fmt,
};

/// One plane of a capture buffer.
///
/// Sample `(x, y)` lives at `y * row_stride + x * pixel_stride`. Fully planar
/// sources use a pixel stride of 1; semi-planar sources expose their
/// interleaved chroma as two planes with a pixel stride of 2.
#[derive(Clone, PartialEq, Eq)]
pub struct Plane {
    pub data: Vec<u8>,
    pub row_stride: usize,
    pub pixel_stride: usize,
}

impl fmt::Debug for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plane")
            .field("len", &self.data.len())
            .field("row_stride", &self.row_stride)
            .field("pixel_stride", &self.pixel_stride)
            .finish()
    }
}

impl Plane {
    pub fn new(data: Vec<u8>, row_stride: usize, pixel_stride: usize) -> Self {
        Self {
            data,
            row_stride,
            pixel_stride,
        }
    }

    /// Tightly packed plane, `width` samples per row.
    pub fn packed(data: Vec<u8>, width: usize) -> Self {
        Self::new(data, width, 1)
    }

    /// Check that a `size` grid of samples can be read from this plane.
    pub(crate) fn validate(&self, name: &str, size: Vec2<usize>) -> Result<(), VideoError> {
        if self.pixel_stride == 0 {
            return Err(VideoError::Conversion(format!("{name} plane has zero pixel stride")));
        }
        let overflow =
            || VideoError::Conversion(format!("{name} plane strides overflow for {size} samples"));
        let row_span = (size.x - 1)
            .checked_mul(self.pixel_stride)
            .and_then(|span| span.checked_add(1))
            .ok_or_else(overflow)?;
        if self.row_stride < row_span {
            return Err(VideoError::Conversion(format!(
                "{name} plane row stride {} is shorter than a row ({row_span} bytes)",
                self.row_stride
            )));
        }
        let required = (size.y - 1)
            .checked_mul(self.row_stride)
            .and_then(|offset| offset.checked_add(row_span))
            .ok_or_else(overflow)?;
        if self.data.len() < required {
            return Err(VideoError::Conversion(format!(
                "{name} plane holds {} bytes, {size} samples need {required}",
                self.data.len()
            )));
        }
        Ok(())
    }

    // only valid after `validate` accepted the grid containing (x, y)
    pub(crate) fn sample(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.row_stride + x * self.pixel_stride]
    }
}

type Release = Box<dyn FnOnce() + Send>;

/// A planar 4:2:0 camera frame.
///
/// The optional release hook hands the underlying buffer back to the capture
/// source. It runs exactly once, when the frame is dropped, whichever way
/// its handling ends.
pub struct RawFrame {
    pub sequence: u64,
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub y: Plane,
    pub u: Plane,
    pub v: Plane,
    release: Option<Release>,
}

impl fmt::Debug for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawFrame")
            .field("sequence", &self.sequence)
            .field("size", &self.size)
            .field("format", &self.format)
            .field("y", &self.y)
            .field("u", &self.u)
            .field("v", &self.v)
            .field("release", &self.release.is_some())
            .finish()
    }
}

impl RawFrame {
    pub fn new(sequence: u64, size: Vec2<usize>, y: Plane, u: Plane, v: Plane) -> Self {
        Self {
            sequence,
            size,
            format: PixelFormat::Yu12,
            y,
            u,
            v,
            release: None,
        }
    }

    /// Split a contiguous YU12 buffer into packed planes.
    pub fn from_yu12(sequence: u64, size: Vec2<usize>, data: &[u8]) -> Result<Self, VideoError> {
        let expected = PixelFormat::Yu12.buffer_len(size).unwrap_or(0);
        if data.len() != expected {
            return Err(VideoError::Conversion(format!(
                "YU12 buffer for {size} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        let chroma = size.half_rounded_up();
        let (y, rest) = data.split_at(size.area());
        let (u, v) = rest.split_at(chroma.area());
        Ok(Self::new(
            sequence,
            size,
            Plane::packed(y.to_vec(), size.x),
            Plane::packed(u.to_vec(), chroma.x),
            Plane::packed(v.to_vec(), chroma.x),
        ))
    }

    /// Attach the hook that returns this buffer to its capture source.
    pub fn with_release(mut self, release: impl FnOnce() + Send + 'static) -> Self {
        self.release = Some(Box::new(release));
        self
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }
}

impl Drop for RawFrame {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
