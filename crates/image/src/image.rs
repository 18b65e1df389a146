use {
    crate::{ImageError, PixelFormat},
    base::Vec2,
};

/// A sized pixel buffer. `size.x` is the width, `size.y` the height.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    /// Wrap a buffer without checking its length.
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Interleaved RGB image. The buffer must hold exactly `width * height * 3` bytes.
    pub fn rgb(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.area() * 3;
        if data.len() != expected {
            return Err(ImageError::Size {
                expected,
                got: data.len(),
            });
        }
        Ok(Self::new(size, data, PixelFormat::Rgb8))
    }

    /// RGB image with each luminance value replicated into all three channels.
    pub fn gray(size: Vec2<usize>, luma: &[u8]) -> Result<Self, ImageError> {
        if luma.len() != size.area() {
            return Err(ImageError::Size {
                expected: size.area(),
                got: luma.len(),
            });
        }
        let data = luma.iter().flat_map(|&c| [c, c, c]).collect();
        Ok(Self::new(size, data, PixelFormat::Rgb8))
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// RGB triple at `(x, y)` of an `Rgb8` image.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.size.x + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
