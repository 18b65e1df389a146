use {crate::PixelFormat, std::fmt};

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Encode(String),
    Size { expected: usize, got: usize },
    Format { expected: PixelFormat, got: PixelFormat },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Size { expected, got } => {
                write!(f, "size error: expected {expected} bytes, got {got}")
            }
            ImageError::Format { expected, got } => {
                write!(f, "format error: expected {expected:?}, got {got:?}")
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}
