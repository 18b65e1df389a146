use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Conversion(String),
    Decode(image::ImageError),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Conversion(msg) => write!(f, "conversion error: {msg}"),
            VideoError::Decode(err) => write!(f, "decode error: {err}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Decode(err)
    }
}
