use {inference::InferError, std::fmt, video::VideoError};

/// Why a frame left the pipeline without producing a depth image.
#[derive(Debug)]
pub enum FrameError {
    /// No engine; the frame is passed over.
    Disabled,
    Conversion(VideoError),
    Inference(InferError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Disabled => write!(f, "depth estimation disabled"),
            FrameError::Conversion(err) => write!(f, "conversion failed: {err}"),
            FrameError::Inference(err) => write!(f, "inference failed: {err}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<VideoError> for FrameError {
    fn from(err: VideoError) -> Self {
        FrameError::Conversion(err)
    }
}

impl From<InferError> for FrameError {
    fn from(err: InferError) -> Self {
        match err {
            InferError::Disabled => FrameError::Disabled,
            err => FrameError::Inference(err),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read config: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
