use {
    crate::ConfigError,
    inference::DepthConfig,
    serde::{Deserialize, Serialize},
    std::path::{Path, PathBuf},
    video::Conversion,
};

const DEFAULT_MODEL_PATH: &str = "depth_anything_v2.onnx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub model_path: PathBuf,
    pub conversion: Conversion,
    pub depth: DepthConfig,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            conversion: Conversion::default(),
            depth: DepthConfig::default(),
        }
    }
}

impl StreamConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        log::debug!("loaded stream config from {:?}", path.as_ref());
        Ok(config)
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = conversion;
        self
    }
}
