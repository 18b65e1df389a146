use {
    super::ContrastStretch,
    crate::InferError,
    base::Vec2,
    serde::{Deserialize, Serialize},
};

/// Model-specific constants of the depth path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthConfig {
    /// Input resolution used when the model does not declare a fixed one.
    pub input_width: usize,
    pub input_height: usize,
    /// Intra-op threads for the engine.
    pub threads: usize,
    /// Contrast stretch `ln(1 + gain * n) / ln(base)`.
    pub stretch_gain: f32,
    pub stretch_base: f32,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            input_width: 256,
            input_height: 256,
            threads: 4,
            stretch_gain: 9.0,
            stretch_base: 10.0,
        }
    }
}

impl DepthConfig {
    pub fn with_input_size(mut self, size: Vec2<usize>) -> Self {
        self.input_width = size.x;
        self.input_height = size.y;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_stretch(mut self, gain: f32, base: f32) -> Self {
        self.stretch_gain = gain;
        self.stretch_base = base;
        self
    }

    pub fn input_size(&self) -> Vec2<usize> {
        Vec2::new(self.input_width, self.input_height)
    }

    pub fn stretch(&self) -> ContrastStretch {
        ContrastStretch {
            gain: self.stretch_gain,
            base: self.stretch_base,
        }
    }

    pub fn validate(&self) -> Result<(), InferError> {
        if self.input_width == 0 || self.input_height == 0 {
            return Err(InferError::Config(format!(
                "input size {} must be non-zero",
                self.input_size()
            )));
        }
        if self.threads == 0 {
            return Err(InferError::Config("threads must be at least 1".to_string()));
        }
        // the stretch must stay monotonic
        if !self.stretch_gain.is_finite() || self.stretch_gain < 0.0 {
            return Err(InferError::Config(format!(
                "stretch gain {} must be finite and non-negative",
                self.stretch_gain
            )));
        }
        if !self.stretch_base.is_finite() || self.stretch_base <= 1.0 {
            return Err(InferError::Config(format!(
                "stretch base {} must be greater than 1",
                self.stretch_base
            )));
        }
        Ok(())
    }
}
