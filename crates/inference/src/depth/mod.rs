mod config;
mod estimator;
mod postprocess;
mod preprocess;
mod shape;

pub use config::DepthConfig;
pub use estimator::DepthEstimator;
pub use postprocess::{ContrastStretch, depth_range, depth_to_gray, postprocess};
pub use preprocess::preprocess;
pub use shape::{check_output_shape, output_size, resolve_input_size};
