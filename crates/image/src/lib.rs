//! Pixel buffers for the depth pipeline.
//!
//! An [`Image`] is a sized byte buffer tagged with its [`PixelFormat`].
//! Camera formats (NV21, YU12) decode to interleaved `Rgb8`, which is what
//! the rest of the pipeline consumes.

mod error;
pub use error::*;

mod image;
pub use image::*;

mod jpeg;
pub use jpeg::*;

mod pixelformat;
pub use pixelformat::*;

mod resize;
pub use resize::*;

mod rgb;
pub use rgb::*;

mod u32;
pub use u32::*;
