//! Camera frame contract for the depth pipeline.
//!
//! A [`RawFrame`] is a planar 4:2:0 capture buffer lent by the capture
//! source. It is released back to the source exactly once, when the frame
//! is dropped. [`convert`] turns it into an interleaved RGB [`image::Image`].

pub mod convert;
pub mod error;
pub mod rawframe;

pub use convert::{Conversion, to_nv21, to_rgb};
pub use error::VideoError;
pub use rawframe::{Plane, RawFrame};
