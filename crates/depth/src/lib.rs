//! Streaming depth overlay.
//!
//! Capture pushes [`RawFrame`](video::RawFrame)s into a [`DepthStream`]. One
//! worker takes the latest frame, runs it through the [`DepthPipeline`] and
//! hands the result to a [`DepthSink`]. Frames that arrive while the worker
//! is busy replace each other; only the most recent one is processed.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod mailbox;
pub use mailbox::*;

mod pipeline;
pub use pipeline::*;

mod sink;
pub use sink::*;

mod stats;
pub use stats::*;

mod stream;
pub use stream::*;
