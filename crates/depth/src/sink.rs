use {image::Image, tokio::sync::watch};

/// A finished depth image with the sequence number of the frame it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthFrame {
    pub sequence: u64,
    pub image: Image,
}

/// Receives depth frames from the worker thread.
///
/// `deliver` must not block; a sink that cannot keep up should drop or
/// overwrite. A panic in `deliver` fails that frame only.
pub trait DepthSink: Send + 'static {
    fn deliver(&self, frame: DepthFrame);
}

// presentation keeps only the newest frame
impl DepthSink for watch::Sender<Option<DepthFrame>> {
    fn deliver(&self, frame: DepthFrame) {
        self.send_replace(Some(frame));
    }
}

impl DepthSink for tokio::sync::mpsc::UnboundedSender<DepthFrame> {
    fn deliver(&self, frame: DepthFrame) {
        if self.send(frame).is_err() {
            log::debug!("depth sink closed, frame dropped");
        }
    }
}

impl DepthSink for std::sync::mpsc::Sender<DepthFrame> {
    fn deliver(&self, frame: DepthFrame) {
        if self.send(frame).is_err() {
            log::debug!("depth sink closed, frame dropped");
        }
    }
}
