use {
    crate::{DepthPipeline, DepthSink, FrameError, Mailbox, Stage, StatsSnapshot, StreamStats},
    inference::{DepthConfig, DepthEstimator},
    std::{
        panic::{self, AssertUnwindSafe},
        sync::Arc,
    },
    tokio::task::{JoinHandle, spawn_blocking},
    video::RawFrame,
};

/// Latest-only depth stream over one blocking worker.
///
/// [`push`](Self::push) never waits. If the worker is busy, the pushed frame
/// waits in a single slot and replaces whatever was waiting there, so of
/// all frames arriving during one pass only the last is processed. With the
/// engine disabled, frames are released on push and nothing is delivered.
pub struct DepthStream {
    mailbox: Arc<Mailbox<RawFrame>>,
    stats: Arc<StreamStats>,
    enabled: bool,
    join_handle: Option<JoinHandle<DepthPipeline>>,
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

fn run_worker(
    mut pipeline: DepthPipeline,
    mailbox: Arc<Mailbox<RawFrame>>,
    sink: impl DepthSink,
) -> DepthPipeline {
    let stats = pipeline.stats();
    log::info!("depth worker: started");
    while let Some(frame) = mailbox.take_blocking() {
        let sequence = frame.sequence;
        stats.frame_processed();
        // the frame is moved in, so it is dropped and released even on panic
        let pass = panic::catch_unwind(AssertUnwindSafe(|| {
            let depth = pipeline.process(frame)?;
            sink.deliver(depth);
            Ok::<(), FrameError>(())
        }));
        match pass {
            Ok(Ok(())) => {
                stats.set_stage(Stage::Delivered);
                stats.frame_delivered();
            }
            Ok(Err(FrameError::Disabled)) => {
                stats.frame_failed();
            }
            Ok(Err(err)) => {
                log::debug!("depth worker: frame {} dropped: {}", sequence, err);
                stats.frame_failed();
            }
            Err(payload) => {
                log::error!(
                    "depth worker: frame {} panicked: {}",
                    sequence,
                    panic_message(payload.as_ref())
                );
                stats.frame_failed();
            }
        }
        stats.set_stage(Stage::Idle);
    }
    log::info!("depth worker: stopped");
    pipeline
}

impl DepthStream {
    /// Spawn the worker. Must be called from within a tokio runtime.
    pub fn start(pipeline: DepthPipeline, sink: impl DepthSink) -> Self {
        let mailbox = Arc::new(Mailbox::new());
        let stats = pipeline.stats();
        let enabled = pipeline.is_enabled();
        if !enabled {
            log::warn!("depth stream: engine unavailable, passing frames through");
        }
        let join_handle = spawn_blocking({
            let mailbox = Arc::clone(&mailbox);
            move || run_worker(pipeline, mailbox, sink)
        });
        Self {
            mailbox,
            stats,
            enabled,
            join_handle: Some(join_handle),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hand a captured frame to the worker without blocking.
    pub fn push(&self, frame: RawFrame) {
        self.stats.frame_received();
        if !self.enabled {
            return;
        }
        match self.mailbox.post(frame) {
            Ok(Some(_superseded)) => self.stats.frame_superseded(),
            Ok(None) => {}
            Err(_closed) => log::debug!("depth stream: closed, frame dropped"),
        }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn stage(&self) -> Stage {
        self.stats.stage()
    }

    /// Stop after the in-flight frame, drop any waiting frame and return the estimator.
    pub async fn shutdown(mut self) -> DepthEstimator {
        if self.mailbox.close().is_some() {
            log::debug!("depth stream: pending frame dropped on shutdown");
        }
        let join_handle = self.join_handle.take();
        match join_handle {
            Some(handle) => match handle.await {
                Ok(pipeline) => pipeline.into_estimator(),
                Err(err) => {
                    log::error!("depth worker failed: {}", err);
                    DepthEstimator::disabled("depth worker failed", &DepthConfig::default())
                }
            },
            None => {
                DepthEstimator::disabled("depth stream already stopped", &DepthConfig::default())
            }
        }
    }
}

impl Drop for DepthStream {
    fn drop(&mut self) {
        // the worker exits after its current frame; the pipeline is dropped with it
        self.mailbox.close();
    }
}
