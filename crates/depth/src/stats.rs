use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

/// Where the frame slot currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Stage {
    Idle,
    Converting,
    Encoding,
    Inferring,
    Decoding,
    Delivered,
}

impl Stage {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Stage::Converting,
            2 => Stage::Encoding,
            3 => Stage::Inferring,
            4 => Stage::Decoding,
            5 => Stage::Delivered,
            _ => Stage::Idle,
        }
    }
}

/// Frame counters shared between the capture side and the worker.
#[derive(Debug, Default)]
pub struct StreamStats {
    received: AtomicU64,
    superseded: AtomicU64,
    processed: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
    stage: AtomicU8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Frames pushed by capture.
    pub received: u64,
    /// Frames replaced in the mailbox before the worker took them.
    pub superseded: u64,
    /// Frames that entered the pipeline.
    pub processed: u64,
    pub delivered: u64,
    /// Frames that entered the pipeline and were dropped on the way.
    pub failed: u64,
    pub stage: Stage,
}

impl StreamStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn frame_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn frame_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn frame_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn frame_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn frame_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn set_stage(&self, stage: Stage) {
        self.stage.store(stage as u8, Ordering::Relaxed);
    }

    pub fn stage(&self) -> Stage {
        Stage::from_u8(self.stage.load(Ordering::Relaxed))
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            received: self.received.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            processed: self.processed.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            stage: self.stage(),
        }
    }
}
