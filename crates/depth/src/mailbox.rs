use std::sync::{Condvar, Mutex, MutexGuard};

struct Slot<T> {
    item: Option<T>,
    closed: bool,
}

/// Single-slot handoff that keeps only the latest item.
///
/// Any number of producers may post; one consumer takes. Posting over an
/// untaken item hands the older item back to the poster.
pub struct Mailbox<T> {
    slot: Mutex<Slot<T>>,
    ready: Condvar,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                item: None,
                closed: false,
            }),
            ready: Condvar::new(),
        }
    }

    // a panicking holder cannot leave the slot half-written
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store `item`, returning the item it replaced. A closed mailbox returns `Err(item)`.
    pub fn post(&self, item: T) -> Result<Option<T>, T> {
        let mut slot = self.lock();
        if slot.closed {
            return Err(item);
        }
        let previous = slot.item.replace(item);
        drop(slot);
        self.ready.notify_one();
        Ok(previous)
    }

    /// Take the pending item without waiting.
    pub fn try_take(&self) -> Option<T> {
        self.lock().item.take()
    }

    /// Wait for an item. `None` once the mailbox is closed.
    pub fn take_blocking(&self) -> Option<T> {
        let mut slot = self.lock();
        loop {
            if slot.closed {
                return None;
            }
            if let Some(item) = slot.item.take() {
                return Some(item);
            }
            slot = self.ready.wait(slot).unwrap_or_else(|e| e.into_inner());
        }
    }

    /// Refuse further posts and wake the consumer. Returns the untaken item, if any.
    pub fn close(&self) -> Option<T> {
        let mut slot = self.lock();
        slot.closed = true;
        let pending = slot.item.take();
        drop(slot);
        self.ready.notify_all();
        pending
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::Arc, std::thread};

    #[test]
    fn test_post_replaces_pending() {
        let mailbox = Mailbox::new();
        assert_eq!(mailbox.post(1), Ok(None));
        assert_eq!(mailbox.post(2), Ok(Some(1)));
        assert_eq!(mailbox.post(3), Ok(Some(2)));
        assert_eq!(mailbox.try_take(), Some(3));
        assert_eq!(mailbox.try_take(), None);
    }

    #[test]
    fn test_close_returns_pending_and_rejects_posts() {
        let mailbox = Mailbox::new();
        mailbox.post("a").unwrap();
        assert_eq!(mailbox.close(), Some("a"));
        assert_eq!(mailbox.post("b"), Err("b"));
        assert_eq!(mailbox.take_blocking(), None);
        assert!(mailbox.is_closed());
    }

    #[test]
    fn test_take_blocking_wakes_on_post_and_close() {
        let mailbox = Arc::new(Mailbox::new());
        let consumer = thread::spawn({
            let mailbox = Arc::clone(&mailbox);
            move || {
                let mut taken = Vec::new();
                while let Some(item) = mailbox.take_blocking() {
                    taken.push(item);
                }
                taken
            }
        });
        mailbox.post(7).unwrap();
        // wait for the consumer before closing so 7 is not discarded
        while mailbox.lock().item.is_some() {
            thread::yield_now();
        }
        mailbox.close();
        assert_eq!(consumer.join().unwrap(), vec![7]);
    }
}
