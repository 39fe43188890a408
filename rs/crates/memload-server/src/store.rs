//! The shared buffer queue.
//!
//! Every generated [`Buffer`] is moved in here and kept until the queue is
//! cleared, so retained memory grows with each workload request. One mutex
//! serializes all access; the critical section is only the push or the swap.

use parking_lot::Mutex;

use crate::buffer::Buffer;

#[derive(Debug, Default)]
pub struct BufferStore {
    buffers: Mutex<Vec<Buffer>>,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `buffer` and add it to the end of the queue.
    pub fn append(&self, buffer: Buffer) {
        self.buffers.lock().push(buffer);
    }

    /// Drop every retained buffer. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        let drained = std::mem::take(&mut *self.buffers.lock());
        // Freed here, after the guard is gone.
        drop(drained);
    }

    pub fn len(&self) -> usize {
        self.buffers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.lock().is_empty()
    }

    /// Total bytes held across all buffers.
    pub fn retained_bytes(&self) -> usize {
        self.buffers.lock().iter().map(Buffer::len).sum()
    }
}
