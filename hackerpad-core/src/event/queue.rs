//! Fixed-capacity circular queue

use super::Event;

/// Bounded FIFO ring buffer.
///
/// One slot is always left empty so that `head == tail` means empty and
/// `head + 1 == tail` (mod `N`) means full; at most `N - 1` items are stored.
/// Pushing into a full buffer fails and leaves it untouched. Nothing is ever
/// overwritten.
///
/// The buffer has no interior synchronisation. It is meant to be filled and
/// drained from the same thread of control. An interrupt-fed producer needs
/// a critical section around `push`/`pop` (or a lock-free SPSC split).
#[derive(Debug, Clone)]
pub struct RingBuffer<T: Copy, const N: usize> {
    slots: [Option<T>; N],
    /// Next slot to write
    head: usize,
    /// Next slot to read
    tail: usize,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    const MIN_CAPACITY: () = assert!(N >= 2, "ring buffer needs at least two slots");

    /// Create an empty buffer
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_CAPACITY;
        Self {
            slots: [None; N],
            head: 0,
            tail: 0,
        }
    }

    /// Append an item. Returns `false` if the buffer is full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.head] = Some(item);
        self.head = (self.head + 1) % N;
        true
    }

    /// Remove the oldest item
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.tail].take();
        self.tail = (self.tail + 1) % N;
        item
    }

    /// Oldest item without removing it
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.tail].as_ref()
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Check if the next push would fail
    pub fn is_full(&self) -> bool {
        (self.head + 1) % N == self.tail
    }

    /// Usable slots (`N - 1`)
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Drop all stored items
    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.head = 0;
        self.tail = 0;
    }

    /// Iterate from oldest to newest without consuming
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |i| self.slots[(self.tail + i) % N].as_ref())
    }

    #[cfg(test)]
    fn indices(&self) -> (usize, usize) {
        (self.head, self.tail)
    }
}

impl<T: Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue of pending input events.
///
/// A [`RingBuffer`] that refuses the [`Event::None`] sentinel.
#[derive(Debug, Clone, Default)]
pub struct EventQueue<const N: usize> {
    inner: RingBuffer<Event, N>,
}

impl<const N: usize> EventQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            inner: RingBuffer::new(),
        }
    }

    /// Enqueue an event. Returns `false` when the queue is full or the
    /// event is `Event::None`; the queue is unchanged in both cases.
    pub fn push(&mut self, event: Event) -> bool {
        if event.is_none() {
            return false;
        }
        self.inner.push(event)
    }

    /// Dequeue the oldest event
    pub fn pop(&mut self) -> Option<Event> {
        self.inner.pop()
    }

    /// Oldest event without removing it
    pub fn peek(&self) -> Option<&Event> {
        self.inner.peek()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no events are pending
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Check if the next push would be dropped
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Maximum number of pending events (`N - 1`)
    pub const fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Drop all pending events
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Pending events from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.inner.iter()
    }
}
