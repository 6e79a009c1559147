//! Input events
//!
//! Every sampled transition becomes one [`Event`]. Events are queued by
//! value and consumed in order by the dispatcher.

mod queue;

pub use queue::{EventQueue, RingBuffer};

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// No event. Never stored in the queue.
    #[default]
    None,
    /// Keypad key pressed
    Key(char),
    /// Encoder turned counter-clockwise
    EncLeft,
    /// Encoder turned clockwise
    EncRight,
    /// Encoder button pressed
    EncBtn,
}

impl Event {
    /// Check if this is the `None` sentinel
    pub fn is_none(&self) -> bool {
        matches!(self, Event::None)
    }

    /// Direction event for an encoder position change.
    ///
    /// Returns `None` when the position did not move. Only the sign of the
    /// change matters; a jump of several detents is still one event.
    pub fn from_encoder_delta(previous: i32, current: i32) -> Option<Self> {
        match current.cmp(&previous) {
            core::cmp::Ordering::Greater => Some(Event::EncRight),
            core::cmp::Ordering::Less => Some(Event::EncLeft),
            core::cmp::Ordering::Equal => None,
        }
    }
}
