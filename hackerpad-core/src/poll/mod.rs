//! Poll-dispatch loop
//!
//! ```text
//!  keypad ──scan──┐
//!  encoder ─read──┼──> EventQueue ──(≤ cap per tick)──> EventHandler
//!  button ──fell──┘                                     (Dispatcher)
//! ```
//!
//! [`Poller::tick`] runs the sampling steps and one bounded dispatch batch.
//! The caller sleeps between ticks.

mod dispatch;
mod poller;

pub use dispatch::{Dispatcher, DisplayStatus};
pub use poller::{Poller, TickReport};

use crate::event::Event;

/// Consumer of dequeued events
pub trait EventHandler {
    /// Handle one event. Must not fail; errors are absorbed by the handler.
    fn handle(&mut self, event: Event);
}

impl<H: EventHandler + ?Sized> EventHandler for &mut H {
    fn handle(&mut self, event: Event) {
        (**self).handle(event)
    }
}
