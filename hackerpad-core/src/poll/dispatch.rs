//! Event dispatcher
//!
//! Turns each event into a display label and a diagnostic line, and applies
//! host commands that arrive on the console.

use core::fmt::Write;

use hackerpad_protocol::{CommandParser, ErrorCode, HostCommand, ProtocolError, Reply};
use heapless::String;

use super::EventHandler;
use crate::actions::{ActionError, KeyActions};
use crate::event::Event;
use crate::traits::{Diagnostics, DisplayError, TextDisplay};

/// Whether display writes are attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayStatus {
    /// Display initialised; writes go through
    Ready,
    /// Display missing or failed to initialise; writes are skipped
    Unavailable,
}

/// Default event handler of the firmware
pub struct Dispatcher<D, G> {
    display: D,
    diagnostics: G,
    status: DisplayStatus,
    actions: KeyActions,
    display_faults: u32,
}

impl<D: TextDisplay, G: Diagnostics> Dispatcher<D, G> {
    /// Create a dispatcher. The display stays unavailable until
    /// [`init_display`](Self::init_display) succeeds.
    pub fn new(display: D, diagnostics: G) -> Self {
        Self {
            display,
            diagnostics,
            status: DisplayStatus::Unavailable,
            actions: KeyActions::new(),
            display_faults: 0,
        }
    }

    /// Initialise the display. On error the dispatcher keeps running with
    /// display writes disabled; there is no retry.
    pub fn init_display(&mut self) -> Result<(), DisplayError> {
        match self.display.init() {
            Ok(()) => {
                self.status = DisplayStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.status = DisplayStatus::Unavailable;
                Err(e)
            }
        }
    }

    /// Current display status
    pub fn display_status(&self) -> DisplayStatus {
        self.status
    }

    /// Failed display writes since boot
    pub fn display_faults(&self) -> u32 {
        self.display_faults
    }

    /// Host-assigned key actions
    pub fn actions(&self) -> &KeyActions {
        &self.actions
    }

    /// The display driver
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The diagnostic sink
    pub fn diagnostics(&self) -> &G {
        &self.diagnostics
    }

    /// Feed buffered console bytes to `parser` and act on every complete
    /// command. Returns the number of replies sent.
    pub fn service_host(&mut self, parser: &mut CommandParser, bytes: &[u8]) -> usize {
        let mut replies = 0;
        for &byte in bytes {
            match parser.feed(byte) {
                Ok(Some(command)) => {
                    self.apply(command);
                    replies += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    self.reject(e);
                    replies += 1;
                }
            }
        }
        replies
    }

    /// Apply a host command and send the reply line
    pub fn apply(&mut self, command: HostCommand) -> Reply {
        let reply = match command {
            HostCommand::Map { key, text } => match self.actions.set(key, &text) {
                Ok(()) => Reply::MapOk(key),
                Err(ActionError::TextTooLong) => Reply::Error(ErrorCode::TextLength),
                // A 3x3 keymap never fills the table
                Err(ActionError::UnknownKey | ActionError::TableFull) => {
                    Reply::Error(ErrorCode::BadKey)
                }
            },
            HostCommand::Image(data) => match self.status {
                DisplayStatus::Unavailable => Reply::Error(ErrorCode::NoDisplay),
                DisplayStatus::Ready => match self.display.show_image(&data) {
                    Ok(()) => Reply::ImageOk(data.len()),
                    Err(DisplayError::BadImageSize) => Reply::Error(ErrorCode::BadLength),
                    Err(_) => {
                        self.display_faults = self.display_faults.saturating_add(1);
                        Reply::Error(ErrorCode::DisplayFault)
                    }
                },
            },
        };
        self.diagnostics.line(format_args!("{}", reply));
        reply
    }

    /// Send the error reply for a rejected line
    pub fn reject(&mut self, error: ProtocolError) -> Reply {
        let reply = Reply::from(error);
        self.diagnostics.line(format_args!("{}", reply));
        reply
    }

    fn show(&mut self, text: &str) {
        if self.status != DisplayStatus::Ready {
            return;
        }
        if self.display.update_display(text).is_err() {
            self.display_faults = self.display_faults.saturating_add(1);
        }
    }
}

impl<D: TextDisplay, G: Diagnostics> EventHandler for Dispatcher<D, G> {
    fn handle(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let mut label: String<12> = String::new();
                // "Key: " plus one char always fits
                let _ = write!(label, "Key: {}", key);
                self.show(&label);
                match self.actions.get(key) {
                    Some(action) => self
                        .diagnostics
                        .line(format_args!("Key event: {} -> {}", key, action)),
                    None => self.diagnostics.line(format_args!("Key event: {}", key)),
                }
            }
            Event::EncLeft => {
                self.show("Enc: Left");
                self.diagnostics.line(format_args!("Encoder left"));
            }
            Event::EncRight => {
                self.show("Enc: Right");
                self.diagnostics.line(format_args!("Encoder right"));
            }
            Event::EncBtn => {
                self.show("Enc: Btn");
                self.diagnostics.line(format_args!("Encoder button"));
            }
            Event::None => {}
        }
    }
}
