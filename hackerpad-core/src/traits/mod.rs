//! Hardware abstraction traits
//!
//! These traits define the interface between the polling loop and the
//! concrete peripheral drivers. Every operation is synchronous and returns
//! promptly; none of them waits on the hardware.

pub mod diagnostics;
pub mod display;
pub mod input;

pub use diagnostics::{Diagnostics, NoDiagnostics};
pub use display::{DisplayError, TextDisplay};
pub use input::{ButtonDebouncer, DriverError, EncoderReader, KeypadScanner};
