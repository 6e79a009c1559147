//! Diagnostic line sink

use core::fmt;

/// Line-oriented diagnostic output
///
/// One call is one line; the sink adds the line terminator. The firmware
/// sends these lines to the debug probe and to the USB console.
pub trait Diagnostics {
    /// Emit one formatted line
    fn line(&mut self, args: fmt::Arguments<'_>);
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn line(&mut self, _args: fmt::Arguments<'_>) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        (**self).line(args)
    }
}
