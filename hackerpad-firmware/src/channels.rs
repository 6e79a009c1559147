//! Byte pipes between the USB console task and the tick loop
//!
//! The tick loop only ever uses the non-blocking `try_*` side, so a slow
//! or absent host can never stall input processing.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;

/// Host to pad; large enough for a full `IMG` payload plus its header
pub const HOST_RX_SIZE: usize = 1024;

/// Pad to host; replies and diagnostic lines
pub const HOST_TX_SIZE: usize = 512;

/// Bytes received from the host
pub static HOST_RX: Pipe<CriticalSectionRawMutex, HOST_RX_SIZE> = Pipe::new();

/// Lines waiting to go to the host
pub static HOST_TX: Pipe<CriticalSectionRawMutex, HOST_TX_SIZE> = Pipe::new();
