//! Timing and sizing constants

/// Debounce interval for the keypad and the encoder button
pub const DEBOUNCE_MS: u32 = 50;

/// Delay at the end of every tick
pub const TICK_INTERVAL_MS: u64 = 5;

/// Event queue slots (one is always kept free)
pub const EVENT_QUEUE_SIZE: usize = 32;

/// Events dispatched per tick at most
pub const MAX_DISPATCH_PER_TICK: usize = 4;

/// Host console bytes consumed per tick at most
pub const HOST_BYTES_PER_TICK: usize = 64;
