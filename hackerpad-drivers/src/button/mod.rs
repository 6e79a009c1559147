//! Push-button drivers

mod bounce;

pub use bounce::Bounce;
