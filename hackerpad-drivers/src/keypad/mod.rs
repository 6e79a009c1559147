//! Keypad drivers

mod matrix;

pub use matrix::KeypadMatrix;
