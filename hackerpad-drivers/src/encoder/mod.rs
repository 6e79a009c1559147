//! Rotary encoder drivers

mod quadrature;

pub use quadrature::QuadratureEncoder;
