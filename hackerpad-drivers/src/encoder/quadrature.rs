//! Quadrature rotary encoder
//!
//! Gray-code decoding with a transition table. The 2-bit state is
//! `(A << 1) | B`; clockwise rotation walks `00 -> 01 -> 11 -> 10 -> 00`.

use hackerpad_core::traits::{DriverError, EncoderReader};
use hackerpad_hal::InputPin;

/// Position change for each `(previous << 2) | current` state pair.
///
/// Pairs where both phases flipped at once cannot be decoded and count as
/// no movement.
const TRANSITIONS: [i8; 16] = [
    0, 1, -1, 0, //
    -1, 0, 0, 1, //
    1, 0, 0, -1, //
    0, -1, 1, 0, //
];

/// Polled quadrature encoder
///
/// The position advances one step per phase change (four per full
/// quadrature cycle) and wraps at the `i32` range.
pub struct QuadratureEncoder<A, B> {
    a: A,
    b: B,
    state: u8,
    position: i32,
}

impl<A: InputPin, B: InputPin> QuadratureEncoder<A, B> {
    /// Create an encoder at position 0, seeded with the current pin state
    pub fn new(a: A, b: B) -> Self {
        let state = phase_state(&a, &b);
        Self {
            a,
            b,
            state,
            position: 0,
        }
    }

    /// Sample the pins and apply any transition
    pub fn poll(&mut self) -> i32 {
        let next = phase_state(&self.a, &self.b);
        let delta = TRANSITIONS[usize::from((self.state << 2) | next)];
        self.state = next;
        self.position = self.position.wrapping_add(i32::from(delta));
        self.position
    }

    /// Position without sampling
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Overwrite the position counter
    pub fn set_position(&mut self, position: i32) {
        self.position = position;
    }
}

fn phase_state<A: InputPin, B: InputPin>(a: &A, b: &B) -> u8 {
    (u8::from(a.is_high()) << 1) | u8::from(b.is_high())
}

impl<A: InputPin, B: InputPin> EncoderReader for QuadratureEncoder<A, B> {
    fn read(&mut self) -> Result<i32, DriverError> {
        Ok(self.poll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use std::rc::Rc;

    struct Phase(Rc<Cell<bool>>);

    impl InputPin for Phase {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    struct Knob {
        a: Rc<Cell<bool>>,
        b: Rc<Cell<bool>>,
    }

    impl Knob {
        fn set(&self, state: u8) {
            self.a.set(state & 0b10 != 0);
            self.b.set(state & 0b01 != 0);
        }
    }

    fn encoder(initial: u8) -> (QuadratureEncoder<Phase, Phase>, Knob) {
        let knob = Knob {
            a: Rc::new(Cell::new(false)),
            b: Rc::new(Cell::new(false)),
        };
        knob.set(initial);
        let enc = QuadratureEncoder::new(Phase(knob.a.clone()), Phase(knob.b.clone()));
        (enc, knob)
    }

    const CW: [u8; 4] = [0b01, 0b11, 0b10, 0b00];
    const CCW: [u8; 4] = [0b10, 0b11, 0b01, 0b00];

    #[test]
    fn test_no_motion() {
        let (mut enc, _knob) = encoder(0b11);
        assert_eq!(enc.read(), Ok(0));
        assert_eq!(enc.read(), Ok(0));
    }

    #[test]
    fn test_clockwise_cycle() {
        let (mut enc, knob) = encoder(0b00);
        for (i, s) in CW.iter().enumerate() {
            knob.set(*s);
            assert_eq!(enc.read(), Ok(i as i32 + 1));
        }
        assert_eq!(enc.position(), 4);
    }

    #[test]
    fn test_counter_clockwise_cycle() {
        let (mut enc, knob) = encoder(0b00);
        for s in CCW {
            knob.set(s);
            enc.read().unwrap();
        }
        assert_eq!(enc.position(), -4);
    }

    #[test]
    fn test_invalid_jump_ignored() {
        let (mut enc, knob) = encoder(0b00);
        knob.set(0b11);
        assert_eq!(enc.read(), Ok(0));
        knob.set(0b00);
        assert_eq!(enc.read(), Ok(0));

        // Decoding resumes from the new state
        knob.set(0b01);
        assert_eq!(enc.read(), Ok(1));
    }

    #[test]
    fn test_back_and_forth() {
        let (mut enc, knob) = encoder(0b00);
        knob.set(0b01);
        enc.read().unwrap();
        knob.set(0b00);
        assert_eq!(enc.read(), Ok(0));
    }

    #[test]
    fn test_wraps() {
        let (mut enc, knob) = encoder(0b00);
        enc.set_position(i32::MAX);
        knob.set(0b01);
        assert_eq!(enc.read(), Ok(i32::MIN));
        knob.set(0b00);
        assert_eq!(enc.read(), Ok(i32::MAX));
    }
}
