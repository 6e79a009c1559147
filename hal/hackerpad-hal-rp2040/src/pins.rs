//! Seeed XIAO RP2040 pad map
//!
//! The XIAO silkscreen labels pads `D0`..`D10`; these are the RP2040 GPIO
//! numbers behind them.

/// Pad D0 (A0)
pub const D0: u8 = 26;
/// Pad D1 (A1)
pub const D1: u8 = 27;
/// Pad D2 (A2)
pub const D2: u8 = 28;
/// Pad D3 (A3)
pub const D3: u8 = 29;
/// Pad D4 (I2C1 SDA)
pub const D4: u8 = 6;
/// Pad D5 (I2C1 SCL)
pub const D5: u8 = 7;
/// Pad D6 (UART0 TX)
pub const D6: u8 = 0;
/// Pad D7 (UART0 RX)
pub const D7: u8 = 1;
/// Pad D8 (SPI0 SCK)
pub const D8: u8 = 2;
/// Pad D9 (SPI0 MISO)
pub const D9: u8 = 4;
/// Pad D10 (SPI0 MOSI)
pub const D10: u8 = 3;

/// All pads in silkscreen order
pub const PADS: [u8; 11] = [D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10];

/// Look up the GPIO number behind pad `Dn`
pub const fn pad_gpio(n: usize) -> Option<u8> {
    if n < PADS.len() {
        Some(PADS[n])
    } else {
        None
    }
}

/// Take a pad by its silkscreen name from the peripherals
///
/// Usage:
/// ```ignore
/// let row0 = xiao_pad!(p, D2); // Takes p.PIN_28 as Peri<AnyPin>
/// ```
#[macro_export]
macro_rules! xiao_pad {
    ($p:expr, D0) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_26) };
    ($p:expr, D1) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_27) };
    ($p:expr, D2) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_28) };
    ($p:expr, D3) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_29) };
    ($p:expr, D4) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_6) };
    ($p:expr, D5) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_7) };
    ($p:expr, D6) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_0) };
    ($p:expr, D7) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_1) };
    ($p:expr, D8) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_2) };
    ($p:expr, D9) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_4) };
    ($p:expr, D10) => { embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_3) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_lookup() {
        assert_eq!(pad_gpio(0), Some(26));
        assert_eq!(pad_gpio(4), Some(6));
        assert_eq!(pad_gpio(10), Some(3));
        assert_eq!(pad_gpio(11), None);
    }

    #[test]
    fn test_pads_are_distinct() {
        for (i, a) in PADS.iter().enumerate() {
            for b in &PADS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
