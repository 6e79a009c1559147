//! Hackerpad - Macro Pad Firmware
//!
//! Main firmware binary for the Seeed XIAO RP2040 macro pad: a 3x3 keypad,
//! a rotary encoder with push-button and a 128x32 OLED.
//!
//! Everything input-related runs in one cooperative loop: sample the
//! keypad, the encoder and the button, dispatch a bounded batch of events,
//! answer the host, sleep 5 ms. The USB console runs in its own tasks and
//! only exchanges bytes with the loop through pipes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::{Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use hackerpad_core::config::{
    self, DEBOUNCE_MS, EVENT_QUEUE_SIZE, HOST_BYTES_PER_TICK, KEYMAP, PANEL, TICK_INTERVAL_MS,
};
use hackerpad_core::{Dispatcher, Poller};
use hackerpad_display::Ssd1306;
use hackerpad_drivers::{Bounce, KeypadMatrix, QuadratureEncoder};
use hackerpad_hal_rp2040::gpio::{PullUpInput, PushPullOutput};
use hackerpad_hal_rp2040::i2c::BlockingI2c;
use hackerpad_hal_rp2040::{pins, xiao_pad};
use hackerpad_protocol::CommandParser;

use crate::channels::HOST_RX;
use crate::console::Console;

mod channels;
mod console;
mod usb;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

// The wiring in hackerpad-core must name the same GPIOs as the pad map
const _: () = {
    assert!(config::KEYPAD_ROW_PINS[0].pin == pins::D2);
    assert!(config::KEYPAD_ROW_PINS[1].pin == pins::D3);
    assert!(config::KEYPAD_ROW_PINS[2].pin == pins::D6);
    assert!(config::KEYPAD_COL_PINS[0].pin == pins::D0);
    assert!(config::KEYPAD_COL_PINS[1].pin == pins::D1);
    assert!(config::KEYPAD_COL_PINS[2].pin == pins::D10);
    assert!(config::ENCODER_A.pin == pins::D7);
    assert!(config::ENCODER_B.pin == pins::D8);
    assert!(config::ENCODER_BTN.pin == pins::D9);
    assert!(config::OLED_SDA.pin == pins::D4);
    assert!(config::OLED_SCL.pin == pins::D5);
};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hackerpad firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Keypad: rows read, columns driven
    let rows = [
        PullUpInput::new(xiao_pad!(p, D2)),
        PullUpInput::new(xiao_pad!(p, D3)),
        PullUpInput::new(xiao_pad!(p, D6)),
    ];
    let cols = [
        PushPullOutput::idle_high(xiao_pad!(p, D0)),
        PushPullOutput::idle_high(xiao_pad!(p, D1)),
        PushPullOutput::idle_high(xiao_pad!(p, D10)),
    ];
    let keypad = KeypadMatrix::new(rows, cols, KEYMAP, DEBOUNCE_MS);
    info!("Keypad ready ({} ms debounce)", DEBOUNCE_MS);

    // OLED on I2C1 (D4 = GPIO6 SDA, D5 = GPIO7 SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = PANEL.i2c_frequency;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c_config);
    let oled = Ssd1306::new(BlockingI2c::new(bus));

    let mut dispatcher = Dispatcher::new(oled, Console::new());
    match dispatcher.init_display() {
        Ok(()) => info!(
            "Display ready ({}x{} @ {=u8:#x})",
            PANEL.width, PANEL.height, PANEL.i2c_address
        ),
        Err(e) => warn!("Display init failed: {}, continuing without display", e),
    }

    let button = Bounce::new(PullUpInput::new(xiao_pad!(p, D9)), DEBOUNCE_MS);
    let encoder = QuadratureEncoder::new(
        PullUpInput::new(xiao_pad!(p, D7)),
        PullUpInput::new(xiao_pad!(p, D8)),
    );

    let mut poller: Poller<_, _, _, EVENT_QUEUE_SIZE> =
        match Poller::new(keypad, encoder, button) {
            Ok(poller) => poller,
            Err(e) => defmt::panic!("Encoder read failed: {}", e),
        };
    info!("Encoder at {}", poller.last_encoder_position());

    // Host console
    let (device, class) = usb::init(Driver::new(p.USB, Irqs));
    spawner.spawn(usb::usb_task(device)).unwrap();
    spawner.spawn(usb::cdc_task(class)).unwrap();
    info!("USB console up");

    let mut parser = CommandParser::new();
    let mut host_buf = [0u8; HOST_BYTES_PER_TICK];
    let mut console_drops = 0;

    info!("Entering main loop");
    loop {
        let now_ms = Instant::now().as_millis() as u32;

        let report = poller.tick(now_ms, &mut dispatcher);
        if report.has_fault() {
            warn!("Tick fault: {}", report);
        } else if !report.is_idle() {
            trace!("Tick: {}", report);
        }
        if report.dropped > 0 {
            warn!("Event queue full, dropped {} event(s)", report.dropped);
        }

        if let Ok(n) = HOST_RX.try_read(&mut host_buf) {
            dispatcher.service_host(&mut parser, &host_buf[..n]);
        }

        let drops = dispatcher.diagnostics().dropped();
        if drops != console_drops {
            debug!("Console backlog, {} line(s) not sent", drops.wrapping_sub(console_drops));
            console_drops = drops;
        }

        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}
