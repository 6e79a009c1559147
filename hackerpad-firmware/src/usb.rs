//! USB CDC-ACM console
//!
//! The keypad and encoder sit on the XIAO's UART pads, so the host link is
//! the RP2040's native USB serial port. Two tasks: one runs the device
//! stack, one shuttles bytes between the CDC endpoints and the pipes in
//! [`crate::channels`].

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use hackerpad_core::config::USB_IDENTITY;

use crate::channels::{HOST_RX, HOST_TX};

/// Full-speed bulk packet size
const MAX_PACKET: usize = 64;

pub type UsbDriver = Driver<'static, USB>;

static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static CDC_STATE: StaticCell<State<'static>> = StaticCell::new();

/// Build the USB device with one CDC-ACM interface
pub fn init(
    driver: UsbDriver,
) -> (UsbDevice<'static, UsbDriver>, CdcAcmClass<'static, UsbDriver>) {
    let mut config = Config::new(USB_IDENTITY.vid, USB_IDENTITY.pid);
    config.manufacturer = Some(USB_IDENTITY.manufacturer);
    config.product = Some(USB_IDENTITY.product);
    config.serial_number = Some(USB_IDENTITY.serial);
    config.max_power = 100;
    config.max_packet_size_0 = MAX_PACKET as u8;

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESC.init([0; 256]),
        BOS_DESC.init([0; 256]),
        &mut [],
        CONTROL_BUF.init([0; 64]),
    );
    let class = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), MAX_PACKET as u16);
    (builder.build(), class)
}

/// Run the USB device stack
#[embassy_executor::task]
pub async fn usb_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    device.run().await
}

/// Move bytes between the CDC endpoints and the host pipes
#[embassy_executor::task]
pub async fn cdc_task(class: CdcAcmClass<'static, UsbDriver>) -> ! {
    let (mut sender, mut receiver) = class.split();

    loop {
        receiver.wait_connection().await;
        info!("USB console connected");

        let rx = async {
            let mut buf = [0u8; MAX_PACKET];
            while let Ok(n) = receiver.read_packet(&mut buf).await {
                HOST_RX.write_all(&buf[..n]).await;
            }
        };

        let tx = async {
            let mut buf = [0u8; MAX_PACKET];
            loop {
                let n = HOST_TX.read(&mut buf).await;
                if sender.write_packet(&buf[..n]).await.is_err() {
                    break;
                }
                // A full packet needs a zero-length packet to end the transfer
                if n == MAX_PACKET && sender.write_packet(&[]).await.is_err() {
                    break;
                }
            }
        };

        select(rx, tx).await;
        info!("USB console disconnected");
    }
}
