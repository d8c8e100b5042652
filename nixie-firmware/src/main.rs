//! Nixie Clock Controller Firmware
//!
//! RP2040 firmware driving a four-digit multiplexed Nixie display. The host
//! computer keeps wall-clock time and pushes digits and brightness over the
//! serial command link; this firmware owns everything timing-critical:
//! digit multiplexing, phase-delayed dimming, the seconds flasher, and the
//! high-voltage watchdog fail-safe.
//!
//! All functional behavior lives in three event-driven tasks (timer tick,
//! host byte received, light sample ready); the main task initializes the
//! peripherals once and then idles.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod shared;
mod tasks;

use crate::tasks::DisplayPins;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Nixie controller firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the host command link
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for host communication");

    // Setup ADC for the ambient light sensor (LDR on GPIO26 / ADC0)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let light_channel = Channel::new_pin(p.PIN_26, Pull::None);

    info!("ADC initialized");

    // Display output lines. BCD nibble feeds the 74141 decoder, the anode
    // select lines drive the per-tube switching transistors. Everything
    // starts low: anodes dark, high voltage off until the engine asserts it.
    let pins = DisplayPins {
        bcd: [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
        ],
        anodes: [
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
        ],
        hv_enable: Output::new(p.PIN_10, Level::Low),
        seconds_led: Output::new(p.PIN_25, Level::Low),
        heartbeat: Output::new(p.PIN_11, Level::Low),
    };

    // Spawn the three event handlers
    spawner.spawn(tasks::tick_task(pins)).unwrap();
    spawner.spawn(tasks::host_link_task(rx, tx)).unwrap();
    spawner.spawn(tasks::light_task(adc, light_channel)).unwrap();

    info!("All tasks spawned, firmware running");

    // Idle supervisor: the main task never touches shared state; all
    // functional behavior is event-driven in the spawned tasks.
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
