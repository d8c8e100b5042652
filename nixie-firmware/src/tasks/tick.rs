//! Timing engine tick task
//!
//! Runs the timing engine once per hardware tick and applies the resulting
//! line snapshot to the GPIO ports. The engine itself is pure integer
//! arithmetic; everything here must finish well inside the tick period.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use nixie_core::timing::TICK_PERIOD_US;
use nixie_core::{LineState, TimingEngine};

use crate::shared::CLOCK;

/// The display output lines, one GPIO per logical signal
pub struct DisplayPins {
    /// BCD code to the 74141 decoder, bit 0 first
    pub bcd: [Output<'static>; 4],
    /// One-hot anode select, position 0 (minutes) first
    pub anodes: [Output<'static>; 4],
    /// High-voltage supply enable
    pub hv_enable: Output<'static>,
    /// Seconds status LED
    pub seconds_led: Output<'static>,
    /// Timing test point
    pub heartbeat: Output<'static>,
}

impl DisplayPins {
    /// Apply one tick's snapshot to the ports in a single pass
    fn apply(&mut self, lines: LineState) {
        for (bit, pin) in self.bcd.iter_mut().enumerate() {
            set(pin, lines.bcd & (1 << bit) != 0);
        }
        for (index, pin) in self.anodes.iter_mut().enumerate() {
            set(pin, lines.anode_lit(index));
        }
        set(&mut self.hv_enable, lines.hv_enable);
        set(&mut self.seconds_led, lines.seconds_led);
        set(&mut self.heartbeat, lines.heartbeat);
    }
}

fn set(pin: &mut Output<'static>, level: bool) {
    if level {
        pin.set_high();
    } else {
        pin.set_low();
    }
}

/// Tick task - advances the timing engine at the fixed tick period
#[embassy_executor::task]
pub async fn tick_task(mut pins: DisplayPins) {
    info!("Tick task started ({}us period)", TICK_PERIOD_US);

    let mut engine = TimingEngine::new();
    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US as u64));

    loop {
        ticker.next().await;
        let lines = engine.tick(&CLOCK);
        pins.apply(lines);
    }
}
