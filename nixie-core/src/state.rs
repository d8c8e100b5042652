//! Shared state block
//!
//! The one rendezvous point between the three event handlers. Every field
//! is an independently-updated atomic scalar with exactly one writer:
//!
//! | field              | writer                         | readers          |
//! |--------------------|--------------------------------|------------------|
//! | `digits[0..3]`     | command handler                | timing engine    |
//! | `brightness`       | command handler                | timing engine    |
//! | `dimming`          | command handler (derived)      | timing engine    |
//! | `watchdog_seconds` | timing engine + command handler | timing engine   |
//! | `light_level`      | light sampler                  | command handler  |
//!
//! The watchdog counter is the one exception to single-writer ownership:
//! the timing engine increments it and the command handler resets it, so
//! both operations go through atomic read-modify-writes. `portable-atomic`
//! provides real CAS on hosts that have it and a short critical section on
//! Cortex-M0+ targets that do not.
//!
//! Cross-field consistency is neither guaranteed nor required: a digit
//! written mid-cycle is displayed old or new for at most one tick, never
//! torn.

use portable_atomic::{AtomicU8, Ordering};

use crate::timing::{MAX_DIMMING, NUM_DIGITS, WDOG_EXPIRE_SECS};
use nixie_protocol::ClockRegisters;

/// Derive the dimming interval from a brightness level
///
/// Larger interval means a longer delay before the digit lights within its
/// slot, hence dimmer. Levels above 10 are not rejected; they simply clamp
/// to the zero interval (maximum brightness).
pub fn dimming_interval_for(brightness: u8) -> u8 {
    let interval = -2 * brightness as i32 + 20;
    interval.clamp(0, MAX_DIMMING as i32) as u8
}

/// Process-wide clock state, created once and live until power-off
pub struct ClockState {
    /// Time digits, index 0 = minutes .. 3 = tens-of-hours; >9 blanks
    digits: [AtomicU8; NUM_DIGITS],
    /// Brightness level, 0 turns the high voltage off
    brightness: AtomicU8,
    /// Dimming interval in ticks, rederived on every brightness write
    dimming: AtomicU8,
    /// Seconds since the last host ping, saturating at expiry
    watchdog_seconds: AtomicU8,
    /// Most recent ambient light sample
    light_level: AtomicU8,
}

impl ClockState {
    /// Power-on state: brightness 1, not 0, so high voltage is not cut at
    /// boot, with the dimming interval preloaded to match.
    pub const fn new() -> Self {
        Self {
            digits: [
                AtomicU8::new(0),
                AtomicU8::new(0),
                AtomicU8::new(0),
                AtomicU8::new(0),
            ],
            brightness: AtomicU8::new(1),
            dimming: AtomicU8::new(MAX_DIMMING),
            watchdog_seconds: AtomicU8::new(0),
            light_level: AtomicU8::new(0),
        }
    }

    pub fn digit(&self, index: usize) -> u8 {
        self.digits[index].load(Ordering::Relaxed)
    }

    pub fn set_digit(&self, index: usize, value: u8) {
        self.digits[index].store(value, Ordering::Relaxed);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }

    /// Store a brightness level and rederive the dimming interval
    pub fn set_brightness(&self, level: u8) {
        self.brightness.store(level, Ordering::Relaxed);
        self.dimming
            .store(dimming_interval_for(level), Ordering::Relaxed);
    }

    pub fn dimming_interval(&self) -> u8 {
        self.dimming.load(Ordering::Relaxed)
    }

    pub fn watchdog_seconds(&self) -> u8 {
        self.watchdog_seconds.load(Ordering::Relaxed)
    }

    pub fn watchdog_expired(&self) -> bool {
        self.watchdog_seconds() >= WDOG_EXPIRE_SECS
    }

    /// Reset the watchdog; called by the command handler on a host ping
    pub fn feed_watchdog(&self) {
        self.watchdog_seconds.store(0, Ordering::Relaxed);
    }

    /// Advance the watchdog by one second, saturating at expiry
    ///
    /// Called by the timing engine at each one-second boundary. The CAS
    /// loop keeps the increment atomic with respect to a concurrent reset
    /// from the command handler; a lost update here would defeat the
    /// high-voltage fail-safe.
    pub fn tick_watchdog_second(&self) {
        let _ = self
            .watchdog_seconds
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |secs| {
                (secs < WDOG_EXPIRE_SECS).then_some(secs + 1)
            });
    }

    /// Publish a completed 10-bit light conversion, keeping the top 8 bits
    ///
    /// Most recent sample wins; there is no filtering or rate limiting.
    pub fn publish_light_sample(&self, raw: u16) {
        self.light_level.store((raw >> 2) as u8, Ordering::Relaxed);
    }

    pub fn light_level(&self) -> u8 {
        self.light_level.load(Ordering::Relaxed)
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockRegisters for ClockState {
    fn digit(&self, index: usize) -> u8 {
        ClockState::digit(self, index)
    }

    fn set_digit(&self, index: usize, value: u8) {
        ClockState::set_digit(self, index, value);
    }

    fn set_brightness(&self, level: u8) {
        ClockState::set_brightness(self, level);
    }

    fn light_level(&self) -> u8 {
        ClockState::light_level(self)
    }

    fn feed_watchdog(&self) {
        ClockState::feed_watchdog(self);
    }
}
