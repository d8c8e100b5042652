//! Interrupt-driven timing engine
//!
//! One [`tick`](TimingEngine::tick) per hardware timer event. Each tick
//! drives the high-voltage gate, the status flasher, the watchdog
//! escalation, and the digit multiplex/dimming sequencer, then returns the
//! complete output snapshot for that tick.
//!
//! Every path is integer arithmetic on current state — no blocking, no
//! allocation, no error returns. The only degraded mode is watchdog expiry,
//! which drops the high voltage and switches the flasher to the fast rate
//! until the host pings again.

use crate::lines::LineState;
use crate::state::ClockState;
use crate::timing::{
    BLANKING_TICKS, DIGIT_TIME_SLOT, FAST_FLASH_HALF_PERIOD, NUM_DIGITS, SLOW_FLASH_HALF_PERIOD,
    TICKS_PER_SECOND,
};

/// Largest value the BCD decoder can display; anything above blanks the slot
const MAX_BCD_DIGIT: u8 = 9;

/// The per-tick sequencer
///
/// Owns the multiplex cursor and flasher counter; no other handler touches
/// them. Shared fields are read from [`ClockState`] each tick, so a digit
/// or brightness written mid-cycle takes effect within one tick.
pub struct TimingEngine {
    /// Tick counter within the current simulated second
    flash_counter: u32,
    /// Tick counter within the current digit time slot
    slot_counter: u32,
    /// Digit position currently being multiplexed, cycles 0..3
    digit_index: usize,
    /// Latched output lines carried between ticks
    lines: LineState,
}

impl TimingEngine {
    pub const fn new() -> Self {
        Self {
            flash_counter: 0,
            slot_counter: 0,
            digit_index: 0,
            lines: LineState::new(),
        }
    }

    /// Digit position the sequencer is currently on
    pub fn digit_index(&self) -> usize {
        self.digit_index
    }

    /// Advance one tick and return the output snapshot to drive the ports
    pub fn tick(&mut self, state: &ClockState) -> LineState {
        let expired = state.watchdog_expired();

        // High-voltage gate: loss of host communication or explicit zero
        // brightness always removes voltage from the tubes.
        self.lines.hv_enable = !expired && state.brightness() != 0;

        // Status flasher, fast rate while the watchdog is expired
        let half_period = if expired {
            FAST_FLASH_HALF_PERIOD
        } else {
            SLOW_FLASH_HALF_PERIOD
        };

        self.flash_counter += 1;
        if self.flash_counter % half_period == 0 {
            self.lines.seconds_led = !self.lines.seconds_led;
        }

        // One-second boundary: escalate the watchdog
        if self.flash_counter % TICKS_PER_SECOND == 0 {
            self.flash_counter = 0;
            state.tick_watchdog_second();
        }

        // Digit multiplex and dimming sequencer. The anode is dropped only
        // at the slot boundary, so a digit activated after the dimming
        // delay stays lit for DIGIT_TIME_SLOT - BLANKING - dimming ticks.
        self.slot_counter += 1;
        if self.slot_counter == DIGIT_TIME_SLOT {
            // End of slot: blank the anodes, keep the BCD latch, advance
            self.lines.blank_anodes();
            self.slot_counter = 0;
            self.digit_index += 1;
            if self.digit_index >= NUM_DIGITS {
                self.digit_index = 0;
            }
        } else if self.slot_counter == BLANKING_TICKS + state.dimming_interval() as u32 {
            let value = state.digit(self.digit_index);
            // Values above 9 suppress activation: leading-zero blanking
            if value <= MAX_BCD_DIGIT {
                self.lines.latch_digit(self.digit_index, value);
            }
        }

        // Timing test point
        self.lines.heartbeat = !self.lines.heartbeat;

        self.lines
    }
}

impl Default for TimingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{MAX_DIMMING, WDOG_EXPIRE_SECS};

    fn run_ticks(engine: &mut TimingEngine, state: &ClockState, n: u32) -> LineState {
        let mut last = LineState::new();
        for _ in 0..n {
            last = engine.tick(state);
        }
        last
    }

    #[test]
    fn test_multiplex_visits_digits_in_order() {
        let state = ClockState::new();
        let mut engine = TimingEngine::new();

        let mut visited = [0usize; 12];
        for slot in &mut visited {
            *slot = engine.digit_index();
            run_ticks(&mut engine, &state, DIGIT_TIME_SLOT);
        }
        assert_eq!(visited, [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_full_cycle_is_four_slots() {
        let state = ClockState::new();
        let mut engine = TimingEngine::new();

        // 100 ticks = 20ms at the reference period
        run_ticks(&mut engine, &state, NUM_DIGITS as u32 * DIGIT_TIME_SLOT);
        assert_eq!(engine.digit_index(), 0);
    }

    #[test]
    fn test_lit_duration_tracks_dimming_interval() {
        let state = ClockState::new();
        for brightness in [1u8, 5, 10] {
            state.set_brightness(brightness);
            let dimming = state.dimming_interval() as u32;
            let mut engine = TimingEngine::new();

            let mut lit = 0;
            for _ in 0..DIGIT_TIME_SLOT {
                if engine.tick(&state).anode_lit(0) {
                    lit += 1;
                }
            }
            assert_eq!(lit, DIGIT_TIME_SLOT - BLANKING_TICKS - dimming);
        }
    }

    #[test]
    fn test_activation_happens_exactly_after_the_dimming_delay() {
        let state = ClockState::new();
        state.set_brightness(5); // dimming interval 10
        let dimming = state.dimming_interval() as u32;
        let mut engine = TimingEngine::new();

        for tick in 1..=DIGIT_TIME_SLOT {
            let lines = engine.tick(&state);
            let expect_lit = tick >= BLANKING_TICKS + dimming && tick < DIGIT_TIME_SLOT;
            assert_eq!(lines.anode_lit(0), expect_lit, "tick {} in slot", tick);
        }
    }

    #[test]
    fn test_blanked_digit_is_never_lit() {
        let state = ClockState::new();
        state.set_digit(3, 10); // leading-zero suppression
        state.set_brightness(10);
        let mut engine = TimingEngine::new();

        for _ in 0..2 * NUM_DIGITS as u32 * DIGIT_TIME_SLOT {
            assert!(!engine.tick(&state).anode_lit(3));
        }
    }

    #[test]
    fn test_digit_value_latched_on_bcd_lines() {
        let state = ClockState::new();
        state.set_digit(0, 7);
        state.set_brightness(10);
        let mut engine = TimingEngine::new();

        // First slot, first activation tick
        let lines = run_ticks(&mut engine, &state, BLANKING_TICKS);
        assert!(lines.anode_lit(0));
        assert_eq!(lines.bcd, 7);
    }

    #[test]
    fn test_zero_brightness_forces_hv_off() {
        let state = ClockState::new();
        state.set_brightness(0);
        let mut engine = TimingEngine::new();
        assert!(!engine.tick(&state).hv_enable);

        state.set_brightness(1);
        assert!(engine.tick(&state).hv_enable);
    }

    #[test]
    fn test_watchdog_expiry_cuts_hv_within_one_tick() {
        let state = ClockState::new();
        let mut engine = TimingEngine::new();

        // Run up to the final one-second boundary before expiry
        let ticks_to_expiry = WDOG_EXPIRE_SECS as u32 * TICKS_PER_SECOND;
        run_ticks(&mut engine, &state, ticks_to_expiry);
        assert!(state.watchdog_expired());

        // The very next tick observes the expiry and drops the line
        assert!(!engine.tick(&state).hv_enable);
    }

    #[test]
    fn test_ping_restores_hv_and_slow_flash() {
        let state = ClockState::new();
        let mut engine = TimingEngine::new();

        run_ticks(&mut engine, &state, WDOG_EXPIRE_SECS as u32 * TICKS_PER_SECOND);
        engine.tick(&state);
        assert!(state.watchdog_expired());

        state.feed_watchdog();
        assert!(engine.tick(&state).hv_enable);
    }

    #[test]
    fn test_flash_rate_normal_and_degraded() {
        let state = ClockState::new();
        let mut engine = TimingEngine::new();

        // Normal: two LED toggles per simulated second
        let mut toggles = 0;
        let mut led = false;
        for _ in 0..TICKS_PER_SECOND {
            let lines = engine.tick(&state);
            if lines.seconds_led != led {
                toggles += 1;
                led = lines.seconds_led;
            }
        }
        assert_eq!(toggles, 2);

        // Expire the watchdog, then count again at the fast rate
        while !state.watchdog_expired() {
            engine.tick(&state);
        }
        let mut toggles = 0;
        for _ in 0..TICKS_PER_SECOND {
            let lines = engine.tick(&state);
            if lines.seconds_led != led {
                toggles += 1;
                led = lines.seconds_led;
            }
        }
        assert_eq!(toggles, (TICKS_PER_SECOND / FAST_FLASH_HALF_PERIOD) as i32);
    }

    #[test]
    fn test_heartbeat_toggles_every_tick() {
        let state = ClockState::new();
        let mut engine = TimingEngine::new();
        let first = engine.tick(&state).heartbeat;
        let second = engine.tick(&state).heartbeat;
        assert_ne!(first, second);
    }

    #[test]
    fn test_minimum_brightness_uses_maximum_dimming() {
        let state = ClockState::new();
        assert_eq!(state.dimming_interval(), MAX_DIMMING);
        let mut engine = TimingEngine::new();

        let mut lit = 0;
        for _ in 0..DIGIT_TIME_SLOT {
            if engine.tick(&state).anode_lit(0) {
                lit += 1;
            }
        }
        assert_eq!(lit, DIGIT_TIME_SLOT - BLANKING_TICKS - MAX_DIMMING as u32);
    }
}
