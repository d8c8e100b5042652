//! Output line model
//!
//! One named field per logical output signal, replacing the reference
//! hardware's bit-packed port registers. The timing engine returns a full
//! [`LineState`] snapshot every tick and the firmware applies it to the
//! ports in a single pass, so downstream hardware never observes a
//! partially-updated tick.

/// Mask selecting the four BCD decoder lines within the digit port
pub const BCD_MASK: u8 = 0x0f;

/// Complete output state for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineState {
    /// High-voltage supply enable; the fail-safe drops this line
    pub hv_enable: bool,
    /// Seconds status LED
    pub seconds_led: bool,
    /// Timing test point, toggled every tick
    pub heartbeat: bool,
    /// BCD code latched on the decoder inputs; stays latched through blanking
    pub bcd: u8,
    /// One-hot anode select, bit n lights digit position n; 0 = all dark
    pub anodes: u8,
}

impl LineState {
    /// All outputs in their power-on state
    pub const fn new() -> Self {
        Self {
            hv_enable: false,
            seconds_led: false,
            heartbeat: false,
            bcd: 0,
            anodes: 0,
        }
    }

    /// Whether digit position `index` is currently driven
    pub fn anode_lit(&self, index: usize) -> bool {
        self.anodes & (1 << index) != 0
    }

    /// Latch a digit: BCD code on the decoder, one anode line asserted
    pub(crate) fn latch_digit(&mut self, index: usize, value: u8) {
        self.bcd = value & BCD_MASK;
        self.anodes = 1 << index;
    }

    /// Drop all anode lines, keeping the BCD latch as-is
    pub(crate) fn blank_anodes(&mut self) {
        self.anodes = 0;
    }

    /// Pack the digit-drive signals into one port byte: BCD low nibble,
    /// anode select high nibble.
    pub fn digit_port(&self) -> u8 {
        (self.anodes << 4) | (self.bcd & BCD_MASK)
    }
}

impl Default for LineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_masks_value_to_nibble() {
        let mut lines = LineState::new();
        lines.latch_digit(2, 0xf7);
        assert_eq!(lines.bcd, 7);
        assert!(lines.anode_lit(2));
        assert!(!lines.anode_lit(0));
    }

    #[test]
    fn test_blanking_keeps_bcd_latched() {
        let mut lines = LineState::new();
        lines.latch_digit(1, 3);
        lines.blank_anodes();
        assert_eq!(lines.bcd, 3);
        assert_eq!(lines.anodes, 0);
    }

    #[test]
    fn test_digit_port_packing() {
        let mut lines = LineState::new();
        lines.latch_digit(3, 9);
        assert_eq!(lines.digit_port(), 0b1000_1001);
    }
}
