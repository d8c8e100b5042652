//! Command codes for the host protocol
//!
//! | Code | Direction | Data byte            | Queued response        |
//! |------|-----------|----------------------|------------------------|
//! | 1    | write     | minutes digit        | current minutes digit  |
//! | 2    | write     | tens-of-minutes      | current value          |
//! | 3    | write     | hours digit          | current value          |
//! | 4    | write     | tens-of-hours        | current value          |
//! | 5    | write     | brightness 0 to 10   | dummy                  |
//! | 6    | read      | dummy                | light sensor 0 to 255  |
//! | 7    | read      | dummy                | version, two nibbles   |
//! | 85   | ping      | dummy                | 170                    |

pub const CMD_SET_MINUTES: u8 = 1;
pub const CMD_SET_MINUTES_TENS: u8 = 2;
pub const CMD_SET_HOURS: u8 = 3;
pub const CMD_SET_HOURS_TENS: u8 = 4;
pub const CMD_SET_BRIGHTNESS: u8 = 5;
pub const CMD_GET_LIGHT: u8 = 6;
pub const CMD_GET_VERSION: u8 = 7;
pub const CMD_WATCHDOG_PING: u8 = 85;

/// Firmware/protocol version, major and minor nibbles (1.0)
pub const VERSION: u8 = 0x10;

/// Byte shifted out when no meaningful response is queued
pub const DUMMY_BYTE: u8 = 0xff;

/// Acknowledgement returned for the watchdog ping
pub const ACK_BYTE: u8 = 170;

/// A recognized host command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set one of the four time digits (index 0 = minutes .. 3 = tens-of-hours)
    SetDigit(usize),
    /// Set the brightness level
    SetBrightness,
    /// Read the latest ambient light sample
    GetLight,
    /// Read the firmware version identifier
    GetVersion,
    /// Watchdog keep-alive ping
    WatchdogPing,
}

impl Command {
    /// Decode a command byte; unrecognized codes yield `None` (no-op)
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_SET_MINUTES => Some(Command::SetDigit(0)),
            CMD_SET_MINUTES_TENS => Some(Command::SetDigit(1)),
            CMD_SET_HOURS => Some(Command::SetDigit(2)),
            CMD_SET_HOURS_TENS => Some(Command::SetDigit(3)),
            CMD_SET_BRIGHTNESS => Some(Command::SetBrightness),
            CMD_GET_LIGHT => Some(Command::GetLight),
            CMD_GET_VERSION => Some(Command::GetVersion),
            CMD_WATCHDOG_PING => Some(Command::WatchdogPing),
            _ => None,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_commands_decode() {
        assert_eq!(Command::from_byte(1), Some(Command::SetDigit(0)));
        assert_eq!(Command::from_byte(2), Some(Command::SetDigit(1)));
        assert_eq!(Command::from_byte(3), Some(Command::SetDigit(2)));
        assert_eq!(Command::from_byte(4), Some(Command::SetDigit(3)));
    }

    #[test]
    fn test_unknown_codes_decode_to_none() {
        assert_eq!(Command::from_byte(0), None);
        assert_eq!(Command::from_byte(8), None);
        assert_eq!(Command::from_byte(84), None);
        assert_eq!(Command::from_byte(0xff), None);
    }

    #[test]
    fn test_every_table_code_decodes() {
        for code in [
            CMD_SET_MINUTES,
            CMD_SET_MINUTES_TENS,
            CMD_SET_HOURS,
            CMD_SET_HOURS_TENS,
            CMD_SET_BRIGHTNESS,
            CMD_GET_LIGHT,
            CMD_GET_VERSION,
            CMD_WATCHDOG_PING,
        ] {
            assert!(Command::from_byte(code).is_some());
        }
    }
}
