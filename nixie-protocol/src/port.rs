//! Byte-exchange state machine for the host command port
//!
//! Models the slave side of the synchronous link: each received byte
//! produces exactly one byte to load into the output shift register, which
//! the master collects during the *following* exchange.

use crate::commands::{Command, ACK_BYTE, DUMMY_BYTE, VERSION};

/// Register file the command port operates on
///
/// Implemented by the controller's shared state block. All methods take
/// `&self` — the state block uses interior-mutable atomic cells because it
/// is shared with the timing engine.
pub trait ClockRegisters {
    /// Current value of a time digit, index 0 = minutes .. 3 = tens-of-hours
    fn digit(&self, index: usize) -> u8;
    /// Store a time digit; values above 9 blank the position
    fn set_digit(&self, index: usize, value: u8);
    /// Store the brightness level and rederive the dimming interval
    fn set_brightness(&self, level: u8);
    /// Latest ambient light sample
    fn light_level(&self) -> u8;
    /// Reset the communication watchdog
    fn feed_watchdog(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// Next received byte is a command byte
    AwaitingCommand,
    /// Next received byte is the data/dummy byte of the current command
    AwaitingData,
}

/// The two-exchange command state machine
///
/// Strict alternation between the command and data phases. A byte received
/// in the command phase always starts a new transaction, so a malformed or
/// interrupted transaction self-resynchronizes on the next command byte.
#[derive(Debug, Clone)]
pub struct CommandPort {
    phase: Phase,
    command: Option<Command>,
    response: u8,
}

impl Default for CommandPort {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPort {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingCommand,
            command: None,
            response: DUMMY_BYTE,
        }
    }

    /// Byte currently loaded in the output register
    ///
    /// This is what the hardware shifts out to the master during the next
    /// exchange, queued by the previous call to [`on_byte`](Self::on_byte).
    pub fn queued(&self) -> u8 {
        self.response
    }

    /// Process one received byte and queue the response for the next exchange
    ///
    /// Returns the newly queued byte. Must not block; every path is a total
    /// function of the received byte and the register file.
    pub fn on_byte<R: ClockRegisters>(&mut self, rx: u8, regs: &R) -> u8 {
        match self.phase {
            Phase::AwaitingCommand => {
                // Whatever was in progress is abandoned; this byte selects
                // the new command and its exchange-0 response.
                self.command = Command::from_byte(rx);
                self.response = match self.command {
                    Some(Command::SetDigit(index)) => regs.digit(index),
                    Some(Command::SetBrightness) => DUMMY_BYTE,
                    Some(Command::GetLight) => regs.light_level(),
                    Some(Command::GetVersion) => VERSION,
                    Some(Command::WatchdogPing) => {
                        regs.feed_watchdog();
                        ACK_BYTE
                    }
                    None => DUMMY_BYTE,
                };
                self.phase = Phase::AwaitingData;
            }
            Phase::AwaitingData => {
                match self.command {
                    Some(Command::SetDigit(index)) => regs.set_digit(index, rx),
                    Some(Command::SetBrightness) => regs.set_brightness(rx),
                    // Read-type commands ignore the data byte entirely
                    Some(Command::GetLight)
                    | Some(Command::GetVersion)
                    | Some(Command::WatchdogPing)
                    | None => {}
                }
                self.response = DUMMY_BYTE;
                self.phase = Phase::AwaitingCommand;
            }
        }
        self.response
    }
}
