//! Tick-derived timing constants
//!
//! The timing engine runs once per hardware tick. The tick period is the
//! Nixie tube's recommended blanking period for multiplexed operation, and
//! every interval below is expressed as a tick count derived from it, so
//! changing [`TICK_PERIOD_US`] rescales the whole table consistently.

/// Hardware tick period in microseconds
pub const TICK_PERIOD_US: u32 = 200;

/// Ticks per simulated second
pub const TICKS_PER_SECOND: u32 = 1_000_000 / TICK_PERIOD_US;

/// Status LED half-period for the normal one-second flash
pub const SLOW_FLASH_HALF_PERIOD: u32 = TICKS_PER_SECOND / 2;

/// Status LED half-period while the watchdog is expired
pub const FAST_FLASH_HALF_PERIOD: u32 = TICKS_PER_SECOND / 8;

/// Dead time between anode switches, prevents cross-illumination
pub const BLANKING_TICKS: u32 = 1;

/// Nominal digit on-time within one multiplex slot
pub const DIGIT_ON_TICKS: u32 = 24;

/// Full multiplex slot: on-time plus one blanking unit
///
/// Four slots make one 20 ms multiplex cycle at the reference period.
pub const DIGIT_TIME_SLOT: u32 = DIGIT_ON_TICKS + BLANKING_TICKS;

/// Upper bound on the dimming interval (must stay below [`DIGIT_ON_TICKS`])
pub const MAX_DIMMING: u8 = 18;

/// Seconds without a host ping before the watchdog trips
pub const WDOG_EXPIRE_SECS: u8 = 5;

/// Number of multiplexed digit positions
pub const NUM_DIGITS: usize = 4;
