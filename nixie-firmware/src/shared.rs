//! Process-wide shared state
//!
//! The single rendezvous point between the tick, host link, and light
//! sampler tasks. Field ownership (which task writes what) is documented on
//! [`ClockState`] itself; everything is atomic scalars, so tasks never
//! block each other.

use nixie_core::ClockState;

/// The clock's shared state block, live from power-on to power-off
pub static CLOCK: ClockState = ClockState::new();
