//! Board-agnostic control core for the Nixie clock controller
//!
//! This crate contains all timing and display logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared state block coordinating the three event handlers
//! - Timing engine (digit multiplex, dimming, status flasher, watchdog)
//! - Output line model with per-signal named fields
//! - Tick-derived timing constants
//!
//! The crate is deliberately allocation-free and lock-free: every shared
//! field is an independently-updated atomic scalar with a single writer.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod engine;
pub mod lines;
pub mod state;
pub mod timing;

pub use engine::TimingEngine;
pub use lines::LineState;
pub use state::ClockState;
