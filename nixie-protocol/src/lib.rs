//! Host Command Protocol
//!
//! This crate defines the SPI-based protocol between the host computer
//! (which keeps wall-clock time) and the Nixie clock controller (which owns
//! all timing-critical display work). The protocol is designed for
//! simplicity, low latency, and robustness against a misaligned host.
//!
//! # Protocol Overview
//!
//! Every transaction is exactly two byte exchanges on a half-duplex,
//! master-initiated link:
//! ```text
//! ┌───────────────┬──────────────────────┐
//! │ exchange 0    │ exchange 1           │
//! │ command byte  │ data byte (or dummy) │
//! └───────────────┴──────────────────────┘
//! ```
//!
//! Because the link is synchronous, the byte shifted out during an exchange
//! is whatever the controller queued during the *previous* exchange. Read
//! responses are therefore loaded while the command byte is still being
//! processed and collected by the host one exchange later; the byte the
//! host receives alongside a command byte is stale and must be ignored.
//!
//! The controller never initiates traffic. Unrecognized commands change no
//! state and are silently ignored.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod commands;
pub mod port;

pub use commands::{Command, ACK_BYTE, DUMMY_BYTE, VERSION};
pub use port::{ClockRegisters, CommandPort};
