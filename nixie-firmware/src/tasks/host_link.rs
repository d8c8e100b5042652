//! Host command link task
//!
//! Processes the host's two-byte command transactions one byte at a time.
//! The reply sent for each received byte is the response the command port
//! queued on the *previous* byte, preserving the synchronous-exchange
//! contract: read responses are collected one exchange after the command
//! that selected them, and the byte paired with a command byte is stale.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use nixie_protocol::CommandPort;

use crate::shared::CLOCK;

/// Host link task - one command port exchange per received byte
#[embassy_executor::task]
pub async fn host_link_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx) {
    info!("Host link task started");

    let mut port = CommandPort::new();
    let mut buf = [0u8; 16];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    // What goes back is whatever was queued before this
                    // byte is processed, as a shift register would do.
                    let shifted_out = port.queued();
                    port.on_byte(byte, &CLOCK);

                    if let Err(e) = tx.write_all(&[shifted_out]).await {
                        warn!("Host link write error: {:?}", e);
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("Host link read error: {:?}", e);
            }
        }
    }
}
