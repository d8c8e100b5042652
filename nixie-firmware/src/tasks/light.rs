//! Ambient light sampler task
//!
//! Free-running conversions on the light sensor channel, published straight
//! into shared state. No filtering and no averaging; the command handler
//! serves whatever the most recent sample was.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use crate::shared::CLOCK;

/// Sample interval; fast enough that the host always sees fresh light data
const SAMPLE_INTERVAL_MS: u64 = 2;

/// Light sampler task - publishes the latest conversion into shared state
#[embassy_executor::task]
pub async fn light_task(mut adc: Adc<'static, Async>, mut channel: Channel<'static>) {
    info!("Light sampler task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        match adc.read(&mut channel).await {
            // RP2040 conversions are 12-bit; scale to the 10-bit range the
            // protocol's 8-bit sample is derived from.
            Ok(raw) => CLOCK.publish_light_sample(raw >> 2),
            Err(_) => warn!("ADC read error"),
        }
    }
}
