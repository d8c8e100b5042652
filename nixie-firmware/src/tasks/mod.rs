//! Event-driven tasks
//!
//! One task per hardware event source:
//! - [`tick_task`] — periodic timer tick driving the display lines
//! - [`host_link_task`] — one byte per host exchange on the command link
//! - [`light_task`] — ambient light conversions into shared state

mod host_link;
mod light;
mod tick;

pub use host_link::host_link_task;
pub use light::light_task;
pub use tick::{tick_task, DisplayPins};
