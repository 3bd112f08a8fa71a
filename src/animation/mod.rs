//! Timeline and easing for the strand twist loop

mod easing;
mod timeline;

pub use easing::{ease, Easing};
pub use timeline::{Timeline, DEFAULT_CYCLE_SECONDS};
