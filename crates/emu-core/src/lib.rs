//! Core traits and types for cycle-accurate emulation.
//!
//! Everything is counted in master clock ticks. CPU cores reach memory only
//! through [`Bus`] and expose their state through [`Observable`].

mod bus;
mod observable;
mod ticks;

pub use bus::{ADDRESS_MASK, Bus, SimpleBus};
pub use observable::{Observable, Value};
pub use ticks::Ticks;
