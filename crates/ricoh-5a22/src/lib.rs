//! Ricoh 5A22 (65c816) instruction execution engine.
//!
//! Handlers for the SNES CPU's data instructions: arithmetic, logic,
//! shifts, increments, loads and stores, compares and bit tests. Each
//! handler takes an already-resolved effective address and runs at the
//! width selected by the M or X status bit. Fetching, decoding addressing
//! modes and scheduling belong to the caller.

mod address;
mod arith;
mod bit;
mod compare;
mod config;
mod cpu;
mod error;
mod execute;
pub mod flags;
mod incdec;
mod load_store;
mod logic;
mod registers;
mod shifts;

pub use address::OpAddress;
pub use config::{CpuConfig, ONE_CYCLE};
pub use cpu::Cpu5a22;
pub use error::{ExecError, Result};
pub use execute::{Mnemonic, Operand};
pub use flags::Status;
pub use registers::{Reg16, Registers};
