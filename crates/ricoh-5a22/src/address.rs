//! Effective addresses handed to instruction handlers.

use std::fmt;

use emu_core::ADDRESS_MASK;

/// A resolved 24-bit operand location.
///
/// Produced by the addressing-mode resolver for each instruction and
/// consumed immediately by the handler. For immediate operands it points at
/// the operand bytes in the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpAddress(u32);

impl OpAddress {
    /// Build from a linear address; bits above 23 are dropped.
    #[must_use]
    pub const fn new(address: u32) -> Self {
        Self(address & ADDRESS_MASK)
    }

    /// Build from a bank and a 16-bit offset.
    #[must_use]
    pub const fn from_bank(bank: u8, offset: u16) -> Self {
        Self(((bank as u32) << 16) | offset as u32)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn bank(self) -> u8 {
        (self.0 >> 16) as u8
    }
}

impl From<u32> for OpAddress {
    fn from(address: u32) -> Self {
        Self::new(address)
    }
}

impl fmt::Display for OpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:02X}:{:04X}", self.bank(), self.0 & 0xFFFF)
    }
}
