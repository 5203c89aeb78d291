//! Dispatch errors.

use thiserror::Error;

use crate::OpAddress;

/// Why [`crate::Cpu5a22::execute`] refused an opcode.
///
/// The handlers themselves cannot fail; only pairing an opcode with the
/// wrong kind of operand, or asking for one outside the implemented set, is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("opcode ${opcode:02X} is not handled by the execution engine")]
    Unimplemented { opcode: u8 },

    #[error("opcode ${opcode:02X} needs an effective address")]
    MissingAddress { opcode: u8 },

    #[error("opcode ${opcode:02X} is implied but was given address {address}")]
    UnexpectedAddress { opcode: u8, address: OpAddress },
}

pub type Result<T> = std::result::Result<T, ExecError>;
