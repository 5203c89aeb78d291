//! Opcode dispatch for the implemented instruction families.
//!
//! The caller has already fetched the opcode and resolved the operand
//! address; this only routes to the handler. Width is chosen by the handler
//! from M or X at call time.

use std::fmt;

use emu_core::Bus;

use crate::error::{ExecError, Result};
use crate::{Cpu5a22, OpAddress};

/// Operand resolved by the addressing-mode stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Effective address. For immediate forms, the address of the operand
    /// bytes.
    Address(OpAddress),
    /// Accumulator or implied form.
    Implied,
}

impl From<OpAddress> for Operand {
    fn from(address: OpAddress) -> Self {
        Self::Address(address)
    }
}

/// Instruction executed by [`Cpu5a22::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Ora,
    And,
    Eor,
    Adc,
    Sta,
    Lda,
    Cmp,
    Sbc,
    Asl,
    Rol,
    Lsr,
    Ror,
    Inc,
    Dec,
    Inx,
    Iny,
    Dex,
    Dey,
    Ldx,
    Ldy,
    Stx,
    Sty,
    Stz,
    Cpx,
    Cpy,
    Bit,
    Tsb,
    Trb,
}

impl Mnemonic {
    /// Sized by X rather than M.
    #[must_use]
    pub const fn uses_index_width(self) -> bool {
        matches!(
            self,
            Self::Inx
                | Self::Iny
                | Self::Dex
                | Self::Dey
                | Self::Ldx
                | Self::Ldy
                | Self::Stx
                | Self::Sty
                | Self::Cpx
                | Self::Cpy
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ora => "ORA",
            Self::And => "AND",
            Self::Eor => "EOR",
            Self::Adc => "ADC",
            Self::Sta => "STA",
            Self::Lda => "LDA",
            Self::Cmp => "CMP",
            Self::Sbc => "SBC",
            Self::Asl => "ASL",
            Self::Rol => "ROL",
            Self::Lsr => "LSR",
            Self::Ror => "ROR",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Inx => "INX",
            Self::Iny => "INY",
            Self::Dex => "DEX",
            Self::Dey => "DEY",
            Self::Ldx => "LDX",
            Self::Ldy => "LDY",
            Self::Stx => "STX",
            Self::Sty => "STY",
            Self::Stz => "STZ",
            Self::Cpx => "CPX",
            Self::Cpy => "CPY",
            Self::Bit => "BIT",
            Self::Tsb => "TSB",
            Self::Trb => "TRB",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Memory,
    Immediate,
    Accumulator,
    Implied,
}

impl Form {
    fn takes_address(self) -> bool {
        matches!(self, Self::Memory | Self::Immediate)
    }
}

/// Group-one ALU ops, indexed by the top three opcode bits.
const GROUP_ONE: [Mnemonic; 8] = [
    Mnemonic::Ora,
    Mnemonic::And,
    Mnemonic::Eor,
    Mnemonic::Adc,
    Mnemonic::Sta,
    Mnemonic::Lda,
    Mnemonic::Cmp,
    Mnemonic::Sbc,
];

fn decode(opcode: u8) -> Option<(Mnemonic, Form)> {
    use Form::{Accumulator, Immediate, Implied, Memory};
    use Mnemonic as Op;

    let decoded = match opcode {
        // BIT #imm sits where STA #imm would be
        0x89 => (Op::Bit, Immediate),

        // ORA AND EOR ADC STA LDA CMP SBC, every addressing mode
        _ if opcode & 0x1F == 0x09 => (GROUP_ONE[usize::from(opcode >> 5)], Immediate),
        _ if matches!(
            opcode & 0x1F,
            0x01 | 0x03 | 0x05 | 0x07 | 0x0D | 0x0F | 0x11 | 0x12 | 0x13 | 0x15 | 0x17 | 0x19
                | 0x1D | 0x1F
        ) =>
        {
            (GROUP_ONE[usize::from(opcode >> 5)], Memory)
        }

        // Shifts and rotates
        0x06 | 0x0E | 0x16 | 0x1E => (Op::Asl, Memory),
        0x0A => (Op::Asl, Accumulator),
        0x26 | 0x2E | 0x36 | 0x3E => (Op::Rol, Memory),
        0x2A => (Op::Rol, Accumulator),
        0x46 | 0x4E | 0x56 | 0x5E => (Op::Lsr, Memory),
        0x4A => (Op::Lsr, Accumulator),
        0x66 | 0x6E | 0x76 | 0x7E => (Op::Ror, Memory),
        0x6A => (Op::Ror, Accumulator),

        // Increment and decrement
        0xE6 | 0xEE | 0xF6 | 0xFE => (Op::Inc, Memory),
        0x1A => (Op::Inc, Accumulator),
        0xC6 | 0xCE | 0xD6 | 0xDE => (Op::Dec, Memory),
        0x3A => (Op::Dec, Accumulator),
        0xE8 => (Op::Inx, Implied),
        0xC8 => (Op::Iny, Implied),
        0xCA => (Op::Dex, Implied),
        0x88 => (Op::Dey, Implied),

        // Index loads and stores, STZ
        0xA2 => (Op::Ldx, Immediate),
        0xA6 | 0xAE | 0xB6 | 0xBE => (Op::Ldx, Memory),
        0xA0 => (Op::Ldy, Immediate),
        0xA4 | 0xAC | 0xB4 | 0xBC => (Op::Ldy, Memory),
        0x86 | 0x8E | 0x96 => (Op::Stx, Memory),
        0x84 | 0x8C | 0x94 => (Op::Sty, Memory),
        0x64 | 0x74 | 0x9C | 0x9E => (Op::Stz, Memory),

        // Index compares
        0xE0 => (Op::Cpx, Immediate),
        0xE4 | 0xEC => (Op::Cpx, Memory),
        0xC0 => (Op::Cpy, Immediate),
        0xC4 | 0xCC => (Op::Cpy, Memory),

        // Bit tests
        0x24 | 0x2C | 0x34 | 0x3C => (Op::Bit, Memory),
        0x04 | 0x0C => (Op::Tsb, Memory),
        0x14 | 0x1C => (Op::Trb, Memory),

        _ => return None,
    };
    Some(decoded)
}

impl Cpu5a22 {
    /// Run one instruction whose operand has already been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Unimplemented`] for opcodes outside the handled
    /// families, and a mismatch error when `operand` does not suit the
    /// opcode's form. No state changes in either case.
    pub fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        operand: Operand,
    ) -> Result<Mnemonic> {
        let Some((mnemonic, form)) = decode(opcode) else {
            return Err(ExecError::Unimplemented { opcode });
        };

        let eight_bit = if mnemonic.uses_index_width() {
            self.is_8bit_index()
        } else {
            self.is_8bit_a()
        };
        let bits = if eight_bit { 8 } else { 16 };

        match (form.takes_address(), operand) {
            (true, Operand::Address(addr)) => {
                log::trace!("{addr}: {mnemonic}.{bits} (${opcode:02X})");
                self.execute_memory(bus, mnemonic, form, addr);
            }
            (true, Operand::Implied) => return Err(ExecError::MissingAddress { opcode }),
            (false, Operand::Implied) => {
                log::trace!("{mnemonic}.{bits} (${opcode:02X})");
                self.execute_implied(mnemonic);
            }
            (false, Operand::Address(address)) => {
                return Err(ExecError::UnexpectedAddress { opcode, address });
            }
        }
        Ok(mnemonic)
    }

    fn execute_memory<B: Bus>(
        &mut self,
        bus: &mut B,
        mnemonic: Mnemonic,
        form: Form,
        addr: OpAddress,
    ) {
        match mnemonic {
            Mnemonic::Ora => self.ora(bus, addr),
            Mnemonic::And => self.and(bus, addr),
            Mnemonic::Eor => self.eor(bus, addr),
            Mnemonic::Adc => self.adc(bus, addr),
            Mnemonic::Sta => self.sta(bus, addr),
            Mnemonic::Lda => self.lda(bus, addr),
            Mnemonic::Cmp => self.cmp(bus, addr),
            Mnemonic::Sbc => self.sbc(bus, addr),
            Mnemonic::Asl => self.asl(bus, addr),
            Mnemonic::Rol => self.rol(bus, addr),
            Mnemonic::Lsr => self.lsr(bus, addr),
            Mnemonic::Ror => self.ror(bus, addr),
            Mnemonic::Inc => self.inc(bus, addr),
            Mnemonic::Dec => self.dec(bus, addr),
            Mnemonic::Ldx => self.ldx(bus, addr),
            Mnemonic::Ldy => self.ldy(bus, addr),
            Mnemonic::Stx => self.stx(bus, addr),
            Mnemonic::Sty => self.sty(bus, addr),
            Mnemonic::Stz => self.stz(bus, addr),
            Mnemonic::Cpx => self.cpx(bus, addr),
            Mnemonic::Cpy => self.cpy(bus, addr),
            Mnemonic::Bit if form == Form::Immediate => self.bit_imm(bus, addr),
            Mnemonic::Bit => self.bit(bus, addr),
            Mnemonic::Tsb => self.tsb(bus, addr),
            Mnemonic::Trb => self.trb(bus, addr),
            Mnemonic::Inx | Mnemonic::Iny | Mnemonic::Dex | Mnemonic::Dey => {
                unreachable!("{mnemonic} decoded with an address")
            }
        }
    }

    fn execute_implied(&mut self, mnemonic: Mnemonic) {
        match mnemonic {
            Mnemonic::Asl => self.asl_a(),
            Mnemonic::Rol => self.rol_a(),
            Mnemonic::Lsr => self.lsr_a(),
            Mnemonic::Ror => self.ror_a(),
            Mnemonic::Inc => self.inc_a(),
            Mnemonic::Dec => self.dec_a(),
            Mnemonic::Inx => self.inx(),
            Mnemonic::Iny => self.iny(),
            Mnemonic::Dex => self.dex(),
            Mnemonic::Dey => self.dey(),
            _ => unreachable!("{mnemonic} decoded as implied"),
        }
    }
}
