//! ASL, LSR, ROL, ROR on memory and on the accumulator.
//!
//! Carry takes the bit shifted out; rotates shift the old carry in. Every
//! form spends one internal cycle (the modify step of read-modify-write, or
//! the idle cycle of the implied accumulator form).

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

/// Which shift or rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Asl,
    Lsr,
    Rol,
    Ror,
}

impl Cpu5a22 {
    fn shift8(&mut self, kind: Shift, value: u8) -> u8 {
        let carry_in = self.p.carry_bit();
        let (result, carry_out) = match kind {
            Shift::Asl => (value << 1, value & 0x80 != 0),
            Shift::Lsr => (value >> 1, value & 0x01 != 0),
            Shift::Rol => ((value << 1) | carry_in, value & 0x80 != 0),
            Shift::Ror => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
        };
        self.p.set_carry_if(carry_out);
        self.p.set_zn8(result);
        result
    }

    fn shift16(&mut self, kind: Shift, value: u16) -> u16 {
        let carry_in = u16::from(self.p.carry_bit());
        let (result, carry_out) = match kind {
            Shift::Asl => (value << 1, value & 0x8000 != 0),
            Shift::Lsr => (value >> 1, value & 0x0001 != 0),
            Shift::Rol => ((value << 1) | carry_in, value & 0x8000 != 0),
            Shift::Ror => ((value >> 1) | (carry_in << 15), value & 0x0001 != 0),
        };
        self.p.set_carry_if(carry_out);
        self.p.set_zn16(result);
        result
    }

    fn shift_mem8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress, kind: Shift) {
        self.add_internal_cycle();
        let work = bus.read(addr.get());
        let result = self.shift8(kind, work);
        bus.write(addr.get(), result);
    }

    fn shift_mem16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress, kind: Shift) {
        self.add_internal_cycle();
        let work = bus.read_word(addr.get());
        let result = self.shift16(kind, work);
        bus.write_word(addr.get(), result);
    }

    fn shift_mem<B: Bus>(&mut self, bus: &mut B, addr: OpAddress, kind: Shift) {
        if self.is_8bit_a() {
            self.shift_mem8(bus, addr, kind);
        } else {
            self.shift_mem16(bus, addr, kind);
        }
    }

    fn shift_a8(&mut self, kind: Shift) {
        self.add_internal_cycle();
        let result = self.shift8(kind, self.regs.a.l());
        self.regs.a.set_l(result);
    }

    fn shift_a16(&mut self, kind: Shift) {
        self.add_internal_cycle();
        self.regs.a.w = self.shift16(kind, self.regs.a.w);
    }

    fn shift_a(&mut self, kind: Shift) {
        if self.is_8bit_a() {
            self.shift_a8(kind);
        } else {
            self.shift_a16(kind);
        }
    }

    // ========================================================================
    // Memory forms
    // ========================================================================

    pub fn asl<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem(bus, addr, Shift::Asl);
    }

    pub fn asl8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem8(bus, addr, Shift::Asl);
    }

    pub fn asl16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem16(bus, addr, Shift::Asl);
    }

    pub fn lsr<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem(bus, addr, Shift::Lsr);
    }

    pub fn lsr8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem8(bus, addr, Shift::Lsr);
    }

    pub fn lsr16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem16(bus, addr, Shift::Lsr);
    }

    pub fn rol<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem(bus, addr, Shift::Rol);
    }

    pub fn rol8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem8(bus, addr, Shift::Rol);
    }

    pub fn rol16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem16(bus, addr, Shift::Rol);
    }

    pub fn ror<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem(bus, addr, Shift::Ror);
    }

    pub fn ror8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem8(bus, addr, Shift::Ror);
    }

    pub fn ror16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.shift_mem16(bus, addr, Shift::Ror);
    }

    // ========================================================================
    // Accumulator forms
    // ========================================================================

    pub fn asl_a(&mut self) {
        self.shift_a(Shift::Asl);
    }

    pub fn asl_a8(&mut self) {
        self.shift_a8(Shift::Asl);
    }

    pub fn asl_a16(&mut self) {
        self.shift_a16(Shift::Asl);
    }

    pub fn lsr_a(&mut self) {
        self.shift_a(Shift::Lsr);
    }

    pub fn lsr_a8(&mut self) {
        self.shift_a8(Shift::Lsr);
    }

    pub fn lsr_a16(&mut self) {
        self.shift_a16(Shift::Lsr);
    }

    pub fn rol_a(&mut self) {
        self.shift_a(Shift::Rol);
    }

    pub fn rol_a8(&mut self) {
        self.shift_a8(Shift::Rol);
    }

    pub fn rol_a16(&mut self) {
        self.shift_a16(Shift::Rol);
    }

    pub fn ror_a(&mut self) {
        self.shift_a(Shift::Ror);
    }

    pub fn ror_a8(&mut self) {
        self.shift_a8(Shift::Ror);
    }

    pub fn ror_a16(&mut self) {
        self.shift_a16(Shift::Ror);
    }
}
