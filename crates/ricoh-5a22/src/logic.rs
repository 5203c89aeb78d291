//! AND, ORA, EOR.
//!
//! Only Z and N change. Carry and overflow are never touched.

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

impl Cpu5a22 {
    pub fn and<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.and8(bus, addr);
        } else {
            self.and16(bus, addr);
        }
    }

    pub fn and8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let result = self.regs.a.l() & bus.read(addr.get());
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    pub fn and16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.regs.a.w &= bus.read_word(addr.get());
        self.p.set_zn16(self.regs.a.w);
    }

    pub fn ora<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.ora8(bus, addr);
        } else {
            self.ora16(bus, addr);
        }
    }

    pub fn ora8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let result = self.regs.a.l() | bus.read(addr.get());
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    pub fn ora16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.regs.a.w |= bus.read_word(addr.get());
        self.p.set_zn16(self.regs.a.w);
    }

    pub fn eor<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.eor8(bus, addr);
        } else {
            self.eor16(bus, addr);
        }
    }

    pub fn eor8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let result = self.regs.a.l() ^ bus.read(addr.get());
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    pub fn eor16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.regs.a.w ^= bus.read_word(addr.get());
        self.p.set_zn16(self.regs.a.w);
    }
}
