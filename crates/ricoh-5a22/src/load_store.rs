//! Loads and stores: LDA/LDX/LDY, STA/STX/STY, STZ.
//!
//! Loads set Z and N from the loaded value. Stores touch no flags.

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

impl Cpu5a22 {
    // ========================================================================
    // Loads
    // ========================================================================

    pub fn lda<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.lda8(bus, addr);
        } else {
            self.lda16(bus, addr);
        }
    }

    pub fn lda8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let value = bus.read(addr.get());
        self.regs.a.set_l(value);
        self.p.set_zn8(value);
    }

    pub fn lda16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.regs.a.w = bus.read_word(addr.get());
        self.p.set_zn16(self.regs.a.w);
    }

    pub fn ldx<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_index() {
            self.ldx8(bus, addr);
        } else {
            self.ldx16(bus, addr);
        }
    }

    pub fn ldx8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let value = bus.read(addr.get());
        self.regs.x.set_l(value);
        self.p.set_zn8(value);
    }

    pub fn ldx16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.regs.x.w = bus.read_word(addr.get());
        self.p.set_zn16(self.regs.x.w);
    }

    pub fn ldy<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_index() {
            self.ldy8(bus, addr);
        } else {
            self.ldy16(bus, addr);
        }
    }

    pub fn ldy8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let value = bus.read(addr.get());
        self.regs.y.set_l(value);
        self.p.set_zn8(value);
    }

    pub fn ldy16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.regs.y.w = bus.read_word(addr.get());
        self.p.set_zn16(self.regs.y.w);
    }

    // ========================================================================
    // Stores
    // ========================================================================

    pub fn sta<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.sta8(bus, addr);
        } else {
            self.sta16(bus, addr);
        }
    }

    pub fn sta8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write(addr.get(), self.regs.a.l());
    }

    pub fn sta16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write_word(addr.get(), self.regs.a.w);
    }

    pub fn stx<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_index() {
            self.stx8(bus, addr);
        } else {
            self.stx16(bus, addr);
        }
    }

    pub fn stx8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write(addr.get(), self.regs.x.l());
    }

    pub fn stx16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write_word(addr.get(), self.regs.x.w);
    }

    pub fn sty<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_index() {
            self.sty8(bus, addr);
        } else {
            self.sty16(bus, addr);
        }
    }

    pub fn sty8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write(addr.get(), self.regs.y.l());
    }

    pub fn sty16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write_word(addr.get(), self.regs.y.w);
    }

    /// STZ follows the accumulator width.
    pub fn stz<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.stz8(bus, addr);
        } else {
            self.stz16(bus, addr);
        }
    }

    pub fn stz8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write(addr.get(), 0);
    }

    pub fn stz16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        bus.write_word(addr.get(), 0);
    }
}
