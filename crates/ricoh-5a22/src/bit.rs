//! BIT, TSB, TRB.
//!
//! All three latch the zero sense from `A & operand`: the raw byte for
//! 8-bit forms and `(A & operand) != 0` for 16-bit ones, so Z reads set
//! exactly when no bits are shared. Memory BIT also copies the operand's top
//! two bits into N and V, independent of A.

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

impl Cpu5a22 {
    // ========================================================================
    // BIT
    // ========================================================================

    pub fn bit<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.bit8(bus, addr);
        } else {
            self.bit16(bus, addr);
        }
    }

    pub fn bit8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read(addr.get());
        self.p.set_overflow_if(work & 0x40 != 0);
        self.p.set_negative_byte(work);
        self.p.set_zero_sense(work & self.regs.a.l());
    }

    pub fn bit16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read_word(addr.get());
        self.p.set_overflow_if(work & 0x4000 != 0);
        self.p.set_negative_byte((work >> 8) as u8);
        self.p.set_zero_sense(u8::from(work & self.regs.a.w != 0));
    }

    /// `BIT #imm`: only Z changes.
    pub fn bit_imm<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.bit_imm8(bus, addr);
        } else {
            self.bit_imm16(bus, addr);
        }
    }

    pub fn bit_imm8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read(addr.get());
        self.p.set_zero_sense(work & self.regs.a.l());
    }

    pub fn bit_imm16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read_word(addr.get());
        self.p.set_zero_sense(u8::from(work & self.regs.a.w != 0));
    }

    // ========================================================================
    // TSB / TRB
    // ========================================================================

    pub fn tsb<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.tsb8(bus, addr);
        } else {
            self.tsb16(bus, addr);
        }
    }

    pub fn tsb8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.add_internal_cycle();
        let work = bus.read(addr.get());
        self.p.set_zero_sense(work & self.regs.a.l());
        bus.write(addr.get(), work | self.regs.a.l());
    }

    pub fn tsb16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.add_internal_cycle();
        let work = bus.read_word(addr.get());
        self.p.set_zero_sense(u8::from(work & self.regs.a.w != 0));
        bus.write_word(addr.get(), work | self.regs.a.w);
    }

    pub fn trb<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.trb8(bus, addr);
        } else {
            self.trb16(bus, addr);
        }
    }

    pub fn trb8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.add_internal_cycle();
        let work = bus.read(addr.get());
        self.p.set_zero_sense(work & self.regs.a.l());
        bus.write(addr.get(), work & !self.regs.a.l());
    }

    pub fn trb16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.add_internal_cycle();
        let work = bus.read_word(addr.get());
        self.p.set_zero_sense(u8::from(work & self.regs.a.w != 0));
        bus.write_word(addr.get(), work & !self.regs.a.w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ONE_CYCLE;
    use crate::flags::M;
    use emu_core::SimpleBus;

    const OPERAND: OpAddress = OpAddress::new(0x7E_0000);

    fn native(p: u8) -> Cpu5a22 {
        let mut cpu = Cpu5a22::new();
        cpu.set_emulation(false);
        cpu.set_status(p);
        cpu
    }

    #[test]
    fn bit8_latches_raw_and_byte() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x00C0;
        bus.write(OPERAND.get(), 0x40);
        cpu.bit8(&mut bus, OPERAND);
        assert_eq!(cpu.p.zero_sense(), 0x40);
        assert!(!cpu.p.check_zero());
        assert!(cpu.p.check_overflow());
        assert!(!cpu.p.check_negative());
    }

    #[test]
    fn bit16_latches_truth_of_and() {
        let mut cpu = native(0);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0100;
        bus.write_word(OPERAND.get(), 0xC100);
        cpu.bit16(&mut bus, OPERAND);
        assert_eq!(cpu.p.zero_sense(), 1);
        assert!(cpu.p.check_negative());
        assert!(cpu.p.check_overflow());

        cpu.regs.a.w = 0x0001;
        cpu.bit16(&mut bus, OPERAND);
        assert!(cpu.p.check_zero());
    }

    #[test]
    fn bit_immediate_leaves_n_and_v() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.p.set_overflow();
        cpu.p.set_negative_byte(0x80);
        cpu.regs.a.w = 0x0001;
        bus.write(OPERAND.get(), 0x02);
        cpu.bit_imm(&mut bus, OPERAND);
        assert!(cpu.p.check_zero());
        assert!(cpu.p.check_overflow());
        assert!(cpu.p.check_negative());
    }

    #[test]
    fn tsb8_senses_before_setting() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x000F;
        bus.write(OPERAND.get(), 0xF0);
        cpu.tsb8(&mut bus, OPERAND);
        assert_eq!(bus.peek(OPERAND.get()), 0xFF);
        assert!(cpu.p.check_zero());
        assert_eq!(cpu.cycles(), ONE_CYCLE);
    }

    #[test]
    fn trb16_senses_before_clearing() {
        let mut cpu = native(0);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x8001;
        bus.write_word(OPERAND.get(), 0xFFFF);
        cpu.trb(&mut bus, OPERAND);
        assert_eq!(bus.peek_word(OPERAND.get()), 0x7FFE);
        assert!(!cpu.p.check_zero());
    }

    #[test]
    fn tsb_trb_leave_n_v_c() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.p.set_carry();
        cpu.p.set_overflow();
        cpu.regs.a.w = 0x0080;
        cpu.tsb(&mut bus, OPERAND);
        cpu.trb(&mut bus, OPERAND);
        assert!(cpu.p.check_carry());
        assert!(cpu.p.check_overflow());
        assert!(!cpu.p.check_negative());
        assert_eq!(bus.peek(OPERAND.get()), 0x00);
    }
}
