//! CMP, CPX, CPY.
//!
//! `reg - operand` as a signed difference: carry means no borrow, Z and N
//! come from the truncated difference. The register is never written.

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

impl Cpu5a22 {
    fn compare8(&mut self, reg: u8, work: u8) {
        let diff = i16::from(reg) - i16::from(work);
        self.p.set_carry_if(diff >= 0);
        self.p.set_zn8(diff as u8);
    }

    fn compare16(&mut self, reg: u16, work: u16) {
        let diff = i32::from(reg) - i32::from(work);
        self.p.set_carry_if(diff >= 0);
        self.p.set_zn16(diff as u16);
    }

    pub fn cmp<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.cmp8(bus, addr);
        } else {
            self.cmp16(bus, addr);
        }
    }

    pub fn cmp8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.compare8(self.regs.a.l(), bus.read(addr.get()));
    }

    pub fn cmp16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.compare16(self.regs.a.w, bus.read_word(addr.get()));
    }

    pub fn cpx<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_index() {
            self.cpx8(bus, addr);
        } else {
            self.cpx16(bus, addr);
        }
    }

    pub fn cpx8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.compare8(self.regs.x.l(), bus.read(addr.get()));
    }

    pub fn cpx16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.compare16(self.regs.x.w, bus.read_word(addr.get()));
    }

    pub fn cpy<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_index() {
            self.cpy8(bus, addr);
        } else {
            self.cpy16(bus, addr);
        }
    }

    pub fn cpy8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.compare8(self.regs.y.l(), bus.read(addr.get()));
    }

    pub fn cpy16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.compare16(self.regs.y.w, bus.read_word(addr.get()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{M, X};
    use emu_core::SimpleBus;

    const OPERAND: OpAddress = OpAddress::new(0x00_0010);

    fn native(p: u8) -> Cpu5a22 {
        let mut cpu = Cpu5a22::new();
        cpu.set_emulation(false);
        cpu.set_status(p);
        cpu
    }

    #[test]
    fn cmp8_equal_sets_carry_and_zero() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0042;
        bus.write(OPERAND.get(), 0x42);
        cpu.cmp8(&mut bus, OPERAND);
        assert!(cpu.p.check_carry());
        assert!(cpu.p.check_zero());
        assert!(!cpu.p.check_negative());
        assert_eq!(cpu.regs.a.w, 0x0042);
    }

    #[test]
    fn cmp8_less_than_clears_carry() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0001;
        bus.write(OPERAND.get(), 0x02);
        cpu.cmp8(&mut bus, OPERAND);
        assert!(!cpu.p.check_carry());
        assert!(cpu.p.check_negative());
        assert!(!cpu.p.check_zero());
    }

    #[test]
    fn cmp16_compares_whole_word() {
        let mut cpu = native(0);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0100;
        bus.write_word(OPERAND.get(), 0x00FF);
        cpu.cmp(&mut bus, OPERAND);
        assert!(cpu.p.check_carry());
        assert!(!cpu.p.check_zero());
        assert!(!cpu.p.check_negative());
    }

    #[test]
    fn cpx_cpy_use_index_width() {
        let mut bus = SimpleBus::new();
        bus.write_word(OPERAND.get(), 0x0180);

        let mut cpu = native(X);
        cpu.regs.x.w = 0x0080;
        cpu.cpx(&mut bus, OPERAND);
        assert!(cpu.p.check_zero());
        assert!(cpu.p.check_carry());

        let mut cpu = native(0);
        cpu.regs.y.w = 0x0080;
        cpu.cpy(&mut bus, OPERAND);
        assert!(!cpu.p.check_carry());
        assert!(cpu.p.check_negative());
        assert_eq!(cpu.regs.y.w, 0x0080);
    }

    #[test]
    fn compare_never_touches_overflow() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.p.set_overflow();
        cpu.regs.a.w = 0x0080;
        bus.write(OPERAND.get(), 0x01);
        cpu.cmp8(&mut bus, OPERAND);
        assert!(cpu.p.check_overflow());
    }
}
