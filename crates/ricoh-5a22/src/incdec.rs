//! INC and DEC on memory and the accumulator, plus INX/INY/DEX/DEY.
//!
//! Results wrap; carry and overflow are never touched. Every form spends an
//! internal cycle and invalidates any idle loop the scheduler has spotted.

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

impl Cpu5a22 {
    fn step_mem8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress, delta: u8) {
        self.clear_wait_address();
        self.add_internal_cycle();
        let result = bus.read(addr.get()).wrapping_add(delta);
        bus.write(addr.get(), result);
        self.p.set_zn8(result);
    }

    fn step_mem16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress, delta: u16) {
        self.clear_wait_address();
        self.add_internal_cycle();
        let result = bus.read_word(addr.get()).wrapping_add(delta);
        bus.write_word(addr.get(), result);
        self.p.set_zn16(result);
    }

    // ========================================================================
    // Memory forms
    // ========================================================================

    pub fn inc<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.inc8(bus, addr);
        } else {
            self.inc16(bus, addr);
        }
    }

    pub fn inc8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.step_mem8(bus, addr, 1);
    }

    pub fn inc16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.step_mem16(bus, addr, 1);
    }

    pub fn dec<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.dec8(bus, addr);
        } else {
            self.dec16(bus, addr);
        }
    }

    pub fn dec8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.step_mem8(bus, addr, u8::MAX);
    }

    pub fn dec16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        self.step_mem16(bus, addr, u16::MAX);
    }

    // ========================================================================
    // Accumulator forms
    // ========================================================================

    pub fn inc_a(&mut self) {
        if self.is_8bit_a() {
            self.inc_a8();
        } else {
            self.inc_a16();
        }
    }

    pub fn inc_a8(&mut self) {
        self.add_internal_cycle();
        self.clear_wait_address();
        let result = self.regs.a.l().wrapping_add(1);
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    pub fn inc_a16(&mut self) {
        self.add_internal_cycle();
        self.clear_wait_address();
        self.regs.a.w = self.regs.a.w.wrapping_add(1);
        self.p.set_zn16(self.regs.a.w);
    }

    pub fn dec_a(&mut self) {
        if self.is_8bit_a() {
            self.dec_a8();
        } else {
            self.dec_a16();
        }
    }

    pub fn dec_a8(&mut self) {
        self.add_internal_cycle();
        self.clear_wait_address();
        let result = self.regs.a.l().wrapping_sub(1);
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    pub fn dec_a16(&mut self) {
        self.add_internal_cycle();
        self.clear_wait_address();
        self.regs.a.w = self.regs.a.w.wrapping_sub(1);
        self.p.set_zn16(self.regs.a.w);
    }

    // ========================================================================
    // Index registers
    // ========================================================================

    /// Step X or Y by `delta` at the current index width. In 8-bit index
    /// mode the high byte is already zero and stays that way.
    fn step_index(&mut self, select_y: bool, delta: u16) {
        self.add_internal_cycle();
        self.clear_wait_address();
        let eight_bit = self.is_8bit_index();
        let reg = if select_y {
            &mut self.regs.y
        } else {
            &mut self.regs.x
        };
        if eight_bit {
            let result = reg.l().wrapping_add(delta as u8);
            reg.set_l(result);
            self.p.set_zn8(result);
        } else {
            reg.w = reg.w.wrapping_add(delta);
            let result = reg.w;
            self.p.set_zn16(result);
        }
    }

    pub fn inx(&mut self) {
        self.step_index(false, 1);
    }

    pub fn iny(&mut self) {
        self.step_index(true, 1);
    }

    pub fn dex(&mut self) {
        self.step_index(false, u16::MAX);
    }

    pub fn dey(&mut self) {
        self.step_index(true, u16::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ONE_CYCLE;
    use crate::flags::{M, X};
    use emu_core::SimpleBus;

    const OPERAND: OpAddress = OpAddress::new(0x7E_0300);

    fn native(p: u8) -> Cpu5a22 {
        let mut cpu = Cpu5a22::new();
        cpu.set_emulation(false);
        cpu.set_status(p);
        cpu
    }

    #[test]
    fn inc8_memory_wraps_and_keeps_carry() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.p.set_carry();
        bus.write(OPERAND.get(), 0xFF);
        cpu.inc8(&mut bus, OPERAND);
        assert_eq!(bus.peek(OPERAND.get()), 0x00);
        assert!(cpu.p.check_zero());
        assert!(cpu.p.check_carry());
        assert!(!cpu.p.check_overflow());
        assert_eq!(cpu.cycles(), ONE_CYCLE);
    }

    #[test]
    fn dec16_memory_wraps_to_ffff() {
        let mut cpu = native(0);
        let mut bus = SimpleBus::new();
        bus.write_word(OPERAND.get(), 0x0000);
        cpu.dec16(&mut bus, OPERAND);
        assert_eq!(bus.peek_word(OPERAND.get()), 0xFFFF);
        assert!(cpu.p.check_negative());
        assert!(!cpu.p.check_carry());
    }

    #[test]
    fn inc_clears_wait_address() {
        let mut cpu = native(M);
        let mut bus = SimpleBus::new();
        cpu.set_wait_address(OpAddress::new(0x00_8010));
        cpu.inc(&mut bus, OPERAND);
        assert_eq!(cpu.wait_address(), None);

        cpu.set_wait_address(OpAddress::new(0x00_8010));
        cpu.dec_a();
        assert_eq!(cpu.wait_address(), None);
    }

    #[test]
    fn inc_a8_preserves_high_byte() {
        let mut cpu = native(M);
        cpu.regs.a.w = 0x34FF;
        cpu.inc_a8();
        assert_eq!(cpu.regs.a.w, 0x3400);
        assert!(cpu.p.check_zero());
    }

    #[test]
    fn dec_a16_negative_from_high_byte() {
        let mut cpu = native(0);
        cpu.regs.a.w = 0x0000;
        cpu.dec_a16();
        assert_eq!(cpu.regs.a.w, 0xFFFF);
        assert!(cpu.p.check_negative());
    }

    #[test]
    fn index_steps_follow_x_width() {
        let mut cpu = native(X);
        cpu.regs.x.w = 0x00FF;
        cpu.inx();
        assert_eq!(cpu.regs.x.w, 0x0000);
        assert!(cpu.p.check_zero());

        let mut cpu = native(0);
        cpu.regs.y.w = 0x00FF;
        cpu.iny();
        assert_eq!(cpu.regs.y.w, 0x0100);
        assert!(!cpu.p.check_zero());

        cpu.regs.x.w = 0x0000;
        cpu.dex();
        assert_eq!(cpu.regs.x.w, 0xFFFF);
        assert!(cpu.p.check_negative());

        cpu.dey();
        assert_eq!(cpu.regs.y.w, 0x00FF);
    }
}
