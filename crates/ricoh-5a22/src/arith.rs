//! ADC and SBC, binary and decimal, 8 and 16 bit.
//!
//! Decimal mode works one BCD digit at a time. Each nibble is added or
//! subtracted on its own and corrected by 10 before the carry or borrow moves
//! to the next nibble, so a 16-bit operation chains four digits rather than
//! correcting two bytes.
//!
//! Digits are assumed to be valid BCD going in; nothing is validated.

use emu_core::Bus;

use crate::{Cpu5a22, OpAddress};

/// Packed-BCD addition over the low `digits` nibbles.
///
/// Returns the packed sum and the carry out of the top digit.
fn bcd_add(a: u16, b: u16, digits: u32, carry_in: bool) -> (u16, bool) {
    let mut result = 0u16;
    let mut carry = u8::from(carry_in);
    for digit in 0..digits {
        let shift = digit * 4;
        let mut sum = ((a >> shift) & 0xF) as u8 + ((b >> shift) & 0xF) as u8 + carry;
        carry = 0;
        if sum > 9 {
            sum -= 10;
            carry = 1;
        }
        result |= u16::from(sum & 0xF) << shift;
    }
    (result, carry != 0)
}

/// Packed-BCD subtraction over the low `digits` nibbles.
///
/// Digit arithmetic wraps at 8 bits, so an underflowed digit reads as
/// greater than 9. Returns the packed difference and the carry out (set
/// when the top digit did not borrow).
fn bcd_sub(a: u16, b: u16, digits: u32, carry_in: bool) -> (u16, bool) {
    let mut result = 0u16;
    let mut borrow = u8::from(!carry_in);
    for digit in 0..digits {
        let shift = digit * 4;
        let mut diff = (((a >> shift) & 0xF) as u8)
            .wrapping_sub(((b >> shift) & 0xF) as u8)
            .wrapping_sub(borrow);
        borrow = 0;
        if diff > 9 {
            diff = diff.wrapping_add(10);
            borrow = 1;
        }
        result |= u16::from(diff & 0xF) << shift;
    }
    (result, borrow == 0)
}

impl Cpu5a22 {
    // ========================================================================
    // ADC
    // ========================================================================

    /// ADC with the width chosen by M.
    pub fn adc<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.adc8(bus, addr);
        } else {
            self.adc16(bus, addr);
        }
    }

    pub fn adc8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read(addr.get());
        self.do_adc8(work);
    }

    pub fn adc16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read_word(addr.get());
        self.do_adc16(work);
    }

    fn do_adc8(&mut self, work: u8) {
        let a = self.regs.a.l();
        let result = if self.p.check_decimal() {
            let (sum, carry) = bcd_add(u16::from(a), u16::from(work), 2, self.p.check_carry());
            self.p.set_carry_if(carry);
            sum as u8
        } else {
            let sum = u16::from(a) + u16::from(work) + u16::from(self.p.carry_bit());
            self.p.set_carry_if(sum >= 0x100);
            sum as u8
        };

        self.p
            .set_overflow_if(!(a ^ work) & (work ^ result) & 0x80 != 0);
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    fn do_adc16(&mut self, work: u16) {
        let a = self.regs.a.w;
        let result = if self.p.check_decimal() {
            let (sum, carry) = bcd_add(a, work, 4, self.p.check_carry());
            self.p.set_carry_if(carry);
            sum
        } else {
            let sum = u32::from(a) + u32::from(work) + u32::from(self.p.carry_bit());
            self.p.set_carry_if(sum >= 0x1_0000);
            sum as u16
        };

        self.p
            .set_overflow_if(!(a ^ work) & (work ^ result) & 0x8000 != 0);
        self.regs.a.w = result;
        self.p.set_zn16(result);
    }

    // ========================================================================
    // SBC
    // ========================================================================

    /// SBC with the width chosen by M.
    pub fn sbc<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        if self.is_8bit_a() {
            self.sbc8(bus, addr);
        } else {
            self.sbc16(bus, addr);
        }
    }

    pub fn sbc8<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read(addr.get());
        self.do_sbc8(work);
    }

    pub fn sbc16<B: Bus>(&mut self, bus: &mut B, addr: OpAddress) {
        let work = bus.read_word(addr.get());
        self.do_sbc16(work);
    }

    fn do_sbc8(&mut self, work: u8) {
        let a = self.regs.a.l();
        let result = if self.p.check_decimal() {
            let (diff, carry) = bcd_sub(u16::from(a), u16::from(work), 2, self.p.check_carry());
            self.p.set_carry_if(carry);
            diff as u8
        } else {
            let diff = i16::from(a) - i16::from(work) + i16::from(self.p.carry_bit()) - 1;
            self.p.set_carry_if(diff >= 0);
            diff as u8
        };

        // Operands of a subtraction: the input XOR is not complemented.
        self.p
            .set_overflow_if((a ^ work) & (a ^ result) & 0x80 != 0);
        self.regs.a.set_l(result);
        self.p.set_zn8(result);
    }

    fn do_sbc16(&mut self, work: u16) {
        let a = self.regs.a.w;
        let result = if self.p.check_decimal() {
            let (diff, carry) = bcd_sub(a, work, 4, self.p.check_carry());
            self.p.set_carry_if(carry);
            diff
        } else {
            let diff = i32::from(a) - i32::from(work) + i32::from(self.p.carry_bit()) - 1;
            self.p.set_carry_if(diff >= 0);
            diff as u16
        };

        self.p
            .set_overflow_if((a ^ work) & (a ^ result) & 0x8000 != 0);
        self.regs.a.w = result;
        self.p.set_zn16(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{D, M};
    use emu_core::SimpleBus;

    const OPERAND: OpAddress = OpAddress::new(0x7E_0100);

    fn cpu_8bit(decimal: bool) -> Cpu5a22 {
        let mut cpu = Cpu5a22::new();
        cpu.set_emulation(false);
        cpu.set_status(if decimal { M | D } else { M });
        cpu
    }

    fn cpu_16bit(decimal: bool) -> Cpu5a22 {
        let mut cpu = Cpu5a22::new();
        cpu.set_emulation(false);
        cpu.set_status(if decimal { D } else { 0 });
        cpu
    }

    #[test]
    fn bcd_add_carries_digit_by_digit() {
        assert_eq!(bcd_add(0x09, 0x01, 2, false), (0x10, false));
        assert_eq!(bcd_add(0x99, 0x01, 2, false), (0x00, true));
        assert_eq!(bcd_add(0x0999, 0x0001, 4, false), (0x1000, false));
        assert_eq!(bcd_add(0x9999, 0x0000, 4, true), (0x0000, true));
        assert_eq!(bcd_add(0x1234, 0x8765, 4, false), (0x9999, false));
    }

    #[test]
    fn bcd_sub_borrows_digit_by_digit() {
        assert_eq!(bcd_sub(0x10, 0x01, 2, true), (0x09, true));
        assert_eq!(bcd_sub(0x00, 0x01, 2, true), (0x99, false));
        assert_eq!(bcd_sub(0x1000, 0x0001, 4, true), (0x0999, true));
        assert_eq!(bcd_sub(0x0000, 0x0000, 4, false), (0x9999, false));
        assert_eq!(bcd_sub(0x50, 0x25, 2, true), (0x25, true));
    }

    #[test]
    fn bcd_sub_handles_digit_minus_nine_minus_borrow() {
        assert_eq!(bcd_sub(0x00, 0x90, 2, true), (0x10, false));
        // High digit is 0 - 9 - 1, exactly -10.
        assert_eq!(bcd_sub(0x00, 0x99, 2, true), (0x01, false));
    }

    #[test]
    fn adc8_binary_sets_carry_and_keeps_ah() {
        let mut cpu = cpu_8bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x12FF;
        bus.write(OPERAND.get(), 0x01);
        cpu.adc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x1200);
        assert!(cpu.p.check_carry());
        assert!(cpu.p.check_zero());
        assert!(!cpu.p.check_overflow());
    }

    #[test]
    fn adc8_binary_overflow_on_positive_plus_positive() {
        let mut cpu = cpu_8bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0050;
        bus.write(OPERAND.get(), 0x50);
        cpu.adc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.l(), 0xA0);
        assert!(cpu.p.check_overflow());
        assert!(cpu.p.check_negative());
        assert!(!cpu.p.check_carry());
    }

    #[test]
    fn adc8_decimal_carries_out_of_top_digit() {
        let mut cpu = cpu_8bit(true);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0058;
        cpu.p.set_carry();
        bus.write(OPERAND.get(), 0x46);
        cpu.adc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.l(), 0x05);
        assert!(cpu.p.check_carry());
    }

    #[test]
    fn adc16_decimal_chains_four_digits() {
        let mut cpu = cpu_16bit(true);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x1999;
        bus.write_word(OPERAND.get(), 0x0001);
        cpu.adc16(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x2000);
        assert!(!cpu.p.check_carry());
        assert!(!cpu.p.check_negative());
    }

    #[test]
    fn adc16_binary_negative_from_high_byte() {
        let mut cpu = cpu_16bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x7FFF;
        bus.write_word(OPERAND.get(), 0x0001);
        cpu.adc16(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x8000);
        assert!(cpu.p.check_negative());
        assert!(cpu.p.check_overflow());
        assert!(!cpu.p.check_zero());
    }

    #[test]
    fn sbc8_binary_borrow_clears_carry() {
        let mut cpu = cpu_8bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0000;
        cpu.p.set_carry();
        bus.write(OPERAND.get(), 0x01);
        cpu.sbc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.l(), 0xFF);
        assert!(!cpu.p.check_carry());
        assert!(cpu.p.check_negative());
        assert!(!cpu.p.check_overflow());
    }

    #[test]
    fn sbc8_binary_overflow_on_negative_minus_positive() {
        let mut cpu = cpu_8bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0080;
        cpu.p.set_carry();
        bus.write(OPERAND.get(), 0x01);
        cpu.sbc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.l(), 0x7F);
        assert!(cpu.p.check_overflow());
        assert!(cpu.p.check_carry());
    }

    #[test]
    fn sbc8_without_carry_subtracts_one_more() {
        let mut cpu = cpu_8bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0005;
        bus.write(OPERAND.get(), 0x02);
        cpu.sbc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.l(), 0x02);
        assert!(cpu.p.check_carry());
    }

    #[test]
    fn sbc8_decimal_borrows_across_digit() {
        let mut cpu = cpu_8bit(true);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0040;
        cpu.p.set_carry();
        bus.write(OPERAND.get(), 0x13);
        cpu.sbc8(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.l(), 0x27);
        assert!(cpu.p.check_carry());
    }

    #[test]
    fn sbc16_decimal_wraps_below_zero() {
        let mut cpu = cpu_16bit(true);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x0000;
        cpu.p.set_carry();
        bus.write_word(OPERAND.get(), 0x0001);
        cpu.sbc16(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x9999);
        assert!(!cpu.p.check_carry());
        assert!(cpu.p.check_negative());
    }

    #[test]
    fn sbc16_binary_overflow_mask_uses_original_accumulator() {
        let mut cpu = cpu_16bit(false);
        let mut bus = SimpleBus::new();
        cpu.regs.a.w = 0x8000;
        cpu.p.set_carry();
        bus.write_word(OPERAND.get(), 0x0001);
        cpu.sbc16(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x7FFF);
        assert!(cpu.p.check_overflow());
        assert!(cpu.p.check_carry());
    }

    #[test]
    fn width_dispatch_follows_m() {
        let mut bus = SimpleBus::new();
        bus.write_word(OPERAND.get(), 0x0101);

        let mut cpu = cpu_8bit(false);
        cpu.regs.a.w = 0x1000;
        cpu.adc(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x1001);

        let mut cpu = cpu_16bit(false);
        cpu.regs.a.w = 0x1000;
        cpu.adc(&mut bus, OPERAND);
        assert_eq!(cpu.regs.a.w, 0x1101);
    }
}
