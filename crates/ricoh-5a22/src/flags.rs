//! 5A22 processor status register (P).
//!
//! Bit layout in native mode: `N V M X D I Z C`.
//!
//! Carry, zero, negative and overflow change on almost every instruction, so
//! they are held unpacked. Zero and negative are kept the way the ALU latches
//! them: a zero *sense* byte (Z is set when the sense is 0) and a negative
//! byte (N is its bit 7). Handlers store the result bytes directly and the
//! architectural flags are derived on demand.

/// Carry.
pub const C: u8 = 0x01;

/// Zero.
pub const Z: u8 = 0x02;

/// IRQ disable.
pub const I: u8 = 0x04;

/// Decimal mode: ADC/SBC operate on packed BCD.
pub const D: u8 = 0x08;

/// Index width: set means X and Y are 8 bits.
pub const X: u8 = 0x10;

/// Accumulator/memory width: set means A and memory operands are 8 bits.
pub const M: u8 = 0x20;

/// Overflow.
pub const V: u8 = 0x40;

/// Negative.
pub const N: u8 = 0x80;

const MODE_BITS: u8 = I | D | X | M;

/// Processor status register.
#[derive(Debug, Clone, Copy)]
pub struct Status {
    carry: bool,
    /// Z is set exactly when this is zero.
    zero: u8,
    /// N is bit 7.
    negative: u8,
    overflow: bool,
    /// I, D, X and M, in their P positions.
    mode: u8,
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.to_byte() == other.to_byte()
    }
}

impl Eq for Status {}

impl Status {
    /// Status after reset: M, X and I set, everything else clear.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_byte(M | X | I)
    }

    /// Unpack a P byte.
    #[must_use]
    pub const fn from_byte(p: u8) -> Self {
        Self {
            carry: p & C != 0,
            zero: if p & Z != 0 { 0 } else { 1 },
            negative: p & N,
            overflow: p & V != 0,
            mode: p & MODE_BITS,
        }
    }

    /// Pack into a P byte.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        let mut p = self.mode;
        if self.carry {
            p |= C;
        }
        if self.zero == 0 {
            p |= Z;
        }
        if self.overflow {
            p |= V;
        }
        p | (self.negative & N)
    }

    /// Check any flag by mask.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.to_byte() & flag != 0
    }

    /// Set or clear every flag in `flags`.
    pub fn set_if(&mut self, flags: u8, condition: bool) {
        if flags & C != 0 {
            self.carry = condition;
        }
        if flags & Z != 0 {
            self.zero = u8::from(!condition);
        }
        if flags & V != 0 {
            self.overflow = condition;
        }
        if flags & N != 0 {
            self.negative = if condition { N } else { 0 };
        }
        if condition {
            self.mode |= flags & MODE_BITS;
        } else {
            self.mode &= !(flags & MODE_BITS);
        }
    }

    #[must_use]
    pub const fn check_carry(self) -> bool {
        self.carry
    }

    /// Carry as an addend.
    #[must_use]
    pub const fn carry_bit(self) -> u8 {
        self.carry as u8
    }

    pub fn set_carry(&mut self) {
        self.carry = true;
    }

    pub fn clear_carry(&mut self) {
        self.carry = false;
    }

    pub fn set_carry_if(&mut self, condition: bool) {
        self.carry = condition;
    }

    #[must_use]
    pub const fn check_decimal(self) -> bool {
        self.mode & D != 0
    }

    #[must_use]
    pub const fn check_overflow(self) -> bool {
        self.overflow
    }

    pub fn set_overflow(&mut self) {
        self.overflow = true;
    }

    pub fn clear_overflow(&mut self) {
        self.overflow = false;
    }

    pub fn set_overflow_if(&mut self, condition: bool) {
        self.overflow = condition;
    }

    /// Architectural Z.
    #[must_use]
    pub const fn check_zero(self) -> bool {
        self.zero == 0
    }

    /// Architectural N.
    #[must_use]
    pub const fn check_negative(self) -> bool {
        self.negative & N != 0
    }

    /// Raw zero sense as last latched.
    #[must_use]
    pub const fn zero_sense(self) -> u8 {
        self.zero
    }

    /// Latch a zero sense directly. Z reads set iff `sense == 0`.
    pub fn set_zero_sense(&mut self, sense: u8) {
        self.zero = sense;
    }

    /// Latch the byte whose bit 7 becomes N.
    pub fn set_negative_byte(&mut self, byte: u8) {
        self.negative = byte;
    }

    /// Z and N from an 8-bit result.
    pub fn set_zn8(&mut self, value: u8) {
        self.zero = value;
        self.negative = value;
    }

    /// Z and N from a 16-bit result. N comes from the high byte.
    pub fn set_zn16(&mut self, value: u16) {
        self.zero = u8::from(value != 0);
        self.negative = (value >> 8) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_round_trips_through_unpacked_form() {
        for p in 0..=0xFF_u8 {
            assert_eq!(Status::from_byte(p).to_byte(), p);
        }
    }

    #[test]
    fn zero_sense_is_inverted() {
        let mut s = Status::new();
        s.set_zero_sense(0x40);
        assert!(!s.check_zero());
        s.set_zero_sense(0);
        assert!(s.check_zero());
    }

    #[test]
    fn zn16_uses_whole_word_for_zero_and_high_byte_for_negative() {
        let mut s = Status::new();
        s.set_zn16(0x0080);
        assert!(!s.check_zero());
        assert!(!s.check_negative());
        s.set_zn16(0x8000);
        assert!(s.check_negative());
        assert!(!s.check_zero());
        s.set_zn16(0);
        assert!(s.check_zero());
    }

    #[test]
    fn statuses_compare_by_architectural_flags() {
        let mut a = Status::new();
        let mut b = Status::new();
        a.set_zero_sense(0x01);
        b.set_zero_sense(0x7F);
        assert_eq!(a, b);
    }

    #[test]
    fn set_if_routes_mode_bits() {
        let mut s = Status::from_byte(0);
        s.set_if(D, true);
        assert!(s.check_decimal());
        s.set_if(M | X, true);
        assert_eq!(s.to_byte(), D | M | X);
        s.set_if(D, false);
        assert!(!s.check_decimal());
    }

    #[test]
    fn set_if_applies_every_bit_of_a_mask() {
        let mut s = Status::from_byte(0);
        s.set_if(C | Z, true);
        assert!(s.check_carry());
        assert!(s.check_zero());
        assert_eq!(s.to_byte(), C | Z);

        s.set_if(N | V | D | I, true);
        assert_eq!(s.to_byte(), C | Z | I | D | V | N);

        s.set_if(C | N | D, false);
        assert!(!s.check_carry());
        assert!(!s.check_negative());
        assert!(!s.check_decimal());
        assert_eq!(s.to_byte(), Z | I | V);
    }
}
