//! 5A22 register file.

/// A 16-bit register with byte views.
///
/// A, X and Y are all 16 bits wide, but the M and X status bits shrink them
/// to 8 bits. 8-bit instructions touch only the low byte and leave the high
/// byte alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reg16 {
    /// Whole word.
    pub w: u16,
}

impl Reg16 {
    #[must_use]
    pub const fn new(w: u16) -> Self {
        Self { w }
    }

    /// Low byte.
    #[must_use]
    pub const fn l(self) -> u8 {
        self.w as u8
    }

    /// High byte.
    #[must_use]
    pub const fn h(self) -> u8 {
        (self.w >> 8) as u8
    }

    /// Replace the low byte, keeping the high byte.
    pub fn set_l(&mut self, value: u8) {
        self.w = (self.w & 0xFF00) | u16::from(value);
    }

    /// Replace the high byte, keeping the low byte.
    pub fn set_h(&mut self, value: u8) {
        self.w = (self.w & 0x00FF) | (u16::from(value) << 8);
    }
}

impl From<u16> for Reg16 {
    fn from(w: u16) -> Self {
        Self { w }
    }
}

/// The programmer-visible registers other than P.
///
/// P lives in [`crate::Status`] because its flags are stored in the form
/// the instruction handlers produce them rather than as a packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator (C in 16-bit terms, AL/AH as bytes).
    pub a: Reg16,
    /// X index register.
    pub x: Reg16,
    /// Y index register.
    pub y: Reg16,
    /// Stack pointer.
    pub s: Reg16,
    /// Direct page register.
    pub d: Reg16,
    /// Program counter within the program bank.
    pub pc: u16,
    /// Program bank.
    pub pb: u8,
    /// Data bank.
    pub db: u8,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Registers as they stand after reset.
    ///
    /// A, X and Y are undefined on hardware; we use 0. The stack lives in
    /// page 1 and D, PB and DB are cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: Reg16::new(0),
            x: Reg16::new(0),
            y: Reg16::new(0),
            s: Reg16::new(0x01FF),
            d: Reg16::new(0),
            pc: 0,
            pb: 0,
            db: 0,
        }
    }
}
