//! Memory and I/O bus interface.

/// Mask for the 24-bit address space of the 65c816 family.
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Memory bus seen by a CPU core.
///
/// The bus handles address decoding and routing to the appropriate device.
/// Addresses are linear 24-bit effective addresses; anything above bit 23 is
/// ignored. Address validity is the bus's problem, never the caller's.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u32) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u32, value: u8);

    /// Read a little-endian word. The high byte comes from the next linear
    /// address, wrapping at the top of the 24-bit space.
    fn read_word(&mut self, address: u32) -> u16 {
        let low = self.read(address & ADDRESS_MASK);
        let high = self.read(address.wrapping_add(1) & ADDRESS_MASK);
        u16::from_le_bytes([low, high])
    }

    /// Write a little-endian word, low byte first.
    fn write_word(&mut self, address: u32, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(address & ADDRESS_MASK, low);
        self.write(address.wrapping_add(1) & ADDRESS_MASK, high);
    }
}

/// Flat RAM covering the whole 24-bit address space.
///
/// No mirroring, no I/O. Used by tests and tools that just need memory.
pub struct SimpleBus {
    ram: Vec<u8>,
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleBus {
    /// Create a bus with all 16 MiB zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: vec![0; ADDRESS_MASK as usize + 1],
        }
    }

    /// Copy `data` into memory starting at `address`, wrapping at the top.
    pub fn load(&mut self, address: u32, data: &[u8]) {
        let mut addr = address & ADDRESS_MASK;
        for &byte in data {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1) & ADDRESS_MASK;
        }
    }

    /// Read without side effects.
    #[must_use]
    pub fn peek(&self, address: u32) -> u8 {
        self.ram[(address & ADDRESS_MASK) as usize]
    }

    /// Read a little-endian word without side effects.
    #[must_use]
    pub fn peek_word(&self, address: u32) -> u16 {
        u16::from_le_bytes([self.peek(address), self.peek(address.wrapping_add(1))])
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u32) -> u8 {
        self.peek(address)
    }

    fn write(&mut self, address: u32, value: u8) {
        self.ram[(address & ADDRESS_MASK) as usize] = value;
    }
}
