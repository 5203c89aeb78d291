//! 5A22 CPU state.
//!
//! The core does not fetch or decode on its own. An external loop resolves
//! each instruction's effective address and calls the matching handler (or
//! [`Cpu5a22::execute`]); handlers run to completion, so the instruction
//! boundary is the only point at which state is consistent for observers.

use emu_core::{Observable, Ticks, Value};

use crate::config::CpuConfig;
use crate::flags::{C, D, I, M, N, V, X, Z};
use crate::{OpAddress, Registers, Status};

/// The Ricoh 5A22 CPU core.
#[derive(Debug, Clone)]
pub struct Cpu5a22 {
    /// A, X, Y, S, D, PC and banks.
    pub regs: Registers,

    /// Processor status.
    pub p: Status,

    /// Emulation mode (E). Forces 8-bit A and index registers.
    emulation: bool,

    /// Elapsed master ticks charged by handlers.
    cycles: Ticks,

    /// Address the scheduler suspects the CPU is polling.
    wait_address: Option<OpAddress>,

    config: CpuConfig,
}

impl Default for Cpu5a22 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu5a22 {
    /// Create a CPU in reset state with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    #[must_use]
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(),
            p: Status::new(),
            emulation: true,
            cycles: Ticks::ZERO,
            wait_address: None,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    pub fn set_config(&mut self, config: CpuConfig) {
        log::debug!("5A22 config changed: {config:?}");
        self.config = config;
        if !config.cpu_shutdown {
            self.wait_address = None;
        }
    }

    /// Return to the post-reset state: emulation mode, 8-bit registers,
    /// IRQs disabled, binary arithmetic.
    pub fn reset(&mut self) {
        log::debug!("5A22 reset");
        self.regs = Registers::new();
        self.p = Status::new();
        self.emulation = true;
        self.cycles = Ticks::ZERO;
        self.wait_address = None;
    }

    // ========================================================================
    // Mode and status
    // ========================================================================

    #[must_use]
    pub fn is_emulation(&self) -> bool {
        self.emulation
    }

    /// Enter or leave emulation mode, as XCE does.
    ///
    /// Entering forces M and X, clears the index high bytes and pins the
    /// stack to page 1.
    pub fn set_emulation(&mut self, emulation: bool) {
        self.emulation = emulation;
        if emulation {
            self.p.set_if(M | X, true);
            self.regs.x.set_h(0);
            self.regs.y.set_h(0);
            self.regs.s.set_h(0x01);
        }
    }

    /// Accumulator and memory operands are 8 bits.
    #[must_use]
    pub fn is_8bit_a(&self) -> bool {
        self.emulation || self.p.is_set(M)
    }

    /// X and Y are 8 bits.
    #[must_use]
    pub fn is_8bit_index(&self) -> bool {
        self.emulation || self.p.is_set(X)
    }

    /// Packed P byte.
    #[must_use]
    pub fn status(&self) -> u8 {
        self.p.to_byte()
    }

    /// Load P from a byte, as PLP/REP/SEP do.
    ///
    /// In emulation mode M and X always read as set. Whenever X ends up set,
    /// the index high bytes are cleared.
    pub fn set_status(&mut self, p: u8) {
        self.p = Status::from_byte(p);
        if self.emulation {
            self.p.set_if(M | X, true);
        }
        if self.p.is_set(X) {
            self.regs.x.set_h(0);
            self.regs.y.set_h(0);
        }
    }

    // ========================================================================
    // Timing and idle detection
    // ========================================================================

    /// Master ticks charged so far.
    #[must_use]
    pub fn cycles(&self) -> Ticks {
        self.cycles
    }

    /// Charge one internal cycle when variable-cycle accounting is on.
    pub(crate) fn add_internal_cycle(&mut self) {
        if self.config.var_cycles {
            self.cycles += self.config.one_cycle;
        }
    }

    #[must_use]
    pub fn wait_address(&self) -> Option<OpAddress> {
        self.wait_address
    }

    /// Record the address of a suspected polling loop. Ignored unless idle
    /// detection is enabled.
    pub fn set_wait_address(&mut self, address: OpAddress) {
        if self.config.cpu_shutdown {
            self.wait_address = Some(address);
        }
    }

    /// Forget any polling loop: the state it was waiting on may have moved.
    pub(crate) fn clear_wait_address(&mut self) {
        if !self.config.cpu_shutdown {
            return;
        }
        if let Some(address) = self.wait_address.take() {
            log::debug!("5A22 wait address {address} invalidated");
        }
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl Observable for Cpu5a22 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "a" => Some(self.regs.a.w.into()),
            "x" => Some(self.regs.x.w.into()),
            "y" => Some(self.regs.y.w.into()),
            "s" | "sp" => Some(self.regs.s.w.into()),
            "d" => Some(self.regs.d.w.into()),
            "pc" => Some(self.regs.pc.into()),
            "pb" => Some(self.regs.pb.into()),
            "db" => Some(self.regs.db.into()),
            "p" | "status" => Some(self.status().into()),
            "e" => Some(self.emulation.into()),
            "flags.c" | "c" => Some(self.p.is_set(C).into()),
            "flags.z" | "z" => Some(self.p.is_set(Z).into()),
            "flags.i" | "i" => Some(self.p.is_set(I).into()),
            "flags.d" => Some(self.p.is_set(D).into()),
            "flags.x" => Some(self.p.is_set(X).into()),
            "flags.m" => Some(self.p.is_set(M).into()),
            "flags.v" | "v" => Some(self.p.is_set(V).into()),
            "flags.n" | "n" => Some(self.p.is_set(N).into()),
            "cycles" => Some(self.cycles.get().into()),
            "wait_address" => Some(self.wait_address.map(OpAddress::get).into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "a", "x", "y", "s", "d", "pc", "pb", "db", "p", "e", "flags.c", "flags.z", "flags.i",
            "flags.d", "flags.x", "flags.m", "flags.v", "flags.n", "cycles", "wait_address",
        ]
    }
}
