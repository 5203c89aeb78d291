//! Timing and idle-detection switches.

use emu_core::Ticks;

/// Master ticks in one fast internal CPU cycle.
pub const ONE_CYCLE: Ticks = Ticks::new(6);

/// CPU core configuration.
///
/// The defaults match a cycle-accurate build with idle-loop detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    /// Charge internal cycles (read-modify-write, implied INC/DEC, shifts)
    /// to the cycle counter.
    pub var_cycles: bool,
    /// Maintain the wait address used by the scheduler's idle-loop
    /// detection. Handlers that change memory or registers clear it.
    pub cpu_shutdown: bool,
    /// Length of one internal cycle in master ticks.
    pub one_cycle: Ticks,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            var_cycles: true,
            cpu_shutdown: true,
            one_cycle: ONE_CYCLE,
        }
    }
}

impl CpuConfig {
    /// No cycle accounting and no idle detection.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            var_cycles: false,
            cpu_shutdown: false,
            one_cycle: ONE_CYCLE,
        }
    }
}
