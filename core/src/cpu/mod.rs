use crate::core::component::BusMasterComponent;

/// Interface a console's CPU core presents to the rest of the system.
pub trait Cpu: BusMasterComponent {
    /// Reset to power-on register values.
    fn reset(&mut self);

    /// Whether the CPU is idling in HALT, waiting for an interrupt.
    fn is_halted(&self) -> bool;
}

pub mod sm83;
pub mod state;

pub use sm83::Sm83;
pub use state::{CpuStateTrait, Sm83State};
