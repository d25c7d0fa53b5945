use super::bus::{Bus, BusMaster};

/// Anything that advances by discrete time units (CPU, timer, display, APU).
pub trait Component {
    /// Advance by one unit of this component's clock domain.
    fn tick(&mut self) -> bool {
        false
    }
}

/// Extension for components that act as bus masters (the CPU, DMA).
pub trait BusMasterComponent: Component {
    type Bus: Bus + ?Sized;

    /// Execute one full instruction against the bus, returning elapsed
    /// machine cycles (1 cycle = 4 clock ticks). Unlike a T-state-stepped
    /// core this does not suspend mid-instruction — see the execution-model
    /// note in the core's design docs.
    fn step(&mut self, bus: &mut Self::Bus, master: BusMaster) -> u32;
}
