/// Describes a single input button the console accepts.
pub struct InputButton {
    /// Bit position in the button latch, passed to `set_input()`.
    pub id: u8,
    /// Human-readable name for display/configuration (e.g., "Start", "A").
    pub name: &'static str,
}

/// Host-facing interface for the emulated console.
///
/// The frontend is a pure presentation layer that does not know about the
/// bus, cartridge, or CPU — it only calls through this trait, mirroring the
/// host/emulation split the rest of this codebase uses for its machines.
pub trait Machine {
    /// Native display resolution as (width, height) in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Run until the display timing subsystem flushes one frame.
    fn run_frame(&mut self);

    /// Render the current video state into a palette-indexed buffer, one
    /// byte per pixel (values 0..=3). The buffer must be at least
    /// `width * height` bytes. RGB decoding is a host concern.
    fn render_frame(&self, buffer: &mut [u8]);

    /// Handle an input event. `button` is an id from `input_map()`.
    /// Called per-event, not per-frame; each call latches state for the
    /// next `run_frame()`.
    fn set_input(&mut self, button: u8, pressed: bool);

    /// The set of buttons this console accepts.
    fn input_map(&self) -> &[InputButton];

    /// Reset to power-on state (keeping the loaded cartridge).
    fn reset(&mut self);

    /// Battery-backed external RAM, if the cartridge has any.
    fn save_ram(&self) -> Option<&[u8]>;

    /// Restore battery-backed external RAM from a prior `save_ram()`.
    fn load_ram(&mut self, data: &[u8]);
}
