use std::collections::HashMap;

use dmg_core::prelude::InputButton;
use sdl2::keyboard::Scancode;

use crate::settings::Settings;

/// Maps SDL scancodes to console button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Bind a scancode to a console button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the console button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Scancodes a settings file may reference by name, keyed the same way
/// the default bindings below are named.
fn scancode_by_name(name: &str) -> Option<Scancode> {
    match name {
        "Right" => Some(Scancode::Right),
        "Left" => Some(Scancode::Left),
        "Up" => Some(Scancode::Up),
        "Down" => Some(Scancode::Down),
        "X" => Some(Scancode::X),
        "Z" => Some(Scancode::Z),
        "RShift" => Some(Scancode::RShift),
        "Return" => Some(Scancode::Return),
        "Space" => Some(Scancode::Space),
        "LCtrl" => Some(Scancode::LCtrl),
        _ => None,
    }
}

fn default_scancode_for(button_name: &str) -> Option<Scancode> {
    match button_name {
        "Right" => Some(Scancode::Right),
        "Left" => Some(Scancode::Left),
        "Up" => Some(Scancode::Up),
        "Down" => Some(Scancode::Down),
        "A" => Some(Scancode::X),
        "B" => Some(Scancode::Z),
        "Select" => Some(Scancode::RShift),
        "Start" => Some(Scancode::Return),
        _ => None,
    }
}

/// Build a key map for the console's input buttons, using `settings`'
/// per-button overrides where present and falling back to the defaults
/// above otherwise.
pub fn build_key_map(buttons: &[InputButton], settings: &Settings) -> KeyMap {
    let mut km = KeyMap::new();
    for button in buttons {
        let scancode = settings
            .key_bindings
            .get(button.name)
            .and_then(|name| scancode_by_name(name))
            .or_else(|| default_scancode_for(button.name));
        if let Some(sc) = scancode {
            km.bind(sc, button.id);
        }
    }
    km
}
