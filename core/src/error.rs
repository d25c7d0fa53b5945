//! Error types for the two failure classes §7 of the design docs treats as
//! fatal: cartridge loading and CPU decode. Out-of-range bus access and
//! soft compatibility gaps are non-fatal and are logged, not returned.

use std::fmt;

/// Errors from loading and validating a cartridge image.
#[derive(Debug)]
pub enum CartridgeError {
    Io(std::io::Error),
    /// ROM is too small to contain a header (must be at least one bank).
    TooSmall { size: usize },
    /// Byte 0x0147 names a cartridge type this core does not implement.
    UnsupportedMbc { type_byte: u8 },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error loading cartridge: {e}"),
            Self::TooSmall { size } => {
                write!(f, "cartridge image too small ({size} bytes, need at least 0x8000)")
            }
            Self::UnsupportedMbc { type_byte } => {
                write!(f, "unsupported cartridge type byte 0x{type_byte:02X}")
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

impl From<std::io::Error> for CartridgeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Fatal core errors: decode failures whose post-state is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// An opcode with no defined behavior on this CPU. The CB-prefixed
    /// table has no undefined entries, so this only fires on the main table.
    UndefinedOpcode { pc: u16, opcode: u8 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedOpcode { pc, opcode } => {
                write!(f, "undefined opcode 0x{opcode:02X} at 0x{pc:04X}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
