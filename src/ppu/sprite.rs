//! Per-scanline sprite slot entry.
//!
//! See: <https://www.nesdev.org/wiki/PPU_OAM>

use std::fmt;

/// One of the up-to-eight sprites selected for a scanline, with its pattern
/// row already decoded into eight 4-bit pixels (palette in bits 2-3, color in
/// bits 0-1), leftmost pixel in the top nibble.
#[derive(Copy, Clone)]
#[must_use]
pub struct Sprite {
    /// Index of this entry in OAM. Index 0 participates in sprite-zero-hit.
    pub index: u8,
    pub x: u32,
    pub y: u32,
    pub tile_index: u8,
    pub attr: u8,
    pub pattern: u32,
    /// Attribute bit 5: sprite renders behind an opaque background.
    pub bg_priority: bool,
}

impl Sprite {
    pub const fn new() -> Self {
        Self {
            index: 0x00,
            x: 0xFF,
            y: 0xFF,
            tile_index: 0xFF,
            attr: 0x00,
            pattern: 0x0000_0000,
            bg_priority: true,
        }
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("index", &self.index)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("tile_index", &format_args!("${:02X}", &self.tile_index))
            .field("attr", &format_args!("${:02X}", &self.attr))
            .field("pattern", &format_args!("${:08X}", &self.pattern))
            .field("bg_priority", &self.bg_priority)
            .finish()
    }
}
