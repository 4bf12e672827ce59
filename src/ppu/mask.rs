//! PPUMASK register implementation.
//!
//! See: <https://wiki.nesdev.org/w/index.php/PPU_registers#PPUMASK>

use crate::common::{Reset, ResetKind};
use bitflags::bitflags;

bitflags! {
    // $2001 PPUMASK (write-only)
    //
    // BGRs bMmG
    // |||| |||+- Grayscale (0: normal color, 1: produce a grayscale display)
    // |||| ||+-- 1: Show background in leftmost 8 pixels of screen, 0: Hide
    // |||| |+--- 1: Show sprites in leftmost 8 pixels of screen, 0: Hide
    // |||| +---- 1: Show background
    // |||+------ 1: Show sprites
    // ||+------- Emphasize red
    // |+-------- Emphasize green
    // +--------- Emphasize blue
    #[derive(Default, Debug, Copy, Clone)]
    #[must_use]
    pub struct Mask: u8 {
        const GRAYSCALE = 0x01;
        const SHOW_LEFT_BG = 0x02;
        const SHOW_LEFT_SPR = 0x04;
        const SHOW_BG = 0x08;
        const SHOW_SPR = 0x10;
        const EMPHASIZE_RED = 0x20;
        const EMPHASIZE_GREEN = 0x40;
        const EMPHASIZE_BLUE = 0x80;
    }
}

impl Mask {
    pub const fn new() -> Self {
        Self::empty()
    }

    #[inline]
    pub fn write(&mut self, val: u8) {
        *self = Self::from_bits_truncate(val);
    }

    /// Mask ANDed into the final palette index before color lookup.
    #[inline]
    #[must_use]
    pub const fn grayscale(&self) -> u8 {
        if self.contains(Self::GRAYSCALE) {
            0x30
        } else {
            0x3F
        }
    }

    #[inline]
    #[must_use]
    pub const fn show_left_bg(&self) -> bool {
        self.contains(Self::SHOW_LEFT_BG)
    }

    #[inline]
    #[must_use]
    pub const fn show_left_spr(&self) -> bool {
        self.contains(Self::SHOW_LEFT_SPR)
    }

    #[inline]
    #[must_use]
    pub const fn show_bg(&self) -> bool {
        self.contains(Self::SHOW_BG)
    }

    #[inline]
    #[must_use]
    pub const fn show_spr(&self) -> bool {
        self.contains(Self::SHOW_SPR)
    }

    #[inline]
    #[must_use]
    pub const fn rendering_enabled(&self) -> bool {
        self.show_bg() || self.show_spr()
    }

    /// Color emphasis bits, BGR order in bits 0-2.
    #[inline]
    #[must_use]
    pub const fn emphasis(&self) -> u8 {
        self.bits() >> 5
    }
}

impl Reset for Mask {
    fn reset(&mut self, _kind: ResetKind) {
        self.write(0);
    }
}
