//! PPUCTRL register implementation.
//!
//! See: <https://wiki.nesdev.org/w/index.php/PPU_registers#PPUCTRL>

use crate::common::{Reset, ResetKind};
use bitflags::bitflags;

bitflags! {
    // $2000 PPUCTRL (write-only)
    //
    // VPHB SINN
    // |||| ||++- Nametable Select: 0b00 = $2000 (upper-left); 0b01 = $2400 (upper-right);
    // |||| ||                      0b10 = $2800 (lower-left); 0b11 = $2C00 (lower-right)
    // |||| |+--- VRAM Increment Mode: 0 = add 1, going across; 1 = add 32, going down
    // |||| +---- Sprite Pattern Select for 8x8: 0 = $0000, 1 = $1000, ignored in 8x16 mode
    // |||+------ Background Pattern Select: 0 = $0000, 1 = $1000
    // ||+------- Sprite Height: 0 = 8x8, 1 = 8x16
    // |+-------- PPU Master/Slave: 0 = read from EXT, 1 = write to EXT
    // +--------- NMI Enable: NMI at next vblank: 0 = off, 1 = on
    #[derive(Default, Debug, Copy, Clone)]
    #[must_use]
    pub struct Ctrl: u8 {
        const NAMETABLE1 = 0x01;
        const NAMETABLE2 = 0x02;
        const VRAM_INCREMENT = 0x04;
        const SPR_SELECT = 0x08;
        const BG_SELECT = 0x10;
        const SPR_HEIGHT = 0x20;
        const MASTER_SLAVE = 0x40;
        const NMI_ENABLE = 0x80;
    }
}

impl Ctrl {
    pub const fn new() -> Self {
        Self::empty()
    }

    #[inline]
    pub fn write(&mut self, val: u8) {
        *self = Self::from_bits_truncate(val);
    }

    /// Sprite pattern-table base for 8x8 sprites: `$0000` or `$1000`.
    #[inline]
    #[must_use]
    pub const fn spr_select(&self) -> u16 {
        if self.contains(Self::SPR_SELECT) {
            0x1000
        } else {
            0x0000
        }
    }

    /// Background pattern-table base: `$0000` or `$1000`.
    #[inline]
    #[must_use]
    pub const fn bg_select(&self) -> u16 {
        if self.contains(Self::BG_SELECT) {
            0x1000
        } else {
            0x0000
        }
    }

    /// Sprite height in pixels: 8 or 16.
    #[inline]
    #[must_use]
    pub const fn spr_height(&self) -> u16 {
        if self.contains(Self::SPR_HEIGHT) { 16 } else { 8 }
    }

    /// `$2007` address increment: 1 (going across) or 32 (going down).
    #[inline]
    #[must_use]
    pub const fn vram_increment(&self) -> u16 {
        if self.contains(Self::VRAM_INCREMENT) {
            32
        } else {
            1
        }
    }

    #[inline]
    #[must_use]
    pub const fn nmi_enabled(&self) -> bool {
        self.contains(Self::NMI_ENABLE)
    }
}

impl Reset for Ctrl {
    fn reset(&mut self, _kind: ResetKind) {
        self.write(0);
    }
}
