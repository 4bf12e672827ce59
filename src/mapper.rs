//! Cartridge collaborator interface.
//!
//! The PPU owns its nametable and palette RAM but pattern-table accesses at
//! `$0000-$1FFF` belong to the cartridge, which also decides how the four
//! logical nametables fold into the console-internal 2 KiB.
//!
//! See: <https://wiki.nesdev.org/w/index.php/Mapper>

use crate::ppu::Mirroring;

/// CHR/pattern-table access and nametable mirroring, as wired by a cartridge.
pub trait Mapper {
    /// Read a pattern-table byte at `$0000-$1FFF` without side effects.
    fn peek_chr(&self, addr: u16) -> u8;

    /// Read a pattern-table byte at `$0000-$1FFF`. Mappers with read-sensitive
    /// state (scanline counters and the like) hook this.
    fn read_chr(&mut self, addr: u16) -> u8 {
        self.peek_chr(addr)
    }

    /// Write a pattern-table byte. Only meaningful for CHR-RAM boards.
    fn write_chr(&mut self, addr: u16, val: u8);

    /// Current nametable mirroring mode.
    fn mirroring(&self) -> Mirroring {
        Mirroring::default()
    }
}

/// Stand-in for a PPU with no cartridge loaded. Pattern reads float to zero.
#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct Empty;

impl Mapper for Empty {
    fn peek_chr(&self, _addr: u16) -> u8 {
        0x00
    }

    fn write_chr(&mut self, _addr: u16, _val: u8) {}
}
