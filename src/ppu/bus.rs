//! PPU Memory/Data Bus.
//!
//! Pattern tables at `$0000-$1FFF` belong to the cartridge; the 2 KiB of
//! console-internal nametable RAM (CIRAM) backs `$2000-$3EFF` through the
//! cartridge's mirroring mode; palette RAM backs `$3F00-$3FFF` with its own
//! mirror rule. Everything is reduced modulo `$4000` first.

use crate::{
    mapper::{Empty, Mapper},
    ppu::Mirroring,
};
use std::fmt;

#[must_use]
pub struct Bus {
    pub mapper: Box<dyn Mapper>,
    pub ciram: [u8; Self::CIRAM_SIZE],
    pub palette: [u8; Self::PALETTE_SIZE],
    /// `$2007` PPUDATA read buffer.
    pub buffer: u8,
}

impl Bus {
    pub const CIRAM_SIZE: usize = 0x0800; // Two 1k nametables
    pub const PALETTE_SIZE: usize = 32; // 32 colors loaded at a time

    const ADDR_MASK: u16 = 0x3FFF;

    pub fn new() -> Self {
        Self {
            mapper: Box::new(Empty),
            ciram: [0x00; Self::CIRAM_SIZE],
            palette: [0x00; Self::PALETTE_SIZE],
            buffer: 0x00,
        }
    }

    #[inline]
    pub fn mirroring(&self) -> Mirroring {
        self.mapper.mirroring()
    }

    // Maps $2000-$3EFF to a CIRAM index based on mirroring mode
    //
    // Ciram:           [ A ] [ B ]
    //
    // Horizontal:      [ A ] [ a ]
    //                  [ B ] [ b ]
    //
    // Vertical:        [ A ] [ B ]
    //                  [ a ] [ b ]
    //
    // Single Screen A: [ A ] [ a ]
    //                  [ a ] [ a ]
    //
    // Single Screen B: [ b ] [ B ]
    //                  [ b ] [ b ]
    pub const fn ciram_index(addr: u16, mirroring: Mirroring) -> usize {
        let addr = addr & 0x0FFF; // $3000-$3EFF mirrors $2000-$2EFF
        let table = addr >> 10; // logical nametable, 0-3
        let offset = (addr & 0x03FF) as usize;
        let page = match mirroring {
            Mirroring::Vertical => table & 0x01,
            Mirroring::Horizontal => table >> 1,
            Mirroring::SingleScreenA => 0,
            Mirroring::SingleScreenB => 1,
        };
        page as usize * 0x0400 + offset
    }

    // Palette addresses fold to 32 bytes; entry 0 of each sprite palette
    // mirrors entry 0 of the matching background palette
    pub const fn palette_index(addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 0x10 && addr & 0x03 == 0 {
            addr - 0x10
        } else {
            addr
        }
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        let addr = addr & Self::ADDR_MASK;
        match addr {
            0x0000..=0x1FFF => self.mapper.read_chr(addr),
            0x2000..=0x3EFF => self.ciram[Self::ciram_index(addr, self.mirroring())],
            0x3F00..=0x3FFF => self.palette[Self::palette_index(addr)],
            _ => unreachable!("PPU bus addresses are 14 bits"),
        }
    }

    #[must_use]
    pub fn peek(&self, addr: u16) -> u8 {
        let addr = addr & Self::ADDR_MASK;
        match addr {
            0x0000..=0x1FFF => self.mapper.peek_chr(addr),
            0x2000..=0x3EFF => self.ciram[Self::ciram_index(addr, self.mirroring())],
            0x3F00..=0x3FFF => self.palette[Self::palette_index(addr)],
            _ => unreachable!("PPU bus addresses are 14 bits"),
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        let addr = addr & Self::ADDR_MASK;
        match addr {
            0x0000..=0x1FFF => self.mapper.write_chr(addr, val),
            0x2000..=0x3EFF => self.ciram[Self::ciram_index(addr, self.mirroring())] = val,
            0x3F00..=0x3FFF => self.palette[Self::palette_index(addr)] = val,
            _ => unreachable!("PPU bus addresses are 14 bits"),
        }
    }

    #[inline]
    pub fn read_palette(&self, addr: u16) -> u8 {
        self.palette[Self::palette_index(addr)]
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("mirroring", &self.mirroring())
            .field("buffer", &format_args!("${:02X}", &self.buffer))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ciram_mirror_horizontal() {
        assert_eq!(Bus::ciram_index(0x2000, Mirroring::Horizontal), 0x0000);
        assert_eq!(Bus::ciram_index(0x2005, Mirroring::Horizontal), 0x0005);
        assert_eq!(Bus::ciram_index(0x23FF, Mirroring::Horizontal), 0x03FF);
        assert_eq!(Bus::ciram_index(0x2400, Mirroring::Horizontal), 0x0000);
        assert_eq!(Bus::ciram_index(0x27FF, Mirroring::Horizontal), 0x03FF);
        assert_eq!(Bus::ciram_index(0x2800, Mirroring::Horizontal), 0x0400);
        assert_eq!(Bus::ciram_index(0x2BFF, Mirroring::Horizontal), 0x07FF);
        assert_eq!(Bus::ciram_index(0x2C00, Mirroring::Horizontal), 0x0400);
        assert_eq!(Bus::ciram_index(0x2FFF, Mirroring::Horizontal), 0x07FF);
    }

    #[test]
    fn ciram_mirror_vertical() {
        assert_eq!(Bus::ciram_index(0x2000, Mirroring::Vertical), 0x0000);
        assert_eq!(Bus::ciram_index(0x2005, Mirroring::Vertical), 0x0005);
        assert_eq!(Bus::ciram_index(0x23FF, Mirroring::Vertical), 0x03FF);
        assert_eq!(Bus::ciram_index(0x2400, Mirroring::Vertical), 0x0400);
        assert_eq!(Bus::ciram_index(0x27FF, Mirroring::Vertical), 0x07FF);
        assert_eq!(Bus::ciram_index(0x2800, Mirroring::Vertical), 0x0000);
        assert_eq!(Bus::ciram_index(0x2BFF, Mirroring::Vertical), 0x03FF);
        assert_eq!(Bus::ciram_index(0x2C00, Mirroring::Vertical), 0x0400);
        assert_eq!(Bus::ciram_index(0x2FFF, Mirroring::Vertical), 0x07FF);
    }

    #[test]
    fn ciram_mirror_single_screens() {
        assert_eq!(Bus::ciram_index(0x2000, Mirroring::SingleScreenA), 0x0000);
        assert_eq!(Bus::ciram_index(0x2400, Mirroring::SingleScreenA), 0x0000);
        assert_eq!(Bus::ciram_index(0x2800, Mirroring::SingleScreenA), 0x0000);
        assert_eq!(Bus::ciram_index(0x2C05, Mirroring::SingleScreenA), 0x0005);
        assert_eq!(Bus::ciram_index(0x2000, Mirroring::SingleScreenB), 0x0400);
        assert_eq!(Bus::ciram_index(0x2400, Mirroring::SingleScreenB), 0x0400);
        assert_eq!(Bus::ciram_index(0x2800, Mirroring::SingleScreenB), 0x0400);
        assert_eq!(Bus::ciram_index(0x2C05, Mirroring::SingleScreenB), 0x0405);
    }

    #[test]
    fn ciram_mirror_folds_3000_range() {
        assert_eq!(
            Bus::ciram_index(0x3000, Mirroring::Vertical),
            Bus::ciram_index(0x2000, Mirroring::Vertical)
        );
        assert_eq!(
            Bus::ciram_index(0x3EFF, Mirroring::Vertical),
            Bus::ciram_index(0x2EFF, Mirroring::Vertical)
        );
    }

    #[test]
    fn palette_mirror_folds_sprite_zero_entries() {
        assert_eq!(Bus::palette_index(0x3F00), 0x00);
        assert_eq!(Bus::palette_index(0x3F10), 0x00);
        assert_eq!(Bus::palette_index(0x3F14), 0x04);
        assert_eq!(Bus::palette_index(0x3F18), 0x08);
        assert_eq!(Bus::palette_index(0x3F1C), 0x0C);
        assert_eq!(Bus::palette_index(0x3F11), 0x11);
        assert_eq!(Bus::palette_index(0x3F1F), 0x1F);
        // repeats above $3F1F
        assert_eq!(Bus::palette_index(0x3F20), 0x00);
        assert_eq!(Bus::palette_index(0x3FFF), 0x1F);
    }

    #[test]
    fn palette_mirror_holds_on_every_access() {
        let mut bus = Bus::new();
        bus.write(0x3F10, 0xAB);
        assert_eq!(bus.read(0x3F00), 0xAB);
        bus.write(0x3F04, 0x3C);
        assert_eq!(bus.read(0x3F24), 0x3C);
    }
}
