#![doc = include_str!("../README.md")]

pub mod common;
pub mod error;
pub mod mapper;
pub mod ppu;

pub mod prelude {
    //! Re-exports of the common structs/enums/traits for driving the PPU.

    pub use crate::{
        common::{Clock, Reset, ResetKind},
        error::{Error, Result},
        mapper::Mapper,
        ppu::{Mirroring, Ppu},
    };
}
