//! Traits shared among emulation components.

/// Whether a reset clears power-on state or only what the RES pin clears.
///
/// See: <https://www.nesdev.org/wiki/PPU_power_up_state>
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum ResetKind {
    Soft,
    Hard,
}

pub trait Reset {
    fn reset(&mut self, _kind: ResetKind) {}
}

pub trait Clock {
    fn clock(&mut self) -> usize {
        0
    }
}
