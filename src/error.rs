//! Error handling.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[must_use]
pub enum Error {
    #[error("invalid system palette (expected {expected} bytes, found {found})")]
    InvalidPalette { expected: usize, found: usize },
}
