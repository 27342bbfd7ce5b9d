//! Error types for the carver
//!
//! Two kinds cover the core contract, a bad coordinate to the energy
//! query and a seam a removal cannot apply, plus one for the carve
//! driver's target-size check.  All of them are surfaced straight to
//! the caller; nothing here is retried or recovered internally.

use failure::Fail;

/// Everything that can go wrong while carving.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// A coordinate argument fell outside the current picture.
    #[fail(display = "pixel coordinates out of bounds: x = {}, y = {}", x, y)]
    OutOfBounds { x: u32, y: u32 },

    /// A seam handed to a removal operation is inconsistent with the
    /// current picture geometry.  Detected before any mutation: a
    /// rejected removal leaves the picture and its energy field
    /// untouched.
    #[fail(display = "invalid seam: {}", _0)]
    InvalidSeam(String),

    /// The carve driver was asked for a size it cannot reach by
    /// removing seams.
    #[fail(
        display = "cannot carve a {}x{} picture to {}x{}",
        width, height, target_width, target_height
    )]
    BadTarget {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}

/// The crate's result alias.
pub type Result<T> = std::result::Result<T, CarveError>;
