// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by every fallible operation in the crate.

use failure::Fail;
use std::io;

/// Everything that can go wrong while setting up a session or
/// presenting a frame.  The numeric core itself never fails; it
/// asserts on contract violations instead.
#[derive(Debug, Fail)]
pub enum MandelError {
    /// A configuration value is out of range.
    #[fail(display = "invalid configuration: {}", _0)]
    Config(String),

    /// The complex-plane rectangle is empty, inverted, or not finite.
    #[fail(display = "invalid viewport: {}", _0)]
    Viewport(String),

    /// The raster has no pixels.
    #[fail(display = "invalid raster: {}", _0)]
    Raster(String),

    /// The palette cannot color every possible iteration count.
    #[fail(
        display = "palette has {} colors but must cover {} iterations",
        len, required
    )]
    Palette {
        /// Number of colors in the palette.
        len: usize,
        /// The iteration bound the palette has to cover.
        required: usize,
    },

    /// A click landed outside the raster.
    #[fail(
        display = "click at {},{} lies outside the {}x{} raster",
        x, y, width, height
    )]
    Click {
        /// Column of the click.
        x: usize,
        /// Row of the click.
        y: usize,
        /// Raster width.
        width: usize,
        /// Raster height.
        height: usize,
    },

    /// Writing a frame failed.
    #[fail(display = "could not write frame: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for MandelError {
    fn from(err: io::Error) -> Self {
        MandelError::Io(err)
    }
}

/// Shorthand for results carrying a [`MandelError`].
pub type Result<T> = ::std::result::Result<T, MandelError>;
