#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot zoom renderer
//!
//! Every pixel of a raster is mapped to a point `c` on the complex
//! plane, and `f(z) = z² + c` is iterated from zero.  Points whose
//! orbit stays within a radius of two for the whole iteration budget
//! are treated as members of the Mandelbrot set and painted with the
//! member color; everything else is painted according to how quickly
//! it escaped.
//!
//! Clicking the raster re-centers the visible region on the clicked
//! point and shrinks it by a scale factor, after which the whole frame
//! is recomputed from scratch.  The [`Session`] type owns the visible
//! region and threads it through the zoom transform and the renderer,
//! handling one click at a time.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;

pub mod config;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod present;
pub mod render;
pub mod session;
pub mod zoom;

pub use config::RenderConfig;
pub use errors::{MandelError, Result};
pub use escape::{evaluate, Escape};
pub use palette::{Palette, Rgb};
pub use planes::{pixel_to_point, point_to_pixel, ComplexPoint, Pixel, Raster, Viewport};
pub use present::{ImagePresenter, Present};
pub use render::{PixelBuffer, Renderer};
pub use session::Session;
pub use zoom::zoom;
