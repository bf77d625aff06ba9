// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Describes the two planes the renderer works with: the integral
//! plane of the raster, with its origin at the top-left pixel, and the
//! rectangle of the complex plane currently mapped onto it.  Maps
//! points from one to the other.

use crate::errors::{MandelError, Result};
use num::Complex;

/// A single point on the complex plane.  The real part is the x
/// component, the imaginary part the y component.
pub type ComplexPoint = Complex<f64>;

/// Describes the column and row of a pixel in the raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub usize, pub usize);

/// Describes the width and height of the raster.  The raster starts
/// at 0,0 in the top-left corner, so only the extent is stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Raster(pub usize, pub usize);

impl Raster {
    /// Rejects rasters without any pixels, with a side longer than an
    /// image file can record, or whose RGBA buffer would not fit in
    /// memory.
    pub fn new(width: usize, height: usize) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(MandelError::Raster(format!(
                "{}x{} has no pixels",
                width, height
            )));
        }
        if width > u32::MAX as usize || height > u32::MAX as usize {
            return Err(MandelError::Raster(format!(
                "{}x{} has a side longer than {} pixels",
                width,
                height,
                u32::MAX
            )));
        }
        if width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .is_none()
        {
            return Err(MandelError::Raster(format!(
                "{}x{} is too large to allocate",
                width, height
            )));
        }
        Ok(Raster(width, height))
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.0
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.1
    }

    /// The total number of pixels.  Used to calculate memory needs.
    pub fn len(&self) -> usize {
        self.0 * self.1
    }

    /// True when the raster has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.0 == 0 || self.1 == 0
    }

    /// True when the pixel lies inside the raster.
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.0 < self.0 && pixel.1 < self.1
    }
}

/// The axis-aligned rectangle of the complex plane mapped onto the
/// raster.  `real_start..real_end` runs left to right and
/// `imaginary_start..imaginary_end` top to bottom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Real coordinate of the left edge.
    pub real_start: f64,
    /// Real coordinate of the right edge.
    pub real_end: f64,
    /// Imaginary coordinate of the top edge.
    pub imaginary_start: f64,
    /// Imaginary coordinate of the bottom edge.
    pub imaginary_end: f64,
}

/// The whole of the Mandelbrot set, real ∈ [-2, 1] and imaginary ∈ [-1, 1].
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    real_start: -2.0,
    real_end: 1.0,
    imaginary_start: -1.0,
    imaginary_end: 1.0,
};

impl Viewport {
    /// Constructor.  Both axes must be finite and have a positive
    /// extent.
    pub fn new(
        real_start: f64,
        real_end: f64,
        imaginary_start: f64,
        imaginary_end: f64,
    ) -> Result<Viewport> {
        let viewport = Viewport {
            real_start,
            real_end,
            imaginary_start,
            imaginary_end,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Checks that the rectangle is finite and non-degenerate.
    pub fn validate(&self) -> Result<()> {
        let edges = [
            self.real_start,
            self.real_end,
            self.imaginary_start,
            self.imaginary_end,
        ];
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(MandelError::Viewport(format!(
                "{:?} has a non-finite edge",
                self
            )));
        }

        if self.real_end <= self.real_start {
            return Err(MandelError::Viewport(
                "The real start is not to the left of the real end.".to_string(),
            ));
        }

        if self.imaginary_end <= self.imaginary_start {
            return Err(MandelError::Viewport(
                "The imaginary start is not above the imaginary end.".to_string(),
            ));
        }
        Ok(())
    }

    /// Extent along the real axis.
    pub fn real_width(&self) -> f64 {
        self.real_end - self.real_start
    }

    /// Extent along the imaginary axis.
    pub fn imaginary_height(&self) -> f64 {
        self.imaginary_end - self.imaginary_start
    }

    /// The point halfway along both axes.
    pub fn center(&self) -> ComplexPoint {
        Complex::new(
            self.real_start + self.real_width() / 2.0,
            self.imaginary_start + self.imaginary_height() / 2.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

/// Given a pixel of the raster, return the complex number at the
/// equivalent location of the viewport.  Each axis is interpolated
/// independently, so the aspect ratio of the viewport need not match
/// the raster's.
pub fn pixel_to_point(pixel: Pixel, raster: Raster, viewport: &Viewport) -> ComplexPoint {
    debug_assert!(!raster.is_empty(), "cannot map into an empty raster");
    Complex::new(
        viewport.real_start + (pixel.0 as f64) * viewport.real_width() / (raster.0 as f64),
        viewport.imaginary_start
            + (pixel.1 as f64) * viewport.imaginary_height() / (raster.1 as f64),
    )
}

/// Given a complex number, map it as closely as possible to a pixel of
/// the raster.  Points outside the viewport have no pixel.
pub fn point_to_pixel(point: ComplexPoint, raster: Raster, viewport: &Viewport) -> Option<Pixel> {
    let left = (point.re - viewport.real_start) * (raster.0 as f64) / viewport.real_width();
    let top =
        (point.im - viewport.imaginary_start) * (raster.1 as f64) / viewport.imaginary_height();
    if left < 0.0 || left >= (raster.0 as f64) || top < 0.0 || top >= (raster.1 as f64) {
        return None;
    }
    Some(Pixel(left as usize, top as usize))
}
