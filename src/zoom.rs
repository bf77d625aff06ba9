// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The click-to-zoom transform.

use crate::planes::{Pixel, Raster, Viewport};

/// Produces the viewport that follows a click.  On each axis the new
/// rectangle is centered on the clicked location and is `scale_factor`
/// times as wide as before.  The result is not clamped to the old
/// rectangle: a click near an edge yields a viewport that reaches past
/// it.
pub fn zoom(click: Pixel, raster: Raster, viewport: &Viewport, scale_factor: f64) -> Viewport {
    assert!(
        scale_factor > 0.0 && scale_factor < 1.0,
        "scale factor {} is outside (0, 1)",
        scale_factor
    );
    debug_assert!(!raster.is_empty(), "cannot zoom into an empty raster");

    let (real_start, real_end) = rescale_axis(
        viewport.real_start,
        viewport.real_end,
        (click.0 as f64) / (raster.0 as f64),
        scale_factor,
    );
    let (imaginary_start, imaginary_end) = rescale_axis(
        viewport.imaginary_start,
        viewport.imaginary_end,
        (click.1 as f64) / (raster.1 as f64),
        scale_factor,
    );

    Viewport {
        real_start,
        real_end,
        imaginary_start,
        imaginary_end,
    }
}

fn rescale_axis(start: f64, end: f64, proportion: f64, scale_factor: f64) -> (f64, f64) {
    let width = end - start;
    let center = start + width * proportion;
    let half_width = width * scale_factor / 2.0;
    (center - half_width, center + half_width)
}
