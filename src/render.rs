// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The full-frame render loop.  Every pixel is mapped onto the
//! viewport, evaluated, colored, and written into a fresh RGBA buffer.
//! Nothing is carried over between frames.

use crate::config::RenderConfig;
use crate::errors::Result;
use crate::escape::evaluate;
use crate::palette::{Palette, Rgb};
use crate::planes::{pixel_to_point, Pixel, Raster, Viewport};
use itertools::iproduct;
use std::panic;
use std::time::Instant;

/// Every pixel is fully opaque.
pub const ALPHA_CHANNEL: u8 = 255;

const BYTES_PER_PIXEL: usize = 4;

/// A row-major RGBA frame with its origin in the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    raster: Raster,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// An all-zero frame of the given size.
    pub fn new(raster: Raster) -> PixelBuffer {
        PixelBuffer {
            raster,
            bytes: vec![0; raster.len() * BYTES_PER_PIXEL],
        }
    }

    /// The size of the frame.
    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// The raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Where the four bytes of `pixel` start.
    pub fn offset(&self, pixel: Pixel) -> usize {
        assert!(
            self.raster.contains(pixel),
            "{:?} is outside the {:?}",
            pixel,
            self.raster
        );
        (pixel.1 * self.raster.width() + pixel.0) * BYTES_PER_PIXEL
    }

    /// The RGBA bytes of a single pixel.
    pub fn pixel(&self, pixel: Pixel) -> [u8; 4] {
        let offset = self.offset(pixel);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.bytes[offset..offset + BYTES_PER_PIXEL]);
        rgba
    }

    /// Paints a single pixel.
    pub fn set_pixel(&mut self, pixel: Pixel, color: Rgb) {
        let offset = self.offset(pixel);
        write_pixel(&mut self.bytes[offset..offset + BYTES_PER_PIXEL], color);
    }
}

#[inline]
fn write_pixel(dest: &mut [u8], color: Rgb) {
    dest[0] = color.0;
    dest[1] = color.1;
    dest[2] = color.2;
    dest[3] = ALPHA_CHANNEL;
}

/// Turns a viewport into a frame.  Holds the palette and the iteration
/// bound; the viewport is passed in on every call and only read.
#[derive(Debug)]
pub struct Renderer {
    palette: Palette,
    max_iteration: usize,
    threads: usize,
}

impl Renderer {
    /// Fails when the settings are out of range or the palette does not
    /// cover every iteration count.
    pub fn new(palette: Palette, config: &RenderConfig) -> Result<Renderer> {
        config.validate()?;
        palette.covers(config.max_iteration)?;
        Ok(Renderer {
            palette,
            max_iteration: config.max_iteration,
            threads: config.threads,
        })
    }

    /// Computes a complete frame.  With more than one thread the frame
    /// is split into bands of rows; the buffer is only handed back once
    /// every band is finished.
    pub fn render(&self, viewport: &Viewport, raster: Raster) -> PixelBuffer {
        let started = Instant::now();
        let mut frame = PixelBuffer::new(raster);
        let threads = self.threads.min(raster.height());
        if threads <= 1 {
            self.render_band(viewport, raster, 0, &mut frame.bytes);
        } else {
            self.render_threaded(viewport, raster, threads, &mut frame.bytes);
        }
        debug!(
            "rendered {}x{} of {:?} on {} thread(s) in {:?}",
            raster.width(),
            raster.height(),
            viewport,
            threads.max(1),
            started.elapsed()
        );
        frame
    }

    fn render_threaded(
        &self,
        viewport: &Viewport,
        raster: Raster,
        threads: usize,
        bytes: &mut [u8],
    ) {
        let band_rows = (raster.height() + threads - 1) / threads;
        let band_len = band_rows * raster.width() * BYTES_PER_PIXEL;
        let outcome = crossbeam::scope(|spawner| {
            for (index, band) in bytes.chunks_mut(band_len).enumerate() {
                spawner.spawn(move |_| {
                    trace!("band {} starts at row {}", index, index * band_rows);
                    self.render_band(viewport, raster, index * band_rows, band);
                });
            }
        });
        if let Err(cause) = outcome {
            panic::resume_unwind(cause);
        }
    }

    /// Paints a run of whole rows beginning at `first_row`.
    fn render_band(
        &self,
        viewport: &Viewport,
        raster: Raster,
        first_row: usize,
        band: &mut [u8],
    ) {
        let width = raster.width();
        let rows = band.len() / (width * BYTES_PER_PIXEL);
        for (row, column) in iproduct!(0..rows, 0..width) {
            let point = pixel_to_point(Pixel(column, first_row + row), raster, viewport);
            let color = self.palette.color_for(evaluate(point, self.max_iteration));
            let offset = (row * width + column) * BYTES_PER_PIXEL;
            write_pixel(&mut band[offset..offset + BYTES_PER_PIXEL], color);
        }
    }
}
