// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Presentation of finished frames.  The renderer does not care where
//! a frame ends up; anything implementing [`Present`] can receive it.

use crate::errors::{MandelError, Result};
use crate::render::PixelBuffer;
use image::png::PNGEncoder;
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::convert::TryFrom;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Receives each completed frame, in order.
pub trait Present {
    /// Shows or stores a frame.  Only ever called with complete frames.
    fn present(&mut self, frame: &PixelBuffer) -> Result<()>;
}

/// Keeps every frame in memory.
impl Present for Vec<PixelBuffer> {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}

/// Writes frames to an image file.  By default every frame replaces
/// the previous one, so the file always shows the latest view; a
/// numbered presenter keeps them all as `stem-0000.ext`,
/// `stem-0001.ext`, and so on.
#[derive(Debug)]
pub struct ImagePresenter {
    path: PathBuf,
    numbered: bool,
    frames: usize,
}

impl ImagePresenter {
    /// Overwrites `path` with each new frame.
    pub fn new<P: AsRef<Path>>(path: P) -> ImagePresenter {
        ImagePresenter {
            path: path.as_ref().to_path_buf(),
            numbered: false,
            frames: 0,
        }
    }

    /// Writes each frame to its own file next to `path`.
    pub fn numbered<P: AsRef<Path>>(path: P) -> ImagePresenter {
        ImagePresenter {
            numbered: true,
            ..ImagePresenter::new(path)
        }
    }

    /// How many frames have been written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The file the next frame goes to.
    pub fn next_path(&self) -> PathBuf {
        if !self.numbered {
            return self.path.clone();
        }
        let stem = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match self.path.extension() {
            Some(ext) => format!("{}-{:04}.{}", stem, self.frames, ext.to_string_lossy()),
            None => format!("{}-{:04}", stem, self.frames),
        };
        self.path.with_file_name(name)
    }
}

impl Present for ImagePresenter {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        let path = self.next_path();
        write_image(&path, frame)?;
        info!("frame {} written to {}", self.frames, path.display());
        self.frames += 1;
        Ok(())
    }
}

/// Writes a frame to `path`.  `.ppm` and `.pnm` files get a binary
/// pixmap, which has no alpha channel; everything else is a PNG.
pub fn write_image(path: &Path, frame: &PixelBuffer) -> Result<()> {
    let raster = frame.raster();
    let (width, height) = match (
        u32::try_from(raster.width()),
        u32::try_from(raster.height()),
    ) {
        (Ok(width), Ok(height)) => (width, height),
        _ => {
            return Err(MandelError::Raster(format!(
                "{}x{} is too large for an image file",
                raster.width(),
                raster.height()
            )))
        }
    };
    let output = File::create(path)?;
    let pixmap = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "ppm" || ext == "pnm"
        })
        .unwrap_or(false);

    if pixmap {
        let rgb: Vec<u8> = frame
            .as_bytes()
            .chunks(4)
            .flat_map(|rgba| rgba[..3].iter().cloned())
            .collect();
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
        encoder.encode(&rgb[..], width, height, ColorType::RGB(8))?;
    } else {
        PNGEncoder::new(output).encode(frame.as_bytes(), width, height, ColorType::RGBA(8))?;
    }
    Ok(())
}
