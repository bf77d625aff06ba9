// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An interactive zoom session: the current viewport, the renderer,
//! and the presenter the frames go to.  Clicks are handled one at a
//! time; each one replaces the viewport and presents a complete new
//! frame before the next is accepted.

use crate::config::RenderConfig;
use crate::errors::{MandelError, Result};
use crate::palette::Palette;
use crate::planes::{pixel_to_point, Pixel, Raster, Viewport};
use crate::present::Present;
use crate::render::Renderer;
use crate::zoom::zoom;

/// Owns the only piece of state that changes between frames, the
/// viewport, and threads it through zoom and render.
#[derive(Debug)]
pub struct Session<P: Present> {
    renderer: Renderer,
    presenter: P,
    raster: Raster,
    viewport: Viewport,
    scale_factor: f64,
}

impl<P: Present> Session<P> {
    /// Sets up a session on the configured starting viewport.  Nothing
    /// is drawn until [`Session::start`].
    pub fn new(
        config: &RenderConfig,
        palette: Palette,
        presenter: P,
        raster: Raster,
    ) -> Result<Session<P>> {
        let raster = Raster::new(raster.width(), raster.height())?;
        let renderer = Renderer::new(palette, config)?;
        Ok(Session {
            renderer,
            presenter,
            raster,
            viewport: config.viewport,
            scale_factor: config.scale_factor,
        })
    }

    /// Draws the first frame.
    pub fn start(&mut self) -> Result<()> {
        self.redraw()
    }

    /// Zooms in on the clicked pixel and draws the new view.  Clicks
    /// outside the raster are refused and leave the viewport alone.
    pub fn click(&mut self, click: Pixel) -> Result<()> {
        if !self.raster.contains(click) {
            return Err(MandelError::Click {
                x: click.0,
                y: click.1,
                width: self.raster.width(),
                height: self.raster.height(),
            });
        }
        let target = pixel_to_point(click, self.raster, &self.viewport);
        self.viewport = zoom(click, self.raster, &self.viewport, self.scale_factor);
        info!("zoom on {} at {:?}, now {:?}", target, click, self.viewport);
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        let frame = self.renderer.render(&self.viewport, self.raster);
        self.presenter.present(&frame)
    }

    /// The viewport of the most recent frame.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The raster every frame is drawn at.
    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// The presenter frames are handed to.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Ends the session, giving back the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
