// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render settings that stay fixed for a session.

use crate::errors::{MandelError, Result};
use crate::planes::{Viewport, DEFAULT_VIEWPORT};

/// The maximum number of times `z² + c` is applied to each point.
pub const MAX_ITERATION: usize = 80;

/// How much each axis shrinks on a click.
pub const SCALE_FACTOR: f64 = 0.5;

/// The parameters by which frames are generated.  Once a session
/// starts these do not change; only the viewport moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Iteration bound shared by the evaluator and the palette.
    pub max_iteration: usize,
    /// Per-axis shrink applied on every click, in `(0, 1)`.
    pub scale_factor: f64,
    /// Worker threads per frame.  One renders on the calling thread.
    pub threads: usize,
    /// The viewport of the first frame.
    pub viewport: Viewport,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_iteration: MAX_ITERATION,
            scale_factor: SCALE_FACTOR,
            threads: 1,
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl RenderConfig {
    /// Sets the number of worker threads.
    pub fn with_threads(self, threads: usize) -> Self {
        RenderConfig { threads, ..self }
    }

    /// Sets the iteration bound.
    pub fn with_max_iteration(self, max_iteration: usize) -> Self {
        RenderConfig {
            max_iteration,
            ..self
        }
    }

    /// Sets the per-click scale factor.
    pub fn with_scale_factor(self, scale_factor: f64) -> Self {
        RenderConfig {
            scale_factor,
            ..self
        }
    }

    /// Sets the starting viewport.
    pub fn with_viewport(self, viewport: Viewport) -> Self {
        RenderConfig { viewport, ..self }
    }

    /// Rejects settings the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_iteration == 0 {
            return Err(MandelError::Config(
                "the iteration bound must be at least 1".to_string(),
            ));
        }
        if !(self.scale_factor > 0.0 && self.scale_factor < 1.0) {
            return Err(MandelError::Config(format!(
                "scale factor {} is outside (0, 1)",
                self.scale_factor
            )));
        }
        if self.threads == 0 {
            return Err(MandelError::Config(
                "at least one render thread is needed".to_string(),
            ));
        }
        self.viewport.validate()
    }
}
