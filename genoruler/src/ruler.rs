// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;
use std::cell::Cell;
use std::rc::Rc;

use cursor_icon::CursorIcon;
use genoruler_event_state::interaction::{PointerInput, RulerGesture, RulerInteraction};
use genoruler_locus::{ChromosomeCatalog, ChromosomeTable, GenomicRange, LocusQuery};
use genoruler_render::{FrameLimiter, FrameStats, RulerRenderer, RulerSurface};
use genoruler_view::{LocusChanged, TickLayout, UnknownChromosome, ViewportEngine};
use kurbo::Size;

use crate::locus_input::{LocusInputError, LocusInputWidget};

/// An interactive ruler: engine, gesture machine, renderer and surface.
///
/// The ruler learns about range changes only through the engine's change
/// notification, which marks it dirty. Input methods apply gestures and then
/// try to draw through the [`FrameLimiter`]; a throttled frame is drawn by a
/// later event, [`Ruler::frame`] or [`Ruler::flush`].
///
/// Every input method takes `now`, the event time as an offset from any
/// fixed origin, and returns `true` if a frame was drawn.
#[derive(Debug)]
pub struct Ruler<S, C = ChromosomeTable> {
    engine: ViewportEngine<C>,
    interaction: RulerInteraction,
    renderer: RulerRenderer,
    limiter: FrameLimiter,
    surface: S,
    size: Size,
    device_pixel_ratio: f64,
    dirty: Rc<Cell<bool>>,
}

impl<S: RulerSurface, C: ChromosomeCatalog> Ruler<S, C> {
    /// Wraps `engine` and draws into `surface` at `size` CSS pixels.
    pub fn new(mut engine: ViewportEngine<C>, surface: S, size: Size) -> Self {
        let dirty = Rc::new(Cell::new(engine.range().is_some()));
        let flag = Rc::clone(&dirty);
        engine.on_locus_changed(move |_| flag.set(true));
        Self {
            engine,
            interaction: RulerInteraction::new(),
            renderer: RulerRenderer::default(),
            limiter: FrameLimiter::default(),
            surface,
            size,
            device_pixel_ratio: 1.0,
            dirty,
        }
    }

    /// Replaces the renderer (and with it the style).
    #[must_use]
    pub fn with_renderer(mut self, renderer: RulerRenderer) -> Self {
        self.renderer = renderer;
        self.dirty.set(true);
        self
    }

    /// Replaces the frame limiter.
    #[must_use]
    pub fn with_frame_limiter(mut self, limiter: FrameLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Sets the device pixel ratio without drawing.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = sanitize_ratio(device_pixel_ratio);
        self
    }

    /// The viewport engine.
    #[must_use]
    pub fn engine(&self) -> &ViewportEngine<C> {
        &self.engine
    }

    /// Mutable access to the engine, e.g. to connect a [`LocusInputWidget`].
    ///
    /// Changes made through it mark the ruler dirty but draw nothing until
    /// the next [`Ruler::frame`] or [`Ruler::flush`].
    pub fn engine_mut(&mut self) -> &mut ViewportEngine<C> {
        &mut self.engine
    }

    /// The surface drawn into.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the ruler, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Surface size in CSS pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Device pixels per CSS pixel.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Backing store size in device pixels, rounded up.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "surface sizes are small positive numbers"
    )]
    pub fn backing_size(&self) -> (u32, u32) {
        let scaled = self.size * self.device_pixel_ratio;
        (
            scaled.width.ceil().max(0.0) as u32,
            scaled.height.ceil().max(0.0) as u32,
        )
    }

    /// Cursor to show over the ruler.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.interaction.cursor()
    }

    /// Returns `true` if the range changed since the last drawn frame.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Feeds a pointer event.
    pub fn pointer(&mut self, input: PointerInput, now: Duration) -> bool {
        if let Some(gesture) = self.interaction.pointer(input) {
            self.apply(gesture);
        }
        self.frame(now)
    }

    /// Feeds a wheel event at CSS pixel offset `x`.
    pub fn wheel(&mut self, x: f64, delta_y: f64, now: Duration) -> bool {
        if let Some(gesture) = self.interaction.wheel(x, delta_y) {
            self.apply(gesture);
        }
        self.frame(now)
    }

    /// Resizes the surface and redraws immediately. The range is unchanged.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64, now: Duration) -> bool {
        self.size = Size::new(width.max(0.0), height.max(0.0));
        self.device_pixel_ratio = sanitize_ratio(device_pixel_ratio);
        log::debug!(
            "resized to {}x{} css px at {}x",
            self.size.width,
            self.size.height,
            self.device_pixel_ratio
        );
        self.dirty.set(true);
        self.draw_at(now).is_some()
    }

    /// Shows `[start_bp, end_bp]` of `chr`.
    pub fn set_genomic_locus(
        &mut self,
        chr: &str,
        start_bp: f64,
        end_bp: f64,
        now: Duration,
    ) -> Result<LocusChanged, UnknownChromosome> {
        let changed = self.engine.set_genomic_locus(chr, start_bp, end_bp)?;
        self.frame(now);
        Ok(changed)
    }

    /// Shows a parsed locus.
    pub fn set_locus(
        &mut self,
        query: &LocusQuery,
        now: Duration,
    ) -> Result<LocusChanged, UnknownChromosome> {
        let changed = self.engine.set_locus(query)?;
        self.frame(now);
        Ok(changed)
    }

    /// Submits `input` against this ruler's engine and attempts a frame.
    pub fn submit(
        &mut self,
        input: &LocusInputWidget,
        now: Duration,
    ) -> Result<LocusChanged, LocusInputError> {
        let changed = input.submit(&mut self.engine)?;
        self.frame(now);
        Ok(changed)
    }

    /// Draws if dirty and the frame limiter allows it.
    ///
    /// A frame that cannot be drawn, e.g. at zero width, does not use up the
    /// limiter's interval.
    pub fn frame(&mut self, now: Duration) -> bool {
        if !self.dirty.get() {
            return false;
        }
        let Some((range, layout)) = self.prepare() else {
            return false;
        };
        if !self.limiter.should_draw(now) {
            return false;
        }
        self.render(range, &layout);
        true
    }

    /// Draws now if dirty, bypassing the frame interval.
    pub fn flush(&mut self, now: Duration) -> bool {
        if !self.dirty.get() {
            return false;
        }
        self.draw_at(now).is_some()
    }

    fn draw_at(&mut self, now: Duration) -> Option<FrameStats> {
        let (range, layout) = self.prepare()?;
        let stats = self.render(range, &layout);
        self.limiter.mark_drawn(now);
        Some(stats)
    }

    fn prepare(&self) -> Option<(GenomicRange, TickLayout)> {
        let range = self.engine.range()?;
        let layout = self.engine.compute_tick_layout(self.size.width)?;
        Some((range, layout))
    }

    fn render(&mut self, range: GenomicRange, layout: &TickLayout) -> FrameStats {
        let stats = self.renderer.draw(
            &mut self.surface,
            range,
            layout,
            self.size,
            self.device_pixel_ratio,
        );
        self.dirty.set(false);
        stats
    }

    fn apply(&mut self, gesture: RulerGesture) {
        let width = self.size.width;
        match gesture {
            RulerGesture::Pan { delta_x } => self.engine.pan_by(delta_x, width),
            RulerGesture::Zoom { x, sign } => self.engine.zoom_at(x, width, sign),
        };
    }
}

fn sanitize_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio > 0.0 && device_pixel_ratio.is_finite() {
        device_pixel_ratio
    } else {
        1.0
    }
}
