//! The edge-docking state machine.
//!
//! `DockController` is the single writer of the panel's position. Every
//! method runs on the UI thread: samples from the background sampler
//! arrive through [`DockController::handle_sample`], drag gestures
//! through the `drag_*` methods, and the UI loop calls
//! [`DockController::fire_due`] whenever [`DockController::next_deadline`]
//! passes.
//!
//! Transitions:
//!
//! ```text
//!            drop near edge                  hide timer fires
//! Undocked ─────────────────▶ Visible(e) ─────────────────────▶ Hidden(e)
//!    ▲                          │   ▲                              │
//!    │ drop away / undock()     │   └──────────────────────────────┘
//!    └──────────────────────────┘      pointer in trigger zone,
//!                                      or drag start
//! ```

use std::time::{Duration, Instant};

use crate::config::DockConfig;
use crate::geometry::{self, EdgeGeometry};
use crate::host::{Overlay, PanelHost, Sampler};
use crate::sampler::Sample;
use crate::state::{DockPhase, DockState, HideReason, HideTimer};
use crate::{DockError, Edge, Point, Rect, Size, Theme};

/// An in-progress drag: where the pointer and the window were when it began.
#[derive(Debug, Clone, Copy)]
struct Drag {
    pointer: Point,
    origin: Point,
}

/// Owns the dock state and drives the panel, sampler and indicator.
pub struct DockController<H, S, O> {
    host: H,
    sampler: S,
    overlay: O,
    state: DockState,
    theme: Theme,
    /// Rectangle of the live indicator, if one exists.
    indicator: Option<Rect>,
    drag: Option<Drag>,
    snap_threshold: i32,
    initial_hide: Duration,
    hide_delay: Duration,
}

impl<H, S, O> DockController<H, S, O>
where
    H: PanelHost,
    S: Sampler,
    O: Overlay,
{
    pub fn new(
        host: H,
        sampler: S,
        overlay: O,
        panel_size: Size,
        config: &DockConfig,
        theme: Theme,
    ) -> Self {
        Self {
            host,
            sampler,
            overlay,
            state: DockState::new(panel_size, config.offset),
            theme,
            indicator: None,
            drag: None,
            snap_threshold: config.snap_threshold,
            initial_hide: Duration::from_millis(config.initial_hide_ms),
            hide_delay: Duration::from_millis(config.hide_delay_ms),
        }
    }

    pub fn state(&self) -> &DockState {
        &self.state
    }

    pub fn phase(&self) -> DockPhase {
        self.state.phase()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// When the UI loop must next call [`Self::fire_due`], if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.hide_timer.map(|t| t.deadline)
    }

    // ── transitions ──────────────────────────────────────────────

    /// Docks straight into the hidden state. Used once at startup, before
    /// the panel is first shown, so it never flashes on screen.
    pub fn dock_hidden(&mut self, edge: Edge) -> Result<(), DockError> {
        let (rect, geo) = self.geometry()?;
        let origin = geo.docked_hidden_origin(edge, rect);
        self.host.move_to(origin);

        self.cancel_timer();
        self.state.edge = Some(edge);
        self.state.visible = false;
        self.show_indicator(geo.sliver_rect(edge, rect.with_origin(origin)));
        self.ensure_sampler();
        crate::log_info!("docked hidden at {edge} edge");
        Ok(())
    }

    /// Handles a panel released at `panel`: snaps to a nearby edge or
    /// leaves it floating.
    pub fn drop_at(&mut self, panel: Rect, now: Instant) {
        let screen = match self.host.screen_size() {
            Ok(s) => s,
            Err(e) => {
                crate::log_debug!("drop ignored: {e}");
                return;
            }
        };

        match geometry::snap_candidate(panel, screen, self.snap_threshold) {
            Some(edge) => self.dock(edge, panel, screen, now),
            None => self.undock(),
        }
    }

    /// Leaves the panel floating wherever it is.
    pub fn undock(&mut self) {
        self.cancel_timer();
        self.stop_sampler();
        self.hide_indicator();
        if let Some(edge) = self.state.edge.take() {
            crate::log_info!("undocked from {edge} edge");
        }
        self.state.visible = true;
    }

    /// Applies one message from the sampler thread.
    pub fn handle_sample(&mut self, sample: Sample, now: Instant) {
        match sample {
            Sample::Position(p) => self.on_pointer(p, now),
            Sample::Stopped { generation, error } => {
                if generation != self.sampler.generation() {
                    crate::log_debug!("ignoring stop from stale sampler #{generation}");
                    return;
                }
                crate::log_warn!("pointer sampling stopped, auto-hide inert until next dock: {error}");
                self.sampler.stop();
                self.state.sampler_running = false;
            }
        }
    }

    /// Evaluates one pointer reading against the current state.
    pub fn on_pointer(&mut self, pointer: Point, now: Instant) {
        if self.drag.is_some() {
            return;
        }

        match self.state.phase() {
            DockPhase::Undocked => {}
            DockPhase::Hidden(edge) => {
                let Ok((rect, geo)) = self.geometry() else {
                    return;
                };
                if geo.trigger_zone(edge, rect, pointer) {
                    crate::log_debug!("pointer ({},{}) in trigger zone", pointer.x, pointer.y);
                    self.show();
                }
            }
            DockPhase::Visible(_) => {
                let Ok(rect) = self.host.current_rect() else {
                    return;
                };
                if geometry::exit_zone(rect, pointer) {
                    self.arm(HideReason::PointerLeft, now + self.hide_delay);
                } else if self
                    .state
                    .hide_timer
                    .is_some_and(|t| t.reason == HideReason::PointerLeft)
                {
                    // The post-dock hide runs regardless of the pointer.
                    self.cancel_timer();
                }
            }
        }
    }

    /// Runs the hide timer if its deadline has passed. Returns whether
    /// it fired.
    ///
    /// A due timer is authoritative: it hides without re-checking the
    /// pointer. If the pointer is back on the sliver the next sample
    /// shows the panel again.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let Some(timer) = self.state.hide_timer else {
            return false;
        };
        if timer.deadline > now {
            return false;
        }
        self.state.hide_timer = None;
        crate::log_debug!("hide timer fired ({:?})", timer.reason);
        self.hide();
        true
    }

    /// Begins a drag. A hidden panel is shown first so the user never
    /// drags an invisible window.
    pub fn drag_start(&mut self, pointer: Point) {
        self.cancel_timer();
        if self.state.is_hidden() {
            self.show();
        }
        match self.host.current_rect() {
            Ok(rect) => {
                self.drag = Some(Drag {
                    pointer,
                    origin: rect.origin(),
                });
            }
            Err(e) => crate::log_debug!("drag ignored: {e}"),
        }
    }

    pub fn drag_move(&mut self, pointer: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        self.host.move_to(Point::new(
            drag.origin.x + pointer.x - drag.pointer.x,
            drag.origin.y + pointer.y - drag.pointer.y,
        ));
    }

    pub fn drag_end(&mut self, now: Instant) {
        if self.drag.take().is_none() {
            return;
        }
        match self.host.current_rect() {
            Ok(rect) => self.drop_at(rect, now),
            Err(e) => crate::log_debug!("drop ignored: {e}"),
        }
    }

    /// Records a theme change and repaints the indicator if it is up.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        if self.indicator.is_some() {
            self.overlay.recolor(theme.indicator());
        }
    }

    /// Stops the sampler, drops any pending hide and removes the
    /// indicator. The panel stays where it is.
    pub fn shutdown(&mut self) {
        self.drag = None;
        self.cancel_timer();
        self.stop_sampler();
        self.hide_indicator();
        crate::log_info!("dock controller shut down");
    }

    // ── internals ────────────────────────────────────────────────

    fn geometry(&self) -> Result<(Rect, EdgeGeometry), DockError> {
        let rect = self.host.current_rect()?;
        let screen = self.host.screen_size()?;
        Ok((rect, EdgeGeometry::new(screen, self.state.offset)))
    }

    fn dock(&mut self, edge: Edge, panel: Rect, screen: Size, now: Instant) {
        let geo = EdgeGeometry::new(screen, self.state.offset);
        self.host.move_to(geo.docked_visible_origin(edge, panel));

        self.state.edge = Some(edge);
        self.state.visible = true;
        self.hide_indicator();
        self.ensure_sampler();
        self.cancel_timer();
        self.arm(HideReason::Docked, now + self.initial_hide);
        crate::log_info!("docked to {edge} edge");
    }

    fn hide(&mut self) {
        let DockPhase::Visible(edge) = self.state.phase() else {
            return;
        };
        let (rect, geo) = match self.geometry() {
            Ok(g) => g,
            Err(e) => {
                crate::log_debug!("hide skipped: {e}");
                return;
            }
        };
        let origin = geo.docked_hidden_origin(edge, rect);
        self.host.move_to(origin);

        self.state.visible = false;
        self.show_indicator(geo.sliver_rect(edge, rect.with_origin(origin)));
        self.ensure_sampler();
        crate::log_debug!("hidden at {edge} edge");
    }

    fn show(&mut self) {
        let DockPhase::Hidden(edge) = self.state.phase() else {
            return;
        };
        let (rect, geo) = match self.geometry() {
            Ok(g) => g,
            Err(e) => {
                crate::log_debug!("show skipped: {e}");
                return;
            }
        };
        self.host.move_to(geo.docked_visible_origin(edge, rect));

        self.state.visible = true;
        self.hide_indicator();
        // Still needed: it is what notices the pointer leaving again.
        self.ensure_sampler();
        crate::log_debug!("shown at {edge} edge");
    }

    /// Arms the hide timer unless one is already pending. Never resets
    /// a pending deadline.
    fn arm(&mut self, reason: HideReason, deadline: Instant) {
        if self.state.hide_timer.is_some() {
            return;
        }
        self.state.hide_timer = Some(HideTimer { deadline, reason });
    }

    fn cancel_timer(&mut self) {
        self.state.hide_timer = None;
    }

    fn ensure_sampler(&mut self) {
        if !self.state.sampler_running {
            self.sampler.start();
            self.state.sampler_running = true;
        }
    }

    fn stop_sampler(&mut self) {
        if self.state.sampler_running {
            self.sampler.stop();
            self.state.sampler_running = false;
        }
    }

    fn show_indicator(&mut self, rect: Rect) {
        self.overlay.show(rect, self.theme.indicator());
        self.indicator = Some(rect);
    }

    fn hide_indicator(&mut self) {
        if self.indicator.take().is_some() {
            self.overlay.hide();
        }
    }
}
