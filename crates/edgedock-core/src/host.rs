//! Narrow interfaces the dock controller drives.
//!
//! Each platform crate (e.g. `edgedock-windows`) provides its own
//! implementations. The controller never sees anything else of the UI.

use crate::{Color, DockError, Point, Rect, Size};

/// The window hosting the panel.
pub trait PanelHost {
    /// Moves the window's top-left corner. A no-op if it is already there.
    fn move_to(&mut self, origin: Point);

    /// Returns the window's current on-screen rectangle.
    fn current_rect(&self) -> Result<Rect, DockError>;

    /// Returns the size of the screen the panel docks to.
    fn screen_size(&self) -> Result<Size, DockError>;
}

/// The sliver indicator overlay.
///
/// Implementations create the overlay on `show` and destroy it on `hide`.
/// The overlay must never intercept pointer input.
pub trait Overlay {
    /// Creates the overlay, or moves it if it already exists.
    fn show(&mut self, rect: Rect, color: Color);

    /// Repaints an existing overlay. Does nothing if it is not shown.
    fn recolor(&mut self, color: Color);

    /// Destroys the overlay. Idempotent.
    fn hide(&mut self);
}

/// Start/stop control over the background pointer sampler.
pub trait Sampler {
    /// Starts sampling. A no-op while already running.
    fn start(&mut self);

    /// Stops sampling and waits for the loop to exit. Idempotent.
    fn stop(&mut self);

    /// Identifies the most recently started loop. A `Stopped` sample
    /// from any other loop is stale.
    fn generation(&self) -> u64;
}

/// Reads the global pointer position from the OS.
pub trait PointerSource: Send + 'static {
    fn position(&self) -> Result<Point, DockError>;
}
