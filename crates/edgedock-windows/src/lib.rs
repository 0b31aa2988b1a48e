/// Ctrl+C handling for the foreground panel.
pub mod ctrl_c;

/// Global cursor position and the posted-message sample sink.
pub mod cursor;

/// Per-monitor DPI awareness.
pub mod dpi;

/// The UI thread: panel startup, message pump and shutdown.
pub mod event_loop;

/// Layered click-through overlay drawn over the hidden sliver.
pub mod indicator;

/// Primary monitor geometry.
pub mod monitor;

/// The panel window.
pub mod panel;

/// Light/dark theme detection.
pub mod theme;

pub use cursor::{CursorSource, PostedSink};
pub use event_loop::run;
pub use indicator::Indicator;
pub use panel::PanelWindow;
