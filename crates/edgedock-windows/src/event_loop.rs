use std::sync::mpsc;
use std::time::Duration;

use edgedock_core::config::Config;
use edgedock_core::{
    DockController, Point, PointerSampler, Rect, Sample, Size, WindowResult,
};
use windows::Win32::System::Threading::GetCurrentThreadId;

use crate::cursor::{CursorSource, PostedSink};
use crate::indicator::Indicator;
use crate::panel::PanelWindow;
use crate::{ctrl_c, dpi, monitor, theme};

#[path = "event_loop_message_pump.rs"]
mod message_pump;

/// The controller as wired on Windows.
pub(crate) type PanelController =
    DockController<PanelWindow, PointerSampler<CursorSource, PostedSink>, Indicator>;

/// Runs the panel on the calling thread until it is closed.
///
/// The panel is docked hidden to `config.dock.edge` before it is first
/// shown. Returns when the pump sees `WM_QUIT` (right-click on the
/// panel, or Ctrl+C in the console).
pub fn run(config: &Config) -> WindowResult<()> {
    dpi::enable_dpi_awareness();

    let theme = theme::current();
    let size = Size::new(config.panel.width, config.panel.height);
    let screen = monitor::primary_screen()?;
    let start = Point::new(
        screen.width - size.width,
        screen.height / 2 - size.height / 2,
    );
    let panel = PanelWindow::create(Rect::from_origin(start, size), theme)?;

    let (sample_tx, sample_rx) = mpsc::channel::<Sample>();
    let sampler = PointerSampler::new(
        CursorSource,
        PostedSink::new(sample_tx, panel.hwnd()),
        Duration::from_millis(config.dock.sample_interval_ms),
    );

    let mut controller = DockController::new(
        panel,
        sampler,
        Indicator::new(),
        size,
        &config.dock,
        theme,
    );

    if let Err(e) = controller.dock_hidden(config.dock.edge) {
        edgedock_core::log_warn!("could not dock at startup, panel left floating: {e}");
    }
    controller.host().show();

    let thread_id = unsafe { GetCurrentThreadId() };
    ctrl_c::set_handler(thread_id)?;

    edgedock_core::log_info!(
        "panel started ({}x{}, {} edge, {:?} theme)",
        size.width,
        size.height,
        config.dock.edge,
        theme
    );

    message_pump::run_message_pump(&mut controller, &sample_rx);

    controller.shutdown();
    edgedock_core::log_info!("panel closed");
    Ok(())
}
