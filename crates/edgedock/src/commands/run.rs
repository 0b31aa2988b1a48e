use edgedock_core::{Edge, config, log};

/// Runs the panel until it is closed. `edge` overrides the configured
/// startup edge.
pub fn execute(edge: Option<Edge>) {
    let mut config = config::load();
    if let Some(edge) = edge {
        config.dock.edge = edge;
    }
    if let Err(e) = log::init(&config.logging) {
        eprintln!("Warning: file logging disabled: {e}");
    }

    println!(
        "edgedock running at the {} edge (right-click the panel or press Ctrl+C to quit).",
        config.dock.edge
    );

    if let Err(e) = edgedock_windows::run(&config) {
        edgedock_core::log_error!("panel error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
