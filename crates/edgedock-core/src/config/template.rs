/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `edgedock init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# edgedock configuration
# Location: ~/.config/edgedock/config.toml

[dock]
# Edge the panel hides against at startup: "left", "right", "top" or "bottom".
# Dragging the panel can re-dock it to the left, right or top edge.
edge = "right"
# Pixels of the panel left visible while hidden. Move the pointer onto
# this sliver to bring the panel back.
offset = 5
# A dropped panel snaps to an edge when it is within this many pixels.
snap_threshold = 50
# Milliseconds before a freshly docked panel hides itself.
initial_hide_ms = 1000
# Milliseconds between the pointer leaving the panel and the panel hiding.
hide_delay_ms = 500
# How often the pointer position is sampled, in milliseconds.
sample_interval_ms = 100

[panel]
width = 180
height = 240

[logging]
# Enable file logging to ~/.config/edgedock/logs/edgedock.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_to_defaults() {
        // Arrange
        let content = generate_config();

        // Act
        let config: Config = toml::from_str(&content).unwrap();

        // Assert
        let defaults = Config::default();
        assert_eq!(config.dock, defaults.dock);
        assert_eq!(config.panel, defaults.panel);
        assert_eq!(config.logging.level, defaults.logging.level);
    }
}
