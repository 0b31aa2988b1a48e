mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::Edge;
use crate::geometry::DEFAULT_SNAP_THRESHOLD;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for edgedock.
///
/// Loaded from `~/.config/edgedock/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Docking and auto-hide behaviour.
    pub dock: DockConfig,
    /// Panel window dimensions.
    pub panel: PanelConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Docking and auto-hide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Edge the panel docks to (hidden) at startup.
    pub edge: Edge,
    /// Width in pixels of the sliver left on-screen while hidden.
    pub offset: i32,
    /// Distance in pixels from an edge within which a drop snaps.
    pub snap_threshold: i32,
    /// Delay before a freshly docked panel hides itself.
    pub initial_hide_ms: u64,
    /// Delay between the pointer leaving the panel and the hide.
    pub hide_delay_ms: u64,
    /// Pointer sampling period.
    pub sample_interval_ms: u64,
}

/// Panel window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            edge: Edge::Right,
            offset: 5,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            initial_hide_ms: 1000,
            hide_delay_ms: 500,
            sample_interval_ms: 100,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 180,
            height: 240,
        }
    }
}

impl Config {
    /// Clamps dock and panel values to safe ranges. The sliver is
    /// always at least one pixel wide.
    pub fn validate(&mut self) {
        self.dock.offset = self.dock.offset.clamp(1, 20);
        self.dock.snap_threshold = self.dock.snap_threshold.clamp(0, 200);
        self.dock.initial_hide_ms = self.dock.initial_hide_ms.clamp(50, 10_000);
        self.dock.hide_delay_ms = self.dock.hide_delay_ms.clamp(50, 10_000);
        self.dock.sample_interval_ms = self.dock.sample_interval_ms.clamp(10, 1000);
        self.panel.width = self.panel.width.clamp(40, 1000);
        self.panel.height = self.panel.height.clamp(40, 1000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.dock.edge, Edge::Right);
        assert_eq!(config.dock.offset, 5);
        assert_eq!(config.dock.snap_threshold, 50);
        assert_eq!(config.dock.initial_hide_ms, 1000);
        assert_eq!(config.dock.hide_delay_ms, 500);
        assert_eq!(config.dock.sample_interval_ms, 100);
        assert_eq!(config.panel.width, 180);
        assert_eq!(config.panel.height, 240);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[dock]\nedge = \"left\"\noffset = 3\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.dock.edge, Edge::Left);
        assert_eq!(config.dock.offset, 3);
        assert_eq!(config.dock.hide_delay_ms, 500);
        assert_eq!(config.panel, PanelConfig::default());
    }

    #[test]
    fn unknown_edge_is_a_parse_error() {
        // Arrange
        let toml_str = "[dock]\nedge = \"middle\"\n";

        // Act
        let result: Result<Config, _> = toml::from_str(toml_str);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn validate_clamps_extreme_values() {
        // Arrange
        let mut config = Config {
            dock: DockConfig {
                offset: 0,
                snap_threshold: -10,
                initial_hide_ms: 0,
                hide_delay_ms: 60_000,
                sample_interval_ms: 1,
                ..Default::default()
            },
            panel: PanelConfig {
                width: 5,
                height: 5000,
            },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.dock.offset, 1);
        assert_eq!(config.dock.snap_threshold, 0);
        assert_eq!(config.dock.initial_hide_ms, 50);
        assert_eq!(config.dock.hide_delay_ms, 10_000);
        assert_eq!(config.dock.sample_interval_ms, 10);
        assert_eq!(config.panel.width, 40);
        assert_eq!(config.panel.height, 1000);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        // Arrange
        let config = Config::default();

        // Act
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        // Assert
        assert_eq!(deserialized.dock, config.dock);
        assert_eq!(deserialized.panel, config.panel);
    }
}
