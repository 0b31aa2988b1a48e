use std::fmt;

use serde::{Deserialize, Serialize};

/// A screen boundary the panel can be docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Whether the edge snaps along the horizontal axis (left/right).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Parses an edge name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Edge::from_name("Right"), Some(Edge::Right));
        assert_eq!(Edge::from_name("TOP"), Some(Edge::Top));
        assert_eq!(Edge::from_name("middle"), None);
    }

    #[test]
    fn edge_roundtrips_through_toml() {
        // Arrange
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            edge: Edge,
        }

        // Act
        let parsed: Wrapper = toml::from_str("edge = \"bottom\"").unwrap();
        let serialized = toml::to_string(&Wrapper { edge: Edge::Left }).unwrap();

        // Assert
        assert_eq!(parsed.edge, Edge::Bottom);
        assert!(serialized.contains("\"left\""));
    }
}
