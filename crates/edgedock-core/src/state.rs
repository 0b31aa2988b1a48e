use std::time::Instant;

use crate::{Edge, Size};

/// Why a hide was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// The panel was just docked and gets a grace period before hiding.
    Docked,
    /// The pointer left the visible panel.
    PointerLeft,
}

/// A pending deferred hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    pub deadline: Instant,
    pub reason: HideReason,
}

/// The three states of the dock state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockPhase {
    /// Free-floating; no sampler, no timer, no indicator.
    Undocked,
    /// Flush against the edge at full size.
    Visible(Edge),
    /// Retracted to the sliver.
    Hidden(Edge),
}

/// Everything the controller knows about the panel's docking.
///
/// Only `DockController` mutates this; everyone else gets a shared view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockState {
    /// `None` while undocked.
    pub edge: Option<Edge>,
    pub visible: bool,
    pub panel_size: Size,
    /// Width of the sliver left on-screen while hidden.
    pub offset: i32,
    /// At most one pending hide, ever.
    pub hide_timer: Option<HideTimer>,
    pub sampler_running: bool,
}

impl DockState {
    /// Initial state: undocked and fully visible.
    pub fn new(panel_size: Size, offset: i32) -> Self {
        Self {
            edge: None,
            visible: true,
            panel_size,
            offset,
            hide_timer: None,
            sampler_running: false,
        }
    }

    pub fn phase(&self) -> DockPhase {
        match (self.edge, self.visible) {
            (None, _) => DockPhase::Undocked,
            (Some(edge), true) => DockPhase::Visible(edge),
            (Some(edge), false) => DockPhase::Hidden(edge),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self.phase(), DockPhase::Hidden(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_undocked_and_visible() {
        // Act
        let state = DockState::new(Size::new(180, 240), 5);

        // Assert
        assert_eq!(state.phase(), DockPhase::Undocked);
        assert!(state.visible);
        assert!(state.hide_timer.is_none());
        assert!(!state.sampler_running);
    }

    #[test]
    fn phase_follows_edge_and_visibility() {
        // Arrange
        let mut state = DockState::new(Size::new(180, 240), 5);

        // Act / Assert
        state.edge = Some(Edge::Top);
        assert_eq!(state.phase(), DockPhase::Visible(Edge::Top));
        state.visible = false;
        assert_eq!(state.phase(), DockPhase::Hidden(Edge::Top));
        assert!(state.is_hidden());
        state.edge = None;
        assert_eq!(state.phase(), DockPhase::Undocked);
        assert!(!state.is_hidden());
    }
}
