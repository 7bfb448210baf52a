use serde::{Deserialize, Serialize};

/// Whether every marker is currently hidden. A mix of shown and hidden
/// markers counts as `Shown`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    #[default]
    Idle,
    Pending,
}

impl PlacementMode {
    pub fn is_pending(&self) -> bool {
        matches!(self, PlacementMode::Pending)
    }
}

/// Enabled state of the bulk action buttons.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub delete_all: bool,
    pub hide_all: bool,
    pub show_all: bool,
}

impl ControlState {
    /// `hide_all` is off once every marker is hidden, `show_all` once every
    /// marker is shown. Both stay on while visibility is mixed.
    pub fn derive(marker_count: usize, hidden_count: usize) -> Self {
        let has_markers = marker_count > 0;
        Self {
            delete_all: has_markers,
            hide_all: has_markers && hidden_count < marker_count,
            show_all: has_markers && hidden_count > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_disabled_without_markers() {
        assert_eq!(ControlState::derive(0, 0), ControlState::default());
    }

    #[test]
    fn fully_shown_or_hidden() {
        let shown = ControlState::derive(2, 0);
        assert!(shown.delete_all && shown.hide_all && !shown.show_all);

        let hidden = ControlState::derive(2, 2);
        assert!(hidden.delete_all && !hidden.hide_all && hidden.show_all);
    }

    #[test]
    fn mixed_visibility_enables_both() {
        let mixed = ControlState::derive(3, 1);
        assert!(mixed.delete_all && mixed.hide_all && mixed.show_all);
    }
}
