//! 2D/3D view toggle
//!
//! Two mutually exclusive view states, each showing and hiding a fixed set
//! of UI elements. The host binds the visibility flags to its widgets and
//! calls the two entry points from its button handlers.

use tracing::debug;

/// Which view is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Texture painting view
    TwoD,
    /// Model view
    ThreeD,
}

/// Visibility flags for the view-switching UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    /// "2D" button, shown while the 3D view is active
    pub two_d_button_visible: bool,
    /// "3D" button, shown while the 2D view is active
    pub three_d_button_visible: bool,
    /// The paintable texture image, shown only in the 2D view
    pub texture_image_visible: bool,
}

impl Default for ViewState {
    /// Startup state: 3D view, with only the "2D" button shown
    fn default() -> Self {
        Self {
            mode: ViewMode::ThreeD,
            two_d_button_visible: true,
            three_d_button_visible: false,
            texture_image_visible: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view mode
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch to the 2D painting view
    pub fn show_two_d(&mut self) {
        self.mode = ViewMode::TwoD;
        self.two_d_button_visible = false;
        self.three_d_button_visible = true;
        self.texture_image_visible = true;
        debug!("view switched to 2D");
    }

    /// Switch to the 3D model view
    pub fn show_three_d(&mut self) {
        self.mode = ViewMode::ThreeD;
        self.two_d_button_visible = true;
        self.three_d_button_visible = false;
        self.texture_image_visible = false;
        debug!("view switched to 3D");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_state() {
        let state = ViewState::new();
        assert_eq!(state.mode(), ViewMode::ThreeD);
        assert!(state.two_d_button_visible);
        assert!(!state.three_d_button_visible);
        assert!(!state.texture_image_visible);
    }

    #[test]
    fn test_buttons_are_mutually_exclusive() {
        let mut state = ViewState::new();

        state.show_two_d();
        assert_eq!(state.mode(), ViewMode::TwoD);
        assert!(!state.two_d_button_visible);
        assert!(state.three_d_button_visible);
        assert!(state.texture_image_visible);

        state.show_three_d();
        assert_eq!(state.mode(), ViewMode::ThreeD);
        assert!(state.two_d_button_visible);
        assert!(!state.three_d_button_visible);
        assert!(!state.texture_image_visible);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut state = ViewState::new();
        state.show_two_d();
        let snapshot = state;
        state.show_two_d();
        assert_eq!(state, snapshot);
    }
}
