//! View state: zoom, fullscreen and cursor visibility

/// Font size used when the current size is unknown (0).
pub const FALLBACK_FONT_SIZE: u32 = 12;

/// Smallest size Zoom Out will go to.
pub const MIN_FONT_SIZE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub font_size: u32,
    pub fullscreen: bool,
    pub cursor_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_font_size(FALLBACK_FONT_SIZE)
    }
}

impl ViewState {
    pub fn with_font_size(font_size: u32) -> Self {
        Self {
            font_size,
            fullscreen: false,
            cursor_visible: true,
        }
    }

    fn effective_size(&self) -> u32 {
        if self.font_size == 0 {
            FALLBACK_FONT_SIZE
        } else {
            self.font_size
        }
    }

    pub fn zoom_in(&mut self) -> u32 {
        self.font_size = self.effective_size().saturating_add(1);
        self.font_size
    }

    pub fn zoom_out(&mut self) -> u32 {
        self.font_size = self.effective_size().saturating_sub(1).max(MIN_FONT_SIZE);
        self.font_size
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    pub fn toggle_cursor_visibility(&mut self) -> bool {
        self.cursor_visible = !self.cursor_visible;
        self.cursor_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let mut view = ViewState::default();
        assert_eq!(view.zoom_in(), 13);
        assert_eq!(view.zoom_out(), 12);
    }

    #[test]
    fn test_zero_size_uses_fallback() {
        let mut view = ViewState::with_font_size(0);
        assert_eq!(view.zoom_in(), 13);

        let mut view = ViewState::with_font_size(0);
        assert_eq!(view.zoom_out(), 11);
    }

    #[test]
    fn test_zoom_out_floor() {
        let mut view = ViewState::with_font_size(1);
        assert_eq!(view.zoom_out(), 1);
    }

    #[test]
    fn test_toggles() {
        let mut view = ViewState::default();
        assert!(view.toggle_fullscreen());
        assert!(!view.toggle_fullscreen());
        assert!(!view.toggle_cursor_visibility());
        assert!(view.toggle_cursor_visibility());
    }
}
