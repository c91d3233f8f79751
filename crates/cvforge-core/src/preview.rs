//! Preview overlay state
//!
//! Visibility and zoom for the full-page preview. The controller holds no
//! document or style state: the shell recomputes the layout projection
//! from the latest snapshots every time it draws the overlay, so a stale
//! preview is impossible.

use serde::{Deserialize, Serialize};

/// Zoom bounds and step per user action
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 1.2;
pub const ZOOM_STEP: f32 = 0.1;
const DEFAULT_ZOOM: f32 = 0.8;

/// Visibility and zoom of the preview overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    open: bool,
    zoom: f32,
}

impl Default for Preview {
    fn default() -> Self {
        Self {
            open: false,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Zoom as a whole percentage for display
    pub fn zoom_percent(&self) -> u16 {
        (self.zoom * 100.0).round() as u16
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Step the zoom up; never changes visibility
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step the zoom down; never changes visibility
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Set the zoom, clamped to [0.5, 1.2]
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let preview = Preview::new();
        assert!(!preview.is_open());
        assert_eq!(preview.zoom(), 0.8);
        assert_eq!(preview.zoom_percent(), 80);
    }

    #[test]
    fn test_open_close_toggle() {
        let mut preview = Preview::new();
        preview.open();
        assert!(preview.is_open());
        preview.close();
        assert!(!preview.is_open());
        preview.toggle();
        assert!(preview.is_open());
    }

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut preview = Preview::new();

        for _ in 0..10 {
            preview.zoom_in();
        }
        assert_eq!(preview.zoom(), MAX_ZOOM);
        preview.zoom_in();
        assert_eq!(preview.zoom(), MAX_ZOOM);

        for _ in 0..10 {
            preview.zoom_out();
        }
        assert_eq!(preview.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_zoom_does_not_touch_visibility() {
        let mut preview = Preview::new();
        preview.open();
        preview.zoom_in();
        preview.zoom_out();
        assert!(preview.is_open());

        preview.close();
        preview.zoom_in();
        assert!(!preview.is_open());
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut preview = Preview::new();
        preview.set_zoom(9.0);
        assert_eq!(preview.zoom(), MAX_ZOOM);
        preview.set_zoom(0.0);
        assert_eq!(preview.zoom(), MIN_ZOOM);
    }
}
