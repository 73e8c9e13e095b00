//! Scroll position tracking for the message pane.
//!
//! Mirrors the browser-style model: a viewport over scrollable content, with
//! a "jump to newest" affordance shown once the user has scrolled far enough
//! up from the bottom.

/// Scrollable distance below the viewport beyond which the jump-to-bottom
/// marker is shown.
pub const SCROLL_BUTTON_THRESHOLD: u16 = 100;

#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollState {
    scroll_top: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_top(&self) -> u16 {
        self.scroll_top
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.clamp();
    }

    pub fn set_content_height(&mut self, height: u16) {
        self.content_height = height;
        self.clamp();
    }

    fn max_scroll_top(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Scrollable distance remaining below the viewport.
    pub fn distance_from_bottom(&self) -> u16 {
        self.max_scroll_top().saturating_sub(self.scroll_top)
    }

    /// True once the user has scrolled more than the threshold above the
    /// bottom; false at or below it.
    pub fn show_scroll_button(&self) -> bool {
        self.distance_from_bottom() > SCROLL_BUTTON_THRESHOLD
    }

    pub fn is_at_bottom(&self) -> bool {
        self.distance_from_bottom() == 0
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_top = self.scroll_top.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_top = (self.scroll_top + lines).min(self.max_scroll_top());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll_top();
    }

    fn clamp(&mut self) {
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }
}
