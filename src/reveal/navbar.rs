use crate::foundation::geometry::Viewport;

/// Default scroll offset past which the navbar switches to its scrolled look.
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;

/// Tracks whether the page has scrolled past a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrolledFlag {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrolledFlag {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLED_THRESHOLD)
    }
}

impl ScrolledFlag {
    /// Flag that turns on once `scroll_top` is strictly greater than `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Feed a scroll position. Returns the new value only when it changed.
    pub fn update(&mut self, viewport: Viewport) -> Option<bool> {
        let scrolled = viewport.scroll_top > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        tracing::trace!(scrolled, scroll_top = viewport.scroll_top, "navbar flag");
        Some(scrolled)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/navbar.rs"]
mod tests;
