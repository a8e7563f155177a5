use crate::foundation::error::{ShutterError, ShutterResult};

pub use kurbo::Rect;

/// Visible window of the page, in page pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Scroll offset of the top edge.
    pub scroll_top: f64,
    /// Height of the visible window.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(scroll_top: f64, height: f64) -> ShutterResult<Self> {
        if !scroll_top.is_finite() || !height.is_finite() || height <= 0.0 {
            return Err(ShutterError::validation(
                "Viewport requires a finite scroll_top and a positive height",
            ));
        }
        Ok(Self { scroll_top, height })
    }

    /// Page-space y coordinate of the trigger line for `threshold_fraction`.
    ///
    /// A threshold of `0.2` puts the line 80% of the way down the viewport.
    pub fn trigger_line(self, threshold_fraction: f64) -> f64 {
        self.scroll_top + self.height * (1.0 - threshold_fraction)
    }
}

/// Vertical extent of an element in page pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBounds {
    /// Page-space y of the element's top edge.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl ElementBounds {
    /// Create element bounds.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Clip band of zero height pinned to the top edge (unit space).
pub fn clip_band_closed() -> Rect {
    Rect::new(0.0, 0.0, 1.0, 0.0)
}

/// Clip rectangle covering the whole panel (unit space).
pub fn clip_band_open() -> Rect {
    Rect::new(0.0, 0.0, 1.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
