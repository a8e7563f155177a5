use slotmap::SlotMap;

use crate::{
    animation::ease::Ease,
    animation::props::{Prop, PropertySet},
    animation::step::AnimationStep,
    animation::timeline::Timeline,
    foundation::error::{ShutterError, ShutterResult},
    foundation::geometry::{ElementBounds, Viewport},
    foundation::ids::{NodeId, ParallaxHandle},
    surface::Surface,
};

/// Scroll progress of `bounds` through `viewport`, in `[0, 1]`.
///
/// `0` while the element's top is still at or below the viewport's bottom edge, `1` once its
/// bottom has passed the viewport's top edge. Linear in between.
pub fn scrub_progress(bounds: ElementBounds, viewport: Viewport) -> f64 {
    let travel = bounds.height + viewport.height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport.scroll_top + viewport.height - bounds.top) / travel).clamp(0.0, 1.0)
}

#[derive(Debug)]
struct Entry {
    node: NodeId,
    bounds: ElementBounds,
    timeline: Timeline,
    progress: f64,
}

/// Scroll-scrubbed vertical drift for background layers.
///
/// Each element owns a one-second linear timeline from `translate_y_percent = 0` to
/// `-shift_percent`. Scrolling seeks it to [`scrub_progress`]; nothing plays on its own.
#[derive(Debug, Default)]
pub struct ParallaxController {
    entries: SlotMap<ParallaxHandle, Entry>,
}

impl ParallaxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node`. Its resting offset of `0` is applied before this returns.
    pub fn register(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        bounds: ElementBounds,
        shift_percent: f64,
    ) -> ShutterResult<ParallaxHandle> {
        if !shift_percent.is_finite() {
            return Err(ShutterError::validation("parallax shift must be finite"));
        }
        validate_bounds(bounds)?;

        let mut timeline = Timeline::new("parallax");
        timeline.add_step(
            AnimationStep::tween(
                node,
                PropertySet::new().with(Prop::TranslateYPercent, 0.0),
                PropertySet::new().with(Prop::TranslateYPercent, -shift_percent),
                1.0,
            )
            .ease(Ease::Linear),
        )?;
        timeline.prepare(surface);

        Ok(self.entries.insert(Entry {
            node,
            bounds,
            timeline,
            progress: 0.0,
        }))
    }

    /// Seek every element to its progress through `viewport`.
    pub fn on_scroll(&mut self, viewport: Viewport, surface: &mut dyn Surface) {
        for entry in self.entries.values_mut() {
            let progress = scrub_progress(entry.bounds, viewport);
            entry.timeline.seek(progress * entry.timeline.duration(), surface);
            entry.progress = progress;
        }
    }

    /// Update an element's layout. Takes effect on the next [`ParallaxController::on_scroll`].
    pub fn set_bounds(&mut self, handle: ParallaxHandle, bounds: ElementBounds) -> ShutterResult<bool> {
        validate_bounds(bounds)?;
        Ok(match self.entries.get_mut(handle) {
            Some(entry) => {
                entry.bounds = bounds;
                true
            }
            None => false,
        })
    }

    /// Detach an element. Returns `true` on the first call.
    pub fn unregister(&mut self, handle: ParallaxHandle) -> bool {
        let Some(mut entry) = self.entries.remove(handle) else {
            return false;
        };
        entry.timeline.kill();
        true
    }

    /// Detach every element.
    pub fn teardown(&mut self) {
        for (_, mut entry) in self.entries.drain() {
            entry.timeline.kill();
        }
    }

    /// Last scrub progress applied to `handle`.
    pub fn progress(&self, handle: ParallaxHandle) -> Option<f64> {
        self.entries.get(handle).map(|e| e.progress)
    }

    pub fn node(&self, handle: ParallaxHandle) -> Option<NodeId> {
        self.entries.get(handle).map(|e| e.node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_bounds(bounds: ElementBounds) -> ShutterResult<()> {
    if !bounds.top.is_finite() || !bounds.height.is_finite() || bounds.height < 0.0 {
        return Err(ShutterError::validation(
            "parallax bounds need a finite top and a height >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/parallax.rs"]
mod tests;
