use slotmap::SlotMap;

use crate::{
    foundation::error::{ShutterError, ShutterResult},
    foundation::geometry::{ElementBounds, Viewport},
    foundation::ids::{NodeId, SubscriptionId},
    reveal::controller::RevealMode,
};

/// Per-subscription trigger configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the viewport, measured up from its bottom edge, that the element's top
    /// must pass to count as entered. `0.2` triggers at 80% from the top.
    pub threshold_fraction: f64,
    /// Whether leaving again is reported to the reveal logic.
    pub mode: RevealMode,
}

impl ObserveOptions {
    /// Validate the threshold range.
    pub fn validate(&self) -> ShutterResult<()> {
        if !(0.0..=1.0).contains(&self.threshold_fraction) {
            return Err(ShutterError::validation(
                "threshold_fraction must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.2,
            mode: RevealMode::Toggle,
        }
    }
}

/// Crossing reported by [`ViewportObserver::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The element's top moved past the trigger line going down the page.
    Enter(SubscriptionId),
    /// The element's top moved back above the trigger line.
    Exit(SubscriptionId),
}

#[derive(Clone, Debug)]
struct Subscription {
    node: NodeId,
    bounds: ElementBounds,
    options: ObserveOptions,
    inside: bool,
}

/// Edge detector turning scroll positions into enter/exit events.
///
/// Events are only emitted on crossings, so repeated updates at the same scroll offset are
/// silent.
#[derive(Clone, Debug, Default)]
pub struct ViewportObserver {
    subs: SlotMap<SubscriptionId, Subscription>,
}

impl ViewportObserver {
    /// Empty observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `node` laid out at `bounds`.
    pub fn observe(
        &mut self,
        node: NodeId,
        bounds: ElementBounds,
        options: ObserveOptions,
    ) -> ShutterResult<SubscriptionId> {
        options.validate()?;
        Ok(self.subs.insert(Subscription {
            node,
            bounds,
            options,
            inside: false,
        }))
    }

    /// Stop watching. Safe to call any number of times; returns `true` on the first call.
    pub fn unobserve(&mut self, id: SubscriptionId) -> bool {
        self.subs.remove(id).is_some()
    }

    /// Update layout after a resize or reflow. Takes effect on the next [`Self::update`].
    pub fn set_bounds(&mut self, id: SubscriptionId, bounds: ElementBounds) -> bool {
        match self.subs.get_mut(id) {
            Some(sub) => {
                sub.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Node watched by `id`.
    pub fn node(&self, id: SubscriptionId) -> Option<NodeId> {
        self.subs.get(id).map(|s| s.node)
    }

    /// Return `true` while `id` is live.
    pub fn is_observing(&self, id: SubscriptionId) -> bool {
        self.subs.contains_key(id)
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Return `true` when nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Recompute every subscription against `viewport` and report crossings.
    pub fn update(&mut self, viewport: Viewport) -> Vec<ViewportEvent> {
        let mut events = Vec::new();
        for (id, sub) in &mut self.subs {
            let line = viewport.trigger_line(sub.options.threshold_fraction);
            let inside = sub.bounds.top <= line;
            if inside == sub.inside {
                continue;
            }
            sub.inside = inside;
            if inside {
                events.push(ViewportEvent::Enter(id));
            } else if sub.options.mode == RevealMode::Toggle {
                events.push(ViewportEvent::Exit(id));
            }
        }
        events
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.subs.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/observer.rs"]
mod tests;
