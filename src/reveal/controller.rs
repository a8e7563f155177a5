use slotmap::{SecondaryMap, SlotMap};

use crate::{
    animation::ease::Ease,
    animation::props::{Prop, PropertySet},
    animation::step::{AnimationStep, Position},
    animation::timeline::{Timeline, TimelineEvent},
    foundation::error::{ShutterError, ShutterResult},
    foundation::geometry::{ElementBounds, Viewport},
    foundation::ids::{NodeId, RevealHandle, SubscriptionId},
    reveal::observer::{ObserveOptions, ViewportEvent, ViewportObserver},
    surface::Surface,
};

/// Whether a reveal can be undone by scrolling back up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Reveal the first time the element enters; never hide again.
    Once,
    /// Reveal on enter, reverse on leaving back above the trigger line.
    #[default]
    Toggle,
}

/// Marker plus trigger configuration for a revealed element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTag {
    /// Tag name, e.g. `fade-up`.
    pub name: String,
    /// See [`ObserveOptions::threshold_fraction`].
    pub threshold_fraction: f64,
    /// Once or toggle behaviour.
    pub mode: RevealMode,
}

impl RevealTag {
    /// Tag with the default trigger (80% from top, toggle).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold_fraction: 0.2,
            mode: RevealMode::Toggle,
        }
    }

    /// Set the reveal mode.
    pub fn mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the trigger threshold.
    pub fn threshold(mut self, threshold_fraction: f64) -> Self {
        self.threshold_fraction = threshold_fraction;
        self
    }

    fn options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold_fraction: self.threshold_fraction,
            mode: self.mode,
        }
    }
}

/// Hidden-to-resting transition applied to each revealed element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealPreset {
    /// Initial downward offset in pixels.
    pub rise: f64,
    /// Transition length in seconds.
    pub duration: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl Default for RevealPreset {
    fn default() -> Self {
        Self {
            rise: 100.0,
            duration: 1.0,
            ease: Ease::OutCubic,
        }
    }
}

impl RevealPreset {
    fn step(&self, node: NodeId) -> AnimationStep {
        AnimationStep::tween(
            node,
            PropertySet::new()
                .with(Prop::Opacity, 0.0)
                .with(Prop::TranslateY, self.rise),
            PropertySet::new()
                .with(Prop::Opacity, 1.0)
                .with(Prop::TranslateY, 0.0),
            self.duration,
        )
        .ease(self.ease)
    }
}

/// Lifecycle of one revealed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Hidden start state applied, not yet triggered.
    Unrevealed,
    /// Transition to resting state in flight.
    Revealing,
    /// At resting state.
    Revealed,
    /// Reversing back to hidden (toggle mode only).
    Concealing,
}

/// Snapshot of an element's reveal state and how often its timeline was driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStatus {
    /// Current state.
    pub state: RevealState,
    /// Number of `play()` invocations.
    pub plays: u32,
    /// Number of `reverse()` invocations.
    pub reverses: u32,
}

/// State change reported by [`RevealController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealChange {
    /// Element that changed.
    pub handle: RevealHandle,
    /// New state.
    pub state: RevealState,
}

#[derive(Debug)]
struct Entry {
    tag: RevealTag,
    node: NodeId,
    subscription: Option<SubscriptionId>,
    timeline: Timeline,
    status: RevealStatus,
}

/// Binds viewport crossings to per-element reveal timelines.
#[derive(Debug, Default)]
pub struct RevealController {
    observer: ViewportObserver,
    entries: SlotMap<RevealHandle, Entry>,
    by_sub: SecondaryMap<SubscriptionId, RevealHandle>,
}

impl RevealController {
    /// Empty controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one element. Its hidden start state is applied before this returns.
    pub fn register(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        bounds: ElementBounds,
        tag: &RevealTag,
        preset: &RevealPreset,
    ) -> ShutterResult<RevealHandle> {
        self.register_delayed(surface, node, bounds, tag, preset, 0.0)
    }

    /// Register elements that share a tag. Element `i` starts `i * stagger` seconds after
    /// its trigger fires.
    pub fn register_batch(
        &mut self,
        surface: &mut dyn Surface,
        items: &[(NodeId, ElementBounds)],
        tag: &RevealTag,
        preset: &RevealPreset,
        stagger: f64,
    ) -> ShutterResult<Vec<RevealHandle>> {
        if !stagger.is_finite() || stagger < 0.0 {
            return Err(ShutterError::validation("stagger must be finite and >= 0"));
        }

        let mut handles = Vec::with_capacity(items.len());
        for (i, &(node, bounds)) in items.iter().enumerate() {
            let delay = stagger * i as f64;
            match self.register_delayed(surface, node, bounds, tag, preset, delay) {
                Ok(h) => handles.push(h),
                Err(e) => {
                    for h in handles {
                        self.unregister(h);
                    }
                    return Err(e);
                }
            }
        }
        Ok(handles)
    }

    fn register_delayed(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        bounds: ElementBounds,
        tag: &RevealTag,
        preset: &RevealPreset,
        delay: f64,
    ) -> ShutterResult<RevealHandle> {
        let options = tag.options();
        options.validate()?;

        let mut timeline = Timeline::new(format!("reveal:{}", tag.name));
        timeline.add_step(preset.step(node).at(Position::At(delay)))?;
        timeline.prepare(surface);

        let subscription = self.observer.observe(node, bounds, options)?;
        let handle = self.entries.insert(Entry {
            tag: tag.clone(),
            node,
            subscription: Some(subscription),
            timeline,
            status: RevealStatus {
                state: RevealState::Unrevealed,
                plays: 0,
                reverses: 0,
            },
        });
        self.by_sub.insert(subscription, handle);
        Ok(handle)
    }

    /// Feed a scroll position; starts or reverses timelines for elements that crossed.
    #[tracing::instrument(skip(self))]
    pub fn on_scroll(&mut self, viewport: Viewport) -> Vec<RevealChange> {
        let mut changes = Vec::new();
        for event in self.observer.update(viewport) {
            let (sub, entering) = match event {
                ViewportEvent::Enter(sub) => (sub, true),
                ViewportEvent::Exit(sub) => (sub, false),
            };
            let Some(&handle) = self.by_sub.get(sub) else {
                continue;
            };
            let Some(entry) = self.entries.get_mut(handle) else {
                continue;
            };

            let next = match (entering, entry.status.state) {
                (true, RevealState::Unrevealed | RevealState::Concealing) => {
                    entry.timeline.play();
                    entry.status.plays += 1;
                    RevealState::Revealing
                }
                (false, RevealState::Revealing | RevealState::Revealed)
                    if entry.tag.mode == RevealMode::Toggle =>
                {
                    entry.timeline.reverse();
                    entry.status.reverses += 1;
                    RevealState::Concealing
                }
                _ => continue,
            };
            tracing::debug!(tag = %entry.tag.name, state = ?next, "reveal triggered");
            entry.status.state = next;
            changes.push(RevealChange {
                handle,
                state: next,
            });
        }
        changes
    }

    /// Advance every reveal timeline by `dt` seconds.
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> Vec<RevealChange> {
        let mut changes = Vec::new();
        for (handle, entry) in &mut self.entries {
            let state = match entry.timeline.tick(dt, surface) {
                Some(TimelineEvent::Completed) => RevealState::Revealed,
                Some(TimelineEvent::ReverseCompleted) => RevealState::Unrevealed,
                None => continue,
            };
            entry.status.state = state;

            // One-shot reveals are done with the viewport for good.
            if state == RevealState::Revealed && entry.tag.mode == RevealMode::Once {
                if let Some(sub) = entry.subscription.take() {
                    self.observer.unobserve(sub);
                    self.by_sub.remove(sub);
                }
            }
            changes.push(RevealChange { handle, state });
        }
        changes
    }

    /// Detach an element. Safe to call repeatedly; returns `true` on the first call.
    pub fn unregister(&mut self, handle: RevealHandle) -> bool {
        let Some(mut entry) = self.entries.remove(handle) else {
            return false;
        };
        if let Some(sub) = entry.subscription.take() {
            self.observer.unobserve(sub);
            self.by_sub.remove(sub);
        }
        entry.timeline.kill();
        tracing::trace!(tag = %entry.tag.name, "reveal unregistered");
        true
    }

    /// Detach every element and halt every in-flight reveal.
    pub fn teardown(&mut self) {
        let handles: Vec<RevealHandle> = self.entries.keys().collect();
        for h in handles {
            self.unregister(h);
        }
        self.observer.clear();
        self.by_sub.clear();
    }

    /// Update an element's layout.
    pub fn set_bounds(&mut self, handle: RevealHandle, bounds: ElementBounds) -> bool {
        self.entries
            .get(handle)
            .and_then(|e| e.subscription)
            .is_some_and(|sub| self.observer.set_bounds(sub, bounds))
    }

    /// Current status of `handle`.
    pub fn status(&self, handle: RevealHandle) -> Option<RevealStatus> {
        self.entries.get(handle).map(|e| e.status)
    }

    /// Node behind `handle`.
    pub fn node(&self, handle: RevealHandle) -> Option<NodeId> {
        self.entries.get(handle).map(|e| e.node)
    }

    /// Return `true` while `handle` still listens to the viewport.
    pub fn is_observing(&self, handle: RevealHandle) -> bool {
        self.entries
            .get(handle)
            .and_then(|e| e.subscription)
            .is_some_and(|sub| self.observer.is_observing(sub))
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/controller.rs"]
mod tests;
