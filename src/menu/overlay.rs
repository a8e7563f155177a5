use crate::{
    animation::props::{Prop, PropertySet},
    animation::step::{AnimationStep, Position},
    animation::timeline::{Timeline, TimelineEvent},
    foundation::error::ShutterResult,
    foundation::geometry::{clip_band_closed, clip_band_open},
    foundation::ids::NodeId,
    lock::scroll::{LockHolder, LockStyle, ScrollLock, ScrollLockGuard},
    menu::config::OverlayMenuConfig,
    surface::Surface,
};

/// Two stable states plus the transitions between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Node handles for the overlay, supplied by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayNodes {
    /// Full-screen panel that gets clipped.
    pub panel: NodeId,
    /// Items that stagger in once the panel is open, in entrance order.
    pub items: Vec<NodeId>,
}

/// Open/close controller for the full-screen navigation overlay.
///
/// One timeline drives both directions: `open()` plays it, `close()` reverses it. Page scroll
/// is pinned from the moment opening starts until the panel is fully closed again.
#[derive(Debug)]
pub struct OverlayMenuController {
    config: OverlayMenuConfig,
    nodes: OverlayNodes,
    state: OverlayState,
    timeline: Timeline,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl OverlayMenuController {
    /// Build the transition and apply the closed start state.
    pub fn new(
        surface: &mut dyn Surface,
        lock: &ScrollLock,
        nodes: OverlayNodes,
        config: OverlayMenuConfig,
    ) -> ShutterResult<Self> {
        config.validate()?;
        let t = &config.timing;

        let mut timeline = Timeline::new("overlay-menu");
        timeline.add_step(
            AnimationStep::tween(
                nodes.panel,
                PropertySet::new().with(Prop::Clip, clip_band_closed()),
                PropertySet::new().with(Prop::Clip, clip_band_open()),
                t.clip_secs,
            )
            .ease(t.clip_ease)
            .label("panel"),
        )?;

        let hidden = PropertySet::new()
            .with(Prop::Opacity, 0.0)
            .with(Prop::TranslateY, t.rise);
        let rest = PropertySet::new()
            .with(Prop::Opacity, 1.0)
            .with(Prop::TranslateY, 0.0);
        timeline.add_stagger(&nodes.items, t.stagger, |node| {
            AnimationStep::tween(node, hidden.clone(), rest.clone(), t.link_secs)
                .ease(t.link_ease)
                .at(Position::AfterPrevious(t.link_offset))
                .label("items")
        })?;
        timeline.prepare(surface);

        Ok(Self {
            config,
            nodes,
            state: OverlayState::Closed,
            timeline,
            lock: lock.clone(),
            guard: None,
        })
    }

    /// Start opening. No-op while already open or opening; returns whether anything changed.
    pub fn open(&mut self) -> bool {
        if self.timeline.is_killed() {
            tracing::warn!("open() after teardown ignored");
            return false;
        }
        match self.state {
            OverlayState::Open | OverlayState::Opening => false,
            OverlayState::Closed | OverlayState::Closing => {
                // Stop any in-flight reverse before flipping direction.
                self.timeline.halt();
                if self.guard.is_none() {
                    self.guard = Some(self.lock.acquire(LockHolder::OverlayMenu, LockStyle::Fixed));
                }
                self.set_state(OverlayState::Opening);
                self.timeline.play();
                true
            }
        }
    }

    /// Start closing. No-op while already closed or closing.
    pub fn close(&mut self) -> bool {
        if self.timeline.is_killed() {
            return false;
        }
        match self.state {
            OverlayState::Closed | OverlayState::Closing => false,
            OverlayState::Open | OverlayState::Opening => {
                self.timeline.halt();
                self.set_state(OverlayState::Closing);
                self.timeline.reverse();
                true
            }
        }
    }

    /// Open when closed or closing, close otherwise.
    pub fn toggle(&mut self) -> bool {
        match self.state {
            OverlayState::Closed | OverlayState::Closing => self.open(),
            OverlayState::Open | OverlayState::Opening => self.close(),
        }
    }

    /// Advance the transition. Returns the new state when a transition settles.
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> Option<OverlayState> {
        let event = self.timeline.tick(dt, surface)?;
        let next = match (event, self.state) {
            (TimelineEvent::Completed, OverlayState::Opening) => OverlayState::Open,
            (TimelineEvent::ReverseCompleted, OverlayState::Closing) => {
                if let Some(guard) = self.guard.take() {
                    guard.release();
                }
                OverlayState::Closed
            }
            _ => return None,
        };
        self.set_state(next);
        Some(next)
    }

    /// Halt mid-transition if needed and restore page scroll. The controller is inert afterwards.
    pub fn teardown(&mut self) {
        self.timeline.kill();
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
        if self.state != OverlayState::Closed {
            self.set_state(OverlayState::Closed);
        }
    }

    fn set_state(&mut self, next: OverlayState) {
        tracing::debug!(from = ?self.state, to = ?next, "overlay menu");
        self.state = next;
    }

    /// Current state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Return `true` while this controller pins page scroll.
    pub fn holds_lock(&self) -> bool {
        self.guard.as_ref().is_some_and(ScrollLockGuard::is_current)
    }

    /// Transition progress, `0` closed to `1` open.
    pub fn progress(&self) -> f64 {
        self.timeline.progress()
    }

    /// Configuration the overlay was built from.
    pub fn config(&self) -> &OverlayMenuConfig {
        &self.config
    }

    /// Node handles the overlay animates.
    pub fn nodes(&self) -> &OverlayNodes {
        &self.nodes
    }

    /// Resolved schedule of the open transition.
    pub fn schedule(&self) -> Vec<crate::animation::timeline::ScheduleEntry> {
        self.timeline.schedule()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/menu/overlay.rs"]
mod tests;
