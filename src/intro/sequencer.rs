use std::fmt;

use crate::{
    animation::ease::Ease,
    animation::props::{Prop, PropertySet},
    animation::step::{AnimationStep, Position},
    animation::timeline::{Timeline, TimelineEvent},
    foundation::error::{ShutterError, ShutterResult},
    foundation::ids::NodeId,
    lock::scroll::{LockHolder, LockStyle, ScrollLock, ScrollLockGuard},
    surface::Surface,
};

const LABEL_COUNT: &str = "count";
const LABEL_HOLD: &str = "hold";
const LABEL_EXIT: &str = "exit";

/// Stage of the intro splash. Stages only ever move forward.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IntroStage {
    /// Mounted, start state applied, not started.
    Idle,
    /// Camera icon, loading bar and counter rising in.
    Entering,
    /// Bar fill and percentage counter running; logo and tagline arrive at the tail.
    Counting,
    /// Pause with no visual change.
    Holding,
    /// Elements staggering out and the overlay sliding off.
    Exiting,
    /// Overlay removed, scroll released.
    Done,
}

impl IntroStage {
    fn next(self) -> Self {
        match self {
            Self::Idle => Self::Entering,
            Self::Entering => Self::Counting,
            Self::Counting => Self::Holding,
            Self::Holding => Self::Exiting,
            Self::Exiting | Self::Done => Self::Done,
        }
    }
}

/// Node handles for the splash overlay, supplied by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroNodes {
    /// Full-screen overlay container.
    pub overlay: NodeId,
    /// Camera icon.
    pub camera: NodeId,
    /// Loading bar track.
    pub loading_bar: NodeId,
    /// Loading bar fill.
    pub loading_fill: NodeId,
    /// Percentage counter.
    pub counter: NodeId,
    /// Studio name.
    pub logo: NodeId,
    /// Tagline under the logo.
    pub tagline: NodeId,
}

/// Durations (seconds) and offsets of the intro timeline.
///
/// Offsets are relative to the end of the previous step; negative values overlap.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// Initial downward offset of every intro element, in pixels.
    pub rise: f64,
    /// Easing for element entrances.
    pub enter_ease: Ease,
    pub camera_secs: f64,
    pub bar_secs: f64,
    pub bar_offset: f64,
    pub counter_secs: f64,
    pub counter_offset: f64,
    /// Length of the bar fill and the 0-100 count; both share it.
    pub count_secs: f64,
    pub count_offset: f64,
    pub count_ease: Ease,
    pub logo_secs: f64,
    pub logo_offset: f64,
    pub tagline_secs: f64,
    pub tagline_offset: f64,
    pub hold_secs: f64,
    pub exit_secs: f64,
    pub exit_stagger: f64,
    pub exit_ease: Ease,
    pub slide_secs: f64,
    pub slide_offset: f64,
    pub slide_ease: Ease,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            rise: 50.0,
            enter_ease: Ease::OutQuart,
            camera_secs: 0.8,
            bar_secs: 0.6,
            bar_offset: -0.3,
            counter_secs: 0.6,
            counter_offset: -0.4,
            count_secs: 3.0,
            count_offset: -0.3,
            count_ease: Ease::InOutCubic,
            logo_secs: 1.2,
            logo_offset: -0.5,
            tagline_secs: 1.0,
            tagline_offset: -0.8,
            hold_secs: 0.8,
            exit_secs: 0.8,
            exit_stagger: 0.1,
            exit_ease: Ease::InQuart,
            slide_secs: 1.6,
            slide_offset: -0.3,
            slide_ease: Ease::InOutQuart,
        }
    }
}

impl IntroTiming {
    /// Reject negative or non-finite durations and non-finite offsets.
    pub fn validate(&self) -> ShutterResult<()> {
        let durations = [
            ("camera_secs", self.camera_secs),
            ("bar_secs", self.bar_secs),
            ("counter_secs", self.counter_secs),
            ("count_secs", self.count_secs),
            ("logo_secs", self.logo_secs),
            ("tagline_secs", self.tagline_secs),
            ("hold_secs", self.hold_secs),
            ("exit_secs", self.exit_secs),
            ("exit_stagger", self.exit_stagger),
            ("slide_secs", self.slide_secs),
        ];
        for (name, v) in durations {
            if !v.is_finite() || v < 0.0 {
                return Err(ShutterError::validation(format!(
                    "intro.{name} must be finite and >= 0"
                )));
            }
        }
        if self.count_secs <= 0.0 {
            return Err(ShutterError::validation("intro.count_secs must be > 0"));
        }

        let offsets = [
            self.bar_offset,
            self.counter_offset,
            self.count_offset,
            self.logo_offset,
            self.tagline_offset,
            self.slide_offset,
            self.rise,
        ];
        if offsets.iter().any(|v| !v.is_finite()) {
            return Err(ShutterError::validation("intro offsets must be finite"));
        }
        Ok(())
    }

    fn build(&self, nodes: &IntroNodes) -> ShutterResult<Timeline> {
        let hidden = PropertySet::new()
            .with(Prop::Opacity, 0.0)
            .with(Prop::TranslateY, self.rise);
        let shown = PropertySet::new()
            .with(Prop::Opacity, 1.0)
            .with(Prop::TranslateY, 0.0);
        let gone = PropertySet::new()
            .with(Prop::Opacity, 0.0)
            .with(Prop::TranslateY, -self.rise);
        let enter = |node, secs, offset| {
            AnimationStep::tween(node, hidden.clone(), shown.clone(), secs)
                .ease(self.enter_ease)
                .at(Position::AfterPrevious(offset))
        };

        let mut tl = Timeline::new("intro");
        tl.add_step(enter(nodes.camera, self.camera_secs, 0.0))?;
        tl.add_step(enter(nodes.loading_bar, self.bar_secs, self.bar_offset))?;
        tl.add_step(enter(nodes.counter, self.counter_secs, self.counter_offset))?;

        // Fill width and counter value share start, length and curve, so they hit 100 together.
        tl.add_step(
            AnimationStep::tween(
                nodes.loading_fill,
                PropertySet::new().with(Prop::WidthPercent, 0.0),
                PropertySet::new().with(Prop::WidthPercent, 100.0),
                self.count_secs,
            )
            .ease(self.count_ease)
            .at(Position::AfterPrevious(self.count_offset))
            .label(LABEL_COUNT),
        )?;
        tl.add_step(
            AnimationStep::tween(
                nodes.counter,
                PropertySet::new().with(Prop::Counter, 0.0),
                PropertySet::new().with(Prop::Counter, 100.0),
                self.count_secs,
            )
            .ease(self.count_ease)
            .at(Position::WithPrevious(0.0)),
        )?;

        tl.add_step(enter(nodes.logo, self.logo_secs, self.logo_offset))?;
        tl.add_step(enter(nodes.tagline, self.tagline_secs, self.tagline_offset))?;
        tl.add_step(AnimationStep::hold(self.hold_secs).label(LABEL_HOLD))?;

        let leaving = [
            nodes.logo,
            nodes.tagline,
            nodes.camera,
            nodes.loading_bar,
            nodes.counter,
        ];
        tl.add_stagger(&leaving, self.exit_stagger, |node| {
            AnimationStep::tween(node, shown.clone(), gone.clone(), self.exit_secs)
                .ease(self.exit_ease)
                .label(LABEL_EXIT)
        })?;
        tl.add_step(
            AnimationStep::tween(
                nodes.overlay,
                PropertySet::new().with(Prop::TranslateYPercent, 0.0),
                PropertySet::new().with(Prop::TranslateYPercent, -100.0),
                self.slide_secs,
            )
            .ease(self.slide_ease)
            .at(Position::AfterPrevious(self.slide_offset)),
        )?;
        Ok(tl)
    }
}

/// One-shot splash sequence run at page load.
///
/// Holds the scroll lock from mount until [`IntroStage::Done`] or teardown, whichever comes
/// first. Dropping the sequencer releases the lock as well.
pub struct IntroSequencer {
    nodes: IntroNodes,
    timeline: Timeline,
    stage: IntroStage,
    history: Vec<IntroStage>,
    counter: u8,
    count_at: f64,
    hold_at: f64,
    exit_at: f64,
    lock: Option<ScrollLockGuard>,
    on_complete: Option<Box<dyn FnOnce()>>,
    completed: bool,
}

impl fmt::Debug for IntroSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntroSequencer")
            .field("stage", &self.stage)
            .field("counter", &self.counter)
            .field("time", &self.timeline.time())
            .field("locked", &self.lock.is_some())
            .finish_non_exhaustive()
    }
}

impl IntroSequencer {
    /// Build the timeline, apply the hidden start state and lock page scroll.
    pub fn mount(
        surface: &mut dyn Surface,
        lock: &ScrollLock,
        nodes: IntroNodes,
        timing: &IntroTiming,
    ) -> ShutterResult<Self> {
        timing.validate()?;
        let mut timeline = timing.build(&nodes)?;
        timeline.prepare(surface);

        let label = |name: &str| {
            timeline.label_time(name).ok_or_else(|| {
                ShutterError::invalid_state(format!("intro timeline lost label '{name}'"))
            })
        };
        let count_at = label(LABEL_COUNT)?;
        let hold_at = label(LABEL_HOLD)?;
        let exit_at = label(LABEL_EXIT)?;

        tracing::debug!(
            duration = timeline.duration(),
            count_at,
            hold_at,
            exit_at,
            "intro mounted"
        );
        Ok(Self {
            nodes,
            timeline,
            stage: IntroStage::Idle,
            history: Vec::new(),
            counter: 0,
            count_at,
            hold_at,
            exit_at,
            lock: Some(lock.acquire(LockHolder::Intro, LockStyle::Hidden)),
            on_complete: None,
            completed: false,
        })
    }

    /// Register the completion callback. It runs once, when the stage reaches `Done`.
    pub fn on_complete(&mut self, f: impl FnOnce() + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Leave `Idle` and start playing.
    pub fn start(&mut self) -> ShutterResult<()> {
        if self.stage != IntroStage::Idle || self.timeline.is_killed() {
            return Err(ShutterError::invalid_state(format!(
                "intro cannot start from {:?}",
                self.stage
            )));
        }
        self.set_stage(IntroStage::Entering);
        self.timeline.play();
        Ok(())
    }

    /// Advance by `dt` seconds. Returns every stage entered during this tick, in order.
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> ShutterResult<Vec<IntroStage>> {
        if matches!(self.stage, IntroStage::Idle | IntroStage::Done) {
            return Ok(Vec::new());
        }

        let event = self.timeline.tick(dt, surface);
        if let Some(p) = self.timeline.step_progress(LABEL_COUNT) {
            self.counter = (p * 100.0).floor().clamp(0.0, 100.0) as u8;
        }

        let target = if event == Some(TimelineEvent::Completed) {
            IntroStage::Done
        } else {
            self.stage_at(self.timeline.time())
        };

        let mut entered = Vec::new();
        while self.stage < target {
            let next = self.stage.next();
            if next == IntroStage::Done {
                self.finish(surface)?;
            } else {
                self.set_stage(next);
            }
            entered.push(next);
        }
        Ok(entered)
    }

    fn stage_at(&self, time: f64) -> IntroStage {
        if time >= self.exit_at {
            IntroStage::Exiting
        } else if time >= self.hold_at {
            IntroStage::Holding
        } else if time >= self.count_at {
            IntroStage::Counting
        } else {
            IntroStage::Entering
        }
    }

    fn set_stage(&mut self, stage: IntroStage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "intro stage");
        self.stage = stage;
        self.history.push(stage);
    }

    fn finish(&mut self, surface: &mut dyn Surface) -> ShutterResult<()> {
        if self.completed {
            return Err(ShutterError::invalid_state("intro already completed"));
        }
        self.completed = true;
        self.counter = 100;
        self.set_stage(IntroStage::Done);

        surface.remove(self.nodes.overlay);
        self.timeline.kill();
        if let Some(guard) = self.lock.take() {
            guard.release();
        }
        if let Some(cb) = self.on_complete.take() {
            cb();
        }
        Ok(())
    }

    /// Halt wherever the sequence is and release the scroll lock.
    ///
    /// `on_complete` is not invoked when the sequence never reached `Done`.
    pub fn teardown(&mut self) {
        if !self.completed {
            tracing::debug!(stage = ?self.stage, "intro torn down before completion");
        }
        self.timeline.kill();
        self.on_complete = None;
        if let Some(guard) = self.lock.take() {
            guard.release();
        }
    }

    /// Current stage.
    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    /// Every stage entered so far, in order (excludes the initial `Idle`).
    pub fn history(&self) -> &[IntroStage] {
        &self.history
    }

    /// Displayed percentage, `0..=100`.
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Return `true` once `Done` was reached.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Return `true` while this sequencer still holds the scroll lock.
    pub fn holds_lock(&self) -> bool {
        self.lock.as_ref().is_some_and(ScrollLockGuard::is_current)
    }

    /// Seconds elapsed on the intro timeline.
    pub fn elapsed(&self) -> f64 {
        self.timeline.time()
    }

    /// Resolved schedule of the intro timeline (empty once finished).
    pub fn schedule(&self) -> Vec<crate::animation::timeline::ScheduleEntry> {
        self.timeline.schedule()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/intro/sequencer.rs"]
mod tests;
