use crate::{
    animation::step::{AnimationStep, Position},
    foundation::error::{ShutterError, ShutterResult},
    foundation::ids::NodeId,
    surface::Surface,
};

/// Signal emitted by [`Timeline::tick`] when playback reaches an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Forward playback reached the end.
    Completed,
    /// Reverse playback reached the start.
    ReverseCompleted,
}

/// Playback direction of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Not advancing.
    Idle,
    /// Advancing toward the end.
    Forward,
    /// Rewinding toward the start.
    Backward,
    /// Terminal: halted and detached from its targets.
    Killed,
}

/// Resolved placement of one step, as reported by [`Timeline::schedule`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleEntry {
    /// Step label, if any.
    pub label: Option<String>,
    /// Target node, `None` for holds.
    pub target: Option<NodeId>,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

#[derive(Clone, Debug)]
struct Scheduled {
    step: AnimationStep,
    start: f64,
    rendered: bool,
}

impl Scheduled {
    fn end(&self) -> f64 {
        self.start + self.step.duration
    }

    fn local_progress(&self, time: f64) -> f64 {
        if self.step.duration <= 0.0 {
            return if time >= self.start { 1.0 } else { 0.0 };
        }
        ((time - self.start) / self.step.duration).clamp(0.0, 1.0)
    }
}

/// Ordered sequence of animation steps with a single playback cursor.
///
/// Steps render in declared order, so a later step wins when two steps drive the same
/// property of the same node at the same time.
#[derive(Clone, Debug)]
pub struct Timeline {
    name: String,
    steps: Vec<Scheduled>,
    duration: f64,
    time: f64,
    playback: Playback,
}

impl Timeline {
    /// Create an empty timeline. `name` only shows up in logs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            duration: 0.0,
            time: 0.0,
            playback: Playback::Idle,
        }
    }

    /// Append a step, resolving its start time against the previous step.
    pub fn add_step(&mut self, step: AnimationStep) -> ShutterResult<()> {
        if self.playback == Playback::Killed {
            return Err(ShutterError::invalid_state(format!(
                "cannot add a step to killed timeline '{}'",
                self.name
            )));
        }
        if !step.duration.is_finite() || step.duration < 0.0 {
            return Err(ShutterError::validation(
                "step duration must be finite and >= 0",
            ));
        }
        if step.target.is_some() && !step.from.matches_shape(&step.to) {
            return Err(ShutterError::validation(
                "step start and end property sets must carry the same properties",
            ));
        }

        let (prev_start, prev_end) = self
            .steps
            .last()
            .map(|s| (s.start, s.end()))
            .unwrap_or((0.0, 0.0));
        let start = match step.position {
            Position::AfterPrevious(dt) => prev_end + dt,
            Position::WithPrevious(dt) => prev_start + dt,
            Position::At(t) => t,
        };
        if !start.is_finite() {
            return Err(ShutterError::validation("step position must be finite"));
        }
        let start = start.max(0.0);

        self.duration = self.duration.max(start + step.duration);
        self.steps.push(Scheduled {
            step,
            start,
            rendered: false,
        });
        Ok(())
    }

    /// Append one step per target, each starting `each` seconds after the previous one.
    ///
    /// The first step keeps the position and label produced by `make`.
    pub fn add_stagger(
        &mut self,
        targets: &[NodeId],
        each: f64,
        make: impl Fn(NodeId) -> AnimationStep,
    ) -> ShutterResult<()> {
        for (i, &target) in targets.iter().enumerate() {
            let mut step = make(target);
            if i > 0 {
                step.position = Position::WithPrevious(each);
                step.label = None;
            }
            self.add_step(step)?;
        }
        Ok(())
    }

    /// Apply every step's start values and rewind to zero.
    ///
    /// When several steps touch the same property, the earliest declared step wins.
    pub fn prepare(&mut self, surface: &mut dyn Surface) {
        if self.playback == Playback::Killed {
            return;
        }
        for s in self.steps.iter_mut().rev() {
            s.rendered = false;
            let Some(target) = s.step.target else {
                continue;
            };
            if !surface.is_attached(target) {
                continue;
            }
            for (prop, value) in s.step.from.iter() {
                surface.apply(target, prop, value);
            }
        }
        self.time = 0.0;
        self.playback = Playback::Idle;
    }

    /// Advance toward the end from the current cursor.
    pub fn play(&mut self) {
        if self.playback == Playback::Killed {
            tracing::warn!(timeline = %self.name, "play() on killed timeline ignored");
            return;
        }
        tracing::trace!(timeline = %self.name, time = self.time, "play");
        self.playback = Playback::Forward;
    }

    /// Rewind toward the start from the current cursor, restoring start values.
    pub fn reverse(&mut self) {
        if self.playback == Playback::Killed {
            tracing::warn!(timeline = %self.name, "reverse() on killed timeline ignored");
            return;
        }
        tracing::trace!(timeline = %self.name, time = self.time, "reverse");
        self.playback = Playback::Backward;
    }

    /// Stop in-flight playback at the current values. The timeline stays usable.
    pub fn halt(&mut self) {
        if matches!(self.playback, Playback::Forward | Playback::Backward) {
            self.playback = Playback::Idle;
        }
    }

    /// Halt immediately and release all target bindings. Irreversible.
    pub fn kill(&mut self) {
        if self.playback == Playback::Killed {
            return;
        }
        tracing::trace!(timeline = %self.name, time = self.time, "kill");
        self.playback = Playback::Killed;
        self.steps.clear();
    }

    /// Advance the cursor by `dt` seconds in the current direction and render.
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> Option<TimelineEvent> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.playback {
            Playback::Forward => {
                self.time = (self.time + dt).min(self.duration);
                self.render(surface);
                if self.time >= self.duration {
                    self.playback = Playback::Idle;
                    return Some(TimelineEvent::Completed);
                }
                None
            }
            Playback::Backward => {
                self.time = (self.time - dt).max(0.0);
                self.render(surface);
                if self.time <= 0.0 {
                    self.playback = Playback::Idle;
                    return Some(TimelineEvent::ReverseCompleted);
                }
                None
            }
            Playback::Idle | Playback::Killed => None,
        }
    }

    /// Jump to `time` and render it without changing the playback direction.
    pub fn seek(&mut self, time: f64, surface: &mut dyn Surface) {
        if self.playback == Playback::Killed {
            return;
        }
        self.time = time.clamp(0.0, self.duration);
        self.render(surface);
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        let time = self.time;
        for s in &mut self.steps {
            let Some(target) = s.step.target else {
                continue;
            };
            if !surface.is_attached(target) {
                continue;
            }
            if time >= s.start {
                let eased = s.step.ease.apply(s.local_progress(time));
                for (prop, value) in s.step.from.lerp_toward(&s.step.to, eased) {
                    surface.apply(target, prop, value);
                }
                s.rendered = true;
            } else if s.rendered {
                for (prop, value) in s.step.from.iter() {
                    surface.apply(target, prop, value);
                }
                s.rendered = false;
            }
        }
    }

    /// Timeline name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current playback direction.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Return `true` after [`Timeline::kill`].
    pub fn is_killed(&self) -> bool {
        self.playback == Playback::Killed
    }

    /// Return `true` while playing or reversing.
    pub fn is_active(&self) -> bool {
        matches!(self.playback, Playback::Forward | Playback::Backward)
    }

    /// Cursor position in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Cursor position normalized to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return if self.time > 0.0 { 1.0 } else { 0.0 };
        }
        (self.time / self.duration).clamp(0.0, 1.0)
    }

    /// Number of steps still bound to the timeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Return `true` when the timeline holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Start time of the first step labelled `label`.
    pub fn label_time(&self, label: &str) -> Option<f64> {
        self.find(label).map(|s| s.start)
    }

    /// Eased progress in `[0, 1]` of the first step labelled `label` at the cursor.
    pub fn step_progress(&self, label: &str) -> Option<f64> {
        self.find(label)
            .map(|s| s.step.ease.apply(s.local_progress(self.time)))
    }

    /// Resolved placement of every step in declared order.
    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        self.steps
            .iter()
            .map(|s| ScheduleEntry {
                label: s.step.label.clone(),
                target: s.step.target,
                start: s.start,
                end: s.end(),
            })
            .collect()
    }

    fn find(&self, label: &str) -> Option<&Scheduled> {
        self.steps
            .iter()
            .find(|s| s.step.label.as_deref() == Some(label))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
