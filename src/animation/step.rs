use crate::{
    animation::ease::Ease,
    animation::props::PropertySet,
    foundation::ids::NodeId,
};

/// Where a step starts relative to the step declared before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Offset from the previous step's end. `AfterPrevious(-0.3)` overlaps by 0.3s.
    AfterPrevious(f64),
    /// Offset from the previous step's start.
    WithPrevious(f64),
    /// Absolute time on the timeline.
    At(f64),
}

impl Default for Position {
    fn default() -> Self {
        Self::AfterPrevious(0.0)
    }
}

/// One tween on a timeline. Immutable once added.
///
/// A step without a target is a hold: it occupies time but renders nothing.
#[derive(Clone, Debug)]
pub struct AnimationStep {
    pub(crate) target: Option<NodeId>,
    pub(crate) from: PropertySet,
    pub(crate) to: PropertySet,
    pub(crate) duration: f64,
    pub(crate) ease: Ease,
    pub(crate) position: Position,
    pub(crate) label: Option<String>,
}

impl AnimationStep {
    /// Tween `target` from `from` to `to` over `duration` seconds.
    pub fn tween(target: NodeId, from: PropertySet, to: PropertySet, duration: f64) -> Self {
        Self {
            target: Some(target),
            from,
            to,
            duration,
            ease: Ease::default(),
            position: Position::default(),
            label: None,
        }
    }

    /// Pause of `duration` seconds with no visual change.
    pub fn hold(duration: f64) -> Self {
        Self {
            target: None,
            from: PropertySet::new(),
            to: PropertySet::new(),
            duration,
            ease: Ease::Linear,
            position: Position::default(),
            label: None,
        }
    }

    /// Set the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the start position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Name this step so its schedule can be queried.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Target node, `None` for holds.
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Step label, if any.
    pub fn label_name(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
