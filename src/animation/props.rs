use std::collections::BTreeMap;

use crate::foundation::geometry::Rect;

/// Interpolation contract for animatable values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            f64::lerp(&a.x0, &b.x0, t),
            f64::lerp(&a.y0, &b.y0, t),
            f64::lerp(&a.x1, &b.x1, t),
            f64::lerp(&a.y1, &b.y1, t),
        )
    }
}

/// Visual property of a node that a timeline step may drive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Vertical translation in pixels.
    TranslateY,
    /// Vertical translation as a percentage of the node's own height.
    TranslateYPercent,
    /// Uniform scale factor.
    Scale,
    /// Width as a percentage of the parent.
    WidthPercent,
    /// Clip rectangle in unit space.
    Clip,
    /// Numeric counter text.
    Counter,
}

/// Value carried by a [`Prop`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropValue {
    /// Plain scalar.
    Scalar(f64),
    /// Clip geometry.
    Clip(Rect),
}

impl PropValue {
    /// Return the scalar payload, if any.
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Clip(_) => None,
        }
    }

    /// Return the clip payload, if any.
    pub fn as_clip(self) -> Option<Rect> {
        match self {
            Self::Clip(r) => Some(r),
            Self::Scalar(_) => None,
        }
    }

    fn same_kind(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Scalar(_), Self::Scalar(_)) | (Self::Clip(_), Self::Clip(_))
        )
    }
}

impl Lerp for PropValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(f64::lerp(a, b, t)),
            (Self::Clip(a), Self::Clip(b)) => Self::Clip(Rect::lerp(a, b, t)),
            // Mismatched kinds are rejected when a step is added; hold as a fallback.
            _ => {
                if t < 1.0 {
                    *a
                } else {
                    *b
                }
            }
        }
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Rect> for PropValue {
    fn from(value: Rect) -> Self {
        Self::Clip(value)
    }
}

/// Ordered map of property values applied to one node.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertySet(BTreeMap<Prop, PropValue>);

impl PropertySet {
    /// Empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, prop: Prop, value: impl Into<PropValue>) -> Self {
        self.0.insert(prop, value.into());
        self
    }

    /// Insert or replace a value.
    pub fn set(&mut self, prop: Prop, value: impl Into<PropValue>) {
        self.0.insert(prop, value.into());
    }

    /// Look up one property.
    pub fn get(&self, prop: Prop) -> Option<PropValue> {
        self.0.get(&prop).copied()
    }

    /// Iterate properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Prop, PropValue)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return `true` when `other` carries the same keys with matching value kinds.
    pub fn matches_shape(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .0
                .iter()
                .all(|(k, v)| other.get(*k).is_some_and(|o| v.same_kind(o)))
    }

    /// Interpolate every property toward `to` by eased factor `t`.
    pub fn lerp_toward<'a>(
        &'a self,
        to: &'a Self,
        t: f64,
    ) -> impl Iterator<Item = (Prop, PropValue)> + 'a {
        to.iter().map(move |(prop, end)| {
            let start = self.get(prop).unwrap_or(end);
            (prop, PropValue::lerp(&start, &end, t))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/props.rs"]
mod tests;
