use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ShutterError, ShutterResult};

/// Easing functions used to map normalized animation progress.
///
/// Names follow the `powerN.dir` convention: `power1` is quadratic, `power2` cubic and
/// `power3` quartic.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    #[default]
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
        }
    }

    /// Canonical `powerN.dir` name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::InQuad => "power1.in",
            Self::OutQuad => "power1.out",
            Self::InOutQuad => "power1.inOut",
            Self::InCubic => "power2.in",
            Self::OutCubic => "power2.out",
            Self::InOutCubic => "power2.inOut",
            Self::InQuart => "power3.in",
            Self::OutQuart => "power3.out",
            Self::InOutQuart => "power3.inOut",
        }
    }

    /// Parse an easing name such as `power3.out` or `linear`.
    pub fn parse(name: &str) -> ShutterResult<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(ShutterError::validation("ease name must be non-empty"));
        }

        let ease = match name.as_str() {
            "none" | "linear" => Self::Linear,
            "power1.in" | "quad.in" => Self::InQuad,
            "power1" | "power1.out" | "quad.out" => Self::OutQuad,
            "power1.inout" | "quad.inout" => Self::InOutQuad,
            "power2.in" | "cubic.in" => Self::InCubic,
            "power2" | "power2.out" | "cubic.out" => Self::OutCubic,
            "power2.inout" | "cubic.inout" => Self::InOutCubic,
            "power3.in" | "quart.in" => Self::InQuart,
            "power3" | "power3.out" | "quart.out" => Self::OutQuart,
            "power3.inout" | "quart.inout" => Self::InOutQuart,
            other => {
                return Err(ShutterError::validation(format!("unknown ease '{other}'")));
            }
        };
        Ok(ease)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = ShutterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ease {
    type Error = ShutterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.name().to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
