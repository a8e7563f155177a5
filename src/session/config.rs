use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{ShutterError, ShutterResult},
    gallery::catalog::{GalleryImage, validate_catalog},
    intro::sequencer::IntroTiming,
    menu::config::OverlayMenuConfig,
    reveal::controller::{RevealMode, RevealPreset, RevealTag},
    reveal::navbar::DEFAULT_SCROLLED_THRESHOLD,
    reveal::observer::ObserveOptions,
};

/// Page-wide defaults for scroll reveals.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealDefaults {
    pub threshold_fraction: f64,
    pub mode: RevealMode,
    /// Delay between elements of the same section.
    pub stagger: f64,
    pub preset: RevealPreset,
}

impl Default for RevealDefaults {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.2,
            mode: RevealMode::Toggle,
            stagger: 0.1,
            preset: RevealPreset::default(),
        }
    }
}

impl RevealDefaults {
    /// Tag named `name` carrying these defaults, with `mode` overriding the page-wide mode.
    pub fn tag(&self, name: &str, mode: Option<RevealMode>) -> RevealTag {
        RevealTag::new(name)
            .threshold(self.threshold_fraction)
            .mode(mode.unwrap_or(self.mode))
    }
}

/// Navbar scrolled-state trigger.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Scroll offset in pixels the page must pass for the scrolled look.
    pub scrolled_threshold: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}

/// Scroll-scrubbed drift for section backgrounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Upward travel over the full scrub, as a percentage of the layer's own height.
    pub shift_percent: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            shift_percent: 50.0,
        }
    }
}

/// Vertical placement of one page section, in page pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionDef {
    pub name: String,
    pub top: f64,
    pub height: f64,
    /// Revealed children laid out top to bottom. `0` reveals the section as a whole.
    #[serde(default)]
    pub items: usize,
    /// Per-section override of [`RevealDefaults::mode`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RevealMode>,
    /// Give the section a background layer that drifts with scroll.
    #[serde(default)]
    pub parallax: bool,
}

/// Everything a page session is configured from. Every field has a default, so `{}` is valid.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub intro: IntroTiming,
    pub reveal: RevealDefaults,
    pub navbar: NavbarConfig,
    pub parallax: ParallaxConfig,
    pub menu: OverlayMenuConfig,
    pub gallery: Vec<GalleryImage>,
    pub sections: Vec<SectionDef>,
}

impl PageConfig {
    /// Parse a page config from any JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShutterResult<Self> {
        serde_json::from_reader(r).map_err(|e| ShutterError::serde(format!("parse page JSON: {e}")))
    }

    /// Parse a page config from a JSON string.
    pub fn from_json(s: &str) -> ShutterResult<Self> {
        serde_json::from_str(s).map_err(|e| ShutterError::serde(format!("parse page JSON: {e}")))
    }

    /// Parse a page config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShutterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open page config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every sub-config and the section geometry.
    pub fn validate(&self) -> ShutterResult<()> {
        self.intro.validate()?;
        self.menu.validate()?;
        validate_catalog(&self.gallery)?;

        ObserveOptions {
            threshold_fraction: self.reveal.threshold_fraction,
            mode: self.reveal.mode,
        }
        .validate()?;
        let r = &self.reveal;
        if !r.stagger.is_finite() || r.stagger < 0.0 {
            return Err(ShutterError::validation("reveal.stagger must be finite and >= 0"));
        }
        if !r.preset.duration.is_finite() || r.preset.duration < 0.0 || !r.preset.rise.is_finite()
        {
            return Err(ShutterError::validation(
                "reveal.preset needs a finite rise and a duration >= 0",
            ));
        }

        if !self.navbar.scrolled_threshold.is_finite() {
            return Err(ShutterError::validation("navbar.scrolled_threshold must be finite"));
        }
        if !self.parallax.shift_percent.is_finite() {
            return Err(ShutterError::validation("parallax.shift_percent must be finite"));
        }

        for s in &self.sections {
            if s.name.trim().is_empty() {
                return Err(ShutterError::validation("section name must not be empty"));
            }
            if !s.top.is_finite() || !s.height.is_finite() || s.height <= 0.0 {
                return Err(ShutterError::validation(format!(
                    "section '{}' needs a finite top and a positive height",
                    s.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
