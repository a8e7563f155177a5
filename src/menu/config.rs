use crate::{
    animation::ease::Ease,
    foundation::error::{ShutterError, ShutterResult},
};

/// One navigable entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MenuLink {
    /// Route or absolute URL.
    pub path: String,
    /// Visible text.
    pub label: String,
}

impl MenuLink {
    /// Create a link.
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Contact block shown in the overlay's last column.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
    pub location: String,
    /// Social profile links.
    pub socials: Vec<MenuLink>,
}

/// Colour tokens as `#RRGGBB` (or `#RGB`) strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub background: String,
    pub accent: String,
    pub text: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            background: "#111827".to_owned(),
            accent: "#D6B978".to_owned(),
            text: "#FFFFFF".to_owned(),
        }
    }
}

/// Overlay transition timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MenuTiming {
    /// Clip band expansion length in seconds.
    pub clip_secs: f64,
    pub clip_ease: Ease,
    /// Per-item entrance length in seconds.
    pub link_secs: f64,
    pub link_ease: Ease,
    /// Gap between the clip finishing and the first item starting; negative overlaps.
    pub link_offset: f64,
    /// Delay between consecutive items.
    pub stagger: f64,
    /// Initial downward offset of each item, in pixels.
    pub rise: f64,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            clip_secs: 1.35,
            clip_ease: Ease::InOutQuart,
            link_secs: 0.7,
            link_ease: Ease::InOutCubic,
            link_offset: 0.1,
            stagger: 0.05,
            rise: 75.0,
        }
    }
}

/// Everything that distinguishes one overlay menu from another.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayMenuConfig {
    /// Primary navigation.
    pub links: Vec<MenuLink>,
    /// Secondary group (portfolio categories and the like).
    pub secondary_links: Vec<MenuLink>,
    pub contact: ContactDetails,
    pub theme: ThemeTokens,
    pub timing: MenuTiming,
}

impl OverlayMenuConfig {
    /// Check links, colours and timing.
    pub fn validate(&self) -> ShutterResult<()> {
        let all_links = self
            .links
            .iter()
            .chain(&self.secondary_links)
            .chain(&self.contact.socials);
        for link in all_links {
            if link.label.trim().is_empty() || link.path.trim().is_empty() {
                return Err(ShutterError::validation(format!(
                    "menu link '{}' -> '{}' needs a label and a path",
                    link.label, link.path
                )));
            }
        }

        for (name, value) in [
            ("background", &self.theme.background),
            ("accent", &self.theme.accent),
            ("text", &self.theme.text),
        ] {
            if !is_hex_color(value) {
                return Err(ShutterError::validation(format!(
                    "theme.{name} must be #RGB or #RRGGBB, got '{value}'"
                )));
            }
        }

        let t = &self.timing;
        for (name, v) in [
            ("clip_secs", t.clip_secs),
            ("link_secs", t.link_secs),
            ("stagger", t.stagger),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ShutterError::validation(format!(
                    "menu.timing.{name} must be finite and >= 0"
                )));
            }
        }
        if !t.link_offset.is_finite() || !t.rise.is_finite() {
            return Err(ShutterError::validation(
                "menu.timing offsets must be finite",
            ));
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "../../tests/unit/menu/config.rs"]
mod tests;
