use std::collections::HashSet;
use std::fmt;

use crate::foundation::error::{ShutterError, ShutterResult};

/// One image in the gallery collection.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GalleryImage {
    /// Unique within the collection.
    pub id: u32,
    /// Remote URL or asset path.
    pub src: String,
    /// Alt text shown under the lightbox image.
    #[serde(alias = "alt", default)]
    pub caption: String,
    /// Category label; surrounding whitespace is not significant.
    pub category: String,
}

impl GalleryImage {
    /// Create an image; the category label is trimmed.
    pub fn new(
        id: u32,
        src: impl Into<String>,
        caption: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            src: src.into(),
            caption: caption.into(),
            category: category.into().trim().to_owned(),
        }
    }

    /// Return `true` if this image is listed under `category`.
    pub fn matches(&self, category: &Category) -> bool {
        match category {
            Category::All => true,
            Category::Named(name) => self.category.trim() == name,
        }
    }
}

/// Category filter. `All` is the sentinel that matches every image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parse a filter label. `"All"` in any casing is the sentinel; everything else is a name.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(label.to_owned())
        }
    }

    /// Filter label as shown on the button.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_owned()
    }
}

/// Filter buttons for `images`: `All` first, then each distinct category in first-seen order.
pub fn categories(images: &[GalleryImage]) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut out = vec![Category::All];
    for img in images {
        if seen.insert(img.category.trim()) {
            out.push(Category::parse(&img.category));
        }
    }
    out
}

/// Reject duplicate ids and images without a source or category.
pub fn validate_catalog(images: &[GalleryImage]) -> ShutterResult<()> {
    let mut ids = HashSet::with_capacity(images.len());
    for img in images {
        if !ids.insert(img.id) {
            return Err(ShutterError::validation(format!(
                "duplicate gallery image id {}",
                img.id
            )));
        }
        if img.src.trim().is_empty() {
            return Err(ShutterError::validation(format!(
                "gallery image {} has an empty src",
                img.id
            )));
        }
        let category = img.category.trim();
        if category.is_empty() || category.eq_ignore_ascii_case("all") {
            return Err(ShutterError::validation(format!(
                "gallery image {} needs a category other than 'All'",
                img.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/catalog.rs"]
mod tests;
