use crate::{
    foundation::error::{ShutterError, ShutterResult},
    gallery::catalog::{Category, GalleryImage, categories, validate_catalog},
    lock::scroll::{LockHolder, LockStyle, ScrollLock, ScrollLockGuard},
};

/// Lightbox navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

/// Category filter, selection and lightbox state for the gallery page.
///
/// Pure state: nothing here animates. The only side effect is the scroll lock, held for as
/// long as the lightbox is open.
#[derive(Debug)]
pub struct GalleryController {
    images: Vec<GalleryImage>,
    category: Category,
    /// Indices into `images`, in collection order.
    filtered: Vec<usize>,
    selected: Option<u32>,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl GalleryController {
    /// Validate the collection and start on the `All` filter with the lightbox closed.
    pub fn new(images: Vec<GalleryImage>, lock: &ScrollLock) -> ShutterResult<Self> {
        validate_catalog(&images)?;
        let filtered = (0..images.len()).collect();
        Ok(Self {
            images,
            category: Category::All,
            filtered,
            selected: None,
            lock: lock.clone(),
            guard: None,
        })
    }

    /// Switch the filter. Closes the lightbox if its image is not part of the new view.
    pub fn select_category(&mut self, category: impl Into<Category>) {
        let category = category.into();
        self.filtered = self
            .images
            .iter()
            .enumerate()
            .filter(|(_, img)| img.matches(&category))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(%category, visible = self.filtered.len(), "gallery filter");
        self.category = category;

        if let Some(id) = self.selected
            && self.position_of(id).is_err()
        {
            self.close_lightbox();
        }
    }

    /// Open the lightbox on `id`. Ids outside the current view are ignored.
    pub fn select_image(&mut self, id: u32) -> bool {
        match self.position_of(id) {
            Ok(_) => {
                self.open_on(id);
                true
            }
            Err(err) => {
                tracing::debug!(%err, "select_image ignored");
                false
            }
        }
    }

    /// Step through the current view with wraparound at both ends. No-op while closed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let Ok(i) = self.position_of(id) else {
            return false;
        };
        let n = self.filtered.len();
        let next = match direction {
            Direction::Next => (i + 1) % n,
            Direction::Prev => (i + n - 1) % n,
        };
        let next_id = self.images[self.filtered[next]].id;
        tracing::trace!(from = id, to = next_id, ?direction, "lightbox navigate");
        self.selected = Some(next_id);
        true
    }

    /// Close the lightbox and release the scroll lock. Returns `false` if it was already closed.
    pub fn close_lightbox(&mut self) -> bool {
        let was_open = self.selected.take().is_some();
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
        if was_open {
            tracing::debug!("lightbox closed");
        }
        was_open
    }

    /// Close the lightbox regardless of state. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.close_lightbox();
    }

    fn open_on(&mut self, id: u32) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire(LockHolder::Lightbox, LockStyle::Hidden));
            tracing::debug!(id, "lightbox opened");
        }
        self.selected = Some(id);
    }

    fn position_of(&self, id: u32) -> ShutterResult<usize> {
        self.filtered
            .iter()
            .position(|&i| self.images[i].id == id)
            .ok_or_else(|| {
                ShutterError::not_found(format!(
                    "image {id} is not in category '{}'",
                    self.category
                ))
            })
    }

    /// Active filter.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Filter buttons for the collection, `All` first.
    pub fn categories(&self) -> Vec<Category> {
        categories(&self.images)
    }

    /// Whole collection, unfiltered.
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Images visible under the active filter, in collection order.
    pub fn filtered_images(&self) -> Vec<&GalleryImage> {
        self.filtered.iter().map(|&i| &self.images[i]).collect()
    }

    /// Image shown in the lightbox.
    pub fn selected_image(&self) -> Option<&GalleryImage> {
        let id = self.selected?;
        self.images.iter().find(|img| img.id == id)
    }

    /// Id of the image shown in the lightbox.
    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    /// Zero-based index of the selection within the view, and the view length.
    pub fn position(&self) -> Option<(usize, usize)> {
        let i = self.position_of(self.selected?).ok()?;
        Some((i, self.filtered.len()))
    }

    /// Return `true` while an image is selected.
    pub fn lightbox_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Return `true` while the lightbox pins page scroll.
    pub fn holds_lock(&self) -> bool {
        self.guard.as_ref().is_some_and(ScrollLockGuard::is_current)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/controller.rs"]
mod tests;
