use std::cell::RefCell;
use std::rc::Rc;

/// Controller that may hold the page scroll lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockHolder {
    /// Intro splash overlay.
    Intro,
    /// Full-screen navigation overlay.
    OverlayMenu,
    /// Gallery lightbox.
    Lightbox,
}

/// How the page body is pinned while locked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockStyle {
    /// `overflow: hidden`.
    Hidden,
    /// `overflow: hidden` plus `position: fixed; width: 100%`.
    Fixed,
}

#[derive(Debug)]
struct Held {
    token: u64,
    holder: LockHolder,
    style: LockStyle,
}

#[derive(Debug, Default)]
struct LockInner {
    held: Option<Held>,
    next_token: u64,
}

/// Page-level scroll lock shared by every overlay-like controller.
///
/// Cloning yields another handle to the same flag. The lock is single-threaded: it lives on
/// the host's event loop together with the controllers that take it.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    inner: Rc<RefCell<LockInner>>,
}

impl ScrollLock {
    /// Fresh, unlocked flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock page scrolling on behalf of `holder`.
    ///
    /// The returned guard is the only way to release the lock. If another holder already had
    /// it, the newest holder takes over and the older guard's release becomes a no-op.
    pub fn acquire(&self, holder: LockHolder, style: LockStyle) -> ScrollLockGuard {
        let mut inner = self.inner.borrow_mut();
        if let Some(prev) = inner.held.as_ref() {
            tracing::warn!(
                previous = ?prev.holder,
                next = ?holder,
                "scroll lock taken over by another holder"
            );
        }
        inner.next_token += 1;
        let token = inner.next_token;
        inner.held = Some(Held {
            token,
            holder,
            style,
        });
        tracing::debug!(?holder, ?style, "scroll lock acquired");
        ScrollLockGuard {
            lock: self.clone(),
            token,
            holder,
            released: false,
        }
    }

    /// Return `true` while some controller holds the lock.
    pub fn is_locked(&self) -> bool {
        self.inner.borrow().held.is_some()
    }

    /// Current holder, if any.
    pub fn holder(&self) -> Option<LockHolder> {
        self.inner.borrow().held.as_ref().map(|h| h.holder)
    }

    /// Current body style, if locked.
    pub fn style(&self) -> Option<LockStyle> {
        self.inner.borrow().held.as_ref().map(|h| h.style)
    }

    fn release(&self, token: u64, holder: LockHolder) {
        let mut inner = self.inner.borrow_mut();
        match inner.held.as_ref() {
            Some(h) if h.token == token => {
                inner.held = None;
                tracing::debug!(?holder, "scroll lock released");
            }
            _ => {
                tracing::trace!(?holder, "stale scroll lock guard released; lock left as is");
            }
        }
    }
}

/// Proof of holding the [`ScrollLock`]. Releases on [`ScrollLockGuard::release`] or drop.
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    lock: ScrollLock,
    token: u64,
    holder: LockHolder,
    released: bool,
}

impl ScrollLockGuard {
    /// Release now. Only clears the flag if this guard is still the current holder.
    pub fn release(mut self) {
        self.release_inner();
    }

    /// Holder this guard was issued to.
    pub fn holder(&self) -> LockHolder {
        self.holder
    }

    /// Return `true` while this guard is the one the lock currently records.
    pub fn is_current(&self) -> bool {
        self.lock
            .inner
            .borrow()
            .held
            .as_ref()
            .is_some_and(|h| h.token == self.token)
    }

    fn release_inner(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.lock.release(self.token, self.holder);
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lock/scroll.rs"]
mod tests;
