use super::*;

#[test]
fn guard_release_clears_lock() {
    let lock = ScrollLock::new();
    let guard = lock.acquire(LockHolder::OverlayMenu, LockStyle::Fixed);
    assert!(lock.is_locked());
    assert_eq!(lock.holder(), Some(LockHolder::OverlayMenu));
    assert_eq!(lock.style(), Some(LockStyle::Fixed));
    guard.release();
    assert!(!lock.is_locked());
}

#[test]
fn dropping_guard_releases() {
    let lock = ScrollLock::new();
    {
        let _guard = lock.acquire(LockHolder::Intro, LockStyle::Hidden);
        assert!(lock.is_locked());
    }
    assert!(!lock.is_locked());
}

#[test]
fn stale_guard_cannot_clobber_newer_holder() {
    let lock = ScrollLock::new();
    let first = lock.acquire(LockHolder::Lightbox, LockStyle::Hidden);
    let second = lock.acquire(LockHolder::OverlayMenu, LockStyle::Fixed);
    assert!(!first.is_current());
    assert!(second.is_current());

    first.release();
    assert_eq!(lock.holder(), Some(LockHolder::OverlayMenu));

    second.release();
    assert!(!lock.is_locked());
}

#[test]
fn clones_share_the_flag() {
    let lock = ScrollLock::new();
    let other = lock.clone();
    let guard = other.acquire(LockHolder::Lightbox, LockStyle::Hidden);
    assert!(lock.is_locked());
    assert_eq!(guard.holder(), LockHolder::Lightbox);
    drop(guard);
    assert!(!lock.is_locked());
}
