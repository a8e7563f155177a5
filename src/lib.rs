//! Shutter orchestrates the animated surface of a photography studio site.
//!
//! The crate owns ordering, timing and lifecycle; rendering stays with the host, which hands
//! node handles in and receives property writes through [`Surface`]:
//!
//! - [`Timeline`]: ordered, eased property tweens with play/reverse/kill
//! - [`RevealController`] on top of [`ViewportObserver`]: scroll-triggered reveals
//! - [`ParallaxController`] and [`ScrolledFlag`]: scroll-scrubbed backgrounds, navbar state
//! - [`IntroSequencer`]: the one-shot splash with its synchronized counter
//! - [`OverlayMenuController`]: clipped full-screen navigation overlay
//! - [`GalleryController`]: category filter and circular lightbox
//! - [`PageSession`]: wires all of the above over one [`ScrollLock`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod gallery;
pub(crate) mod intro;
pub(crate) mod lock;
pub(crate) mod menu;
pub(crate) mod reveal;
pub(crate) mod session;
pub(crate) mod surface;

pub use crate::foundation::error::{ShutterError, ShutterResult};
pub use crate::foundation::geometry::{
    ElementBounds, Rect, Viewport, clip_band_closed, clip_band_open,
};
pub use crate::foundation::ids::{NodeId, ParallaxHandle, RevealHandle, SubscriptionId};

pub use crate::animation::ease::Ease;
pub use crate::animation::props::{Lerp, Prop, PropValue, PropertySet};
pub use crate::animation::step::{AnimationStep, Position};
pub use crate::animation::timeline::{Playback, ScheduleEntry, Timeline, TimelineEvent};
pub use crate::gallery::catalog::{Category, GalleryImage};
pub use crate::gallery::controller::{Direction, GalleryController};
pub use crate::intro::sequencer::{IntroNodes, IntroSequencer, IntroStage, IntroTiming};
pub use crate::lock::scroll::{LockHolder, LockStyle, ScrollLock, ScrollLockGuard};
pub use crate::menu::config::{ContactDetails, MenuLink, MenuTiming, OverlayMenuConfig, ThemeTokens};
pub use crate::menu::overlay::{OverlayMenuController, OverlayNodes, OverlayState};
pub use crate::reveal::controller::{
    RevealChange, RevealController, RevealMode, RevealPreset, RevealState, RevealStatus, RevealTag,
};
pub use crate::reveal::navbar::ScrolledFlag;
pub use crate::reveal::observer::{ObserveOptions, ViewportEvent, ViewportObserver};
pub use crate::reveal::parallax::{ParallaxController, scrub_progress};
pub use crate::session::config::{
    NavbarConfig, PageConfig, ParallaxConfig, RevealDefaults, SectionDef,
};
pub use crate::session::page::{PageEvent, PageLayout, PageSession, RevealGroup};
pub use crate::surface::Surface;
pub use crate::surface::scene::SceneGraph;
