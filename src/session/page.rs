use crate::{
    foundation::error::ShutterResult,
    foundation::geometry::{ElementBounds, Viewport},
    foundation::ids::{NodeId, RevealHandle},
    gallery::controller::GalleryController,
    intro::sequencer::{IntroNodes, IntroSequencer, IntroStage},
    lock::scroll::ScrollLock,
    menu::overlay::{OverlayMenuController, OverlayNodes, OverlayState},
    reveal::controller::{RevealChange, RevealController, RevealMode},
    reveal::navbar::ScrolledFlag,
    reveal::parallax::ParallaxController,
    session::config::PageConfig,
    surface::scene::SceneGraph,
    surface::Surface,
};

/// Elements of one section that reveal together.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealGroup {
    pub name: String,
    /// Overrides the page-wide reveal mode.
    pub mode: Option<RevealMode>,
    /// Elements in stagger order.
    pub items: Vec<(NodeId, ElementBounds)>,
}

/// Node handles the presentation layer hands to a [`PageSession`].
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub intro: IntroNodes,
    /// `None` for pages without the overlay menu.
    pub menu: Option<OverlayNodes>,
    pub reveals: Vec<RevealGroup>,
    /// Background layers of sections marked `parallax`, one per section.
    pub parallax: Vec<(NodeId, ElementBounds)>,
}

impl PageLayout {
    /// Mount nodes for `config` into `scene`: the intro elements, one overlay item per menu
    /// entry, each section's items stacked evenly over the section's height, and a
    /// section-sized background layer for every parallax section.
    pub fn mount(scene: &mut SceneGraph, config: &PageConfig) -> Self {
        let intro = IntroNodes {
            overlay: scene.insert("intro-overlay"),
            camera: scene.insert("intro-camera"),
            loading_bar: scene.insert("intro-bar"),
            loading_fill: scene.insert("intro-fill"),
            counter: scene.insert("intro-counter"),
            logo: scene.insert("intro-logo"),
            tagline: scene.insert("intro-tagline"),
        };

        let m = &config.menu;
        let entries = m.links.len() + m.secondary_links.len() + usize::from(has_contact(config));
        let menu = OverlayNodes {
            panel: scene.insert("menu-panel"),
            items: scene.insert_many("menu-item", entries),
        };

        let reveals = config
            .sections
            .iter()
            .map(|s| {
                let count = s.items.max(1);
                let slot = s.height / count as f64;
                let items = (0..count)
                    .map(|i| {
                        let node = if s.items == 0 {
                            scene.insert(s.name.clone())
                        } else {
                            scene.insert(format!("{}-{i}", s.name))
                        };
                        (node, ElementBounds::new(s.top + slot * i as f64, slot))
                    })
                    .collect();
                RevealGroup {
                    name: s.name.clone(),
                    mode: s.mode,
                    items,
                }
            })
            .collect();

        let parallax = config
            .sections
            .iter()
            .filter(|s| s.parallax)
            .map(|s| {
                let node = scene.insert(format!("{}-parallax", s.name));
                (node, ElementBounds::new(s.top, s.height))
            })
            .collect();

        Self {
            intro,
            menu: Some(menu),
            reveals,
            parallax,
        }
    }
}

fn has_contact(config: &PageConfig) -> bool {
    let c = &config.menu.contact;
    !(c.phone.is_empty() && c.email.is_empty() && c.location.is_empty() && c.socials.is_empty())
}

/// Something observable that happened during [`PageSession::scroll`] or [`PageSession::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    IntroStage(IntroStage),
    MenuState(OverlayState),
    /// The navbar crossed its scrolled threshold; `true` means scrolled.
    NavbarScrolled(bool),
    /// A revealed element changed state. `section` names its [`RevealGroup`].
    Reveal { section: String, change: RevealChange },
}

/// Page-lifetime orchestrator.
///
/// Runs the intro first. Until it reaches [`IntroStage::Done`] the menu and gallery ignore
/// input and scroll positions are only remembered; the latest one is replayed into the navbar
/// flag, the reveal controller and the parallax layers on completion. After that every controller runs independently, sharing one
/// [`ScrollLock`].
#[derive(Debug)]
pub struct PageSession {
    lock: ScrollLock,
    intro: IntroSequencer,
    reveal: RevealController,
    groups: Vec<(String, Vec<RevealHandle>)>,
    parallax: ParallaxController,
    navbar: ScrolledFlag,
    /// Set when a scroll position has not been rendered into the parallax layers yet.
    parallax_dirty: bool,
    menu: Option<OverlayMenuController>,
    gallery: GalleryController,
    last_viewport: Option<Viewport>,
    torn_down: bool,
}

impl PageSession {
    /// Validate `config`, mount every controller and apply all hidden start states.
    pub fn mount(
        surface: &mut dyn Surface,
        config: &PageConfig,
        layout: PageLayout,
    ) -> ShutterResult<Self> {
        config.validate()?;
        let lock = ScrollLock::new();
        let intro = IntroSequencer::mount(surface, &lock, layout.intro, &config.intro)?;

        let mut reveal = RevealController::new();
        let mut groups = Vec::with_capacity(layout.reveals.len());
        for group in &layout.reveals {
            let tag = config.reveal.tag(&group.name, group.mode);
            let handles = reveal.register_batch(
                surface,
                &group.items,
                &tag,
                &config.reveal.preset,
                config.reveal.stagger,
            )?;
            groups.push((group.name.clone(), handles));
        }

        let mut parallax = ParallaxController::new();
        for &(node, bounds) in &layout.parallax {
            parallax.register(surface, node, bounds, config.parallax.shift_percent)?;
        }

        let menu = layout
            .menu
            .map(|nodes| OverlayMenuController::new(surface, &lock, nodes, config.menu.clone()))
            .transpose()?;
        let gallery = GalleryController::new(config.gallery.clone(), &lock)?;

        tracing::debug!(
            sections = groups.len(),
            reveals = reveal.len(),
            parallax = parallax.len(),
            menu = menu.is_some(),
            images = gallery.images().len(),
            "page mounted"
        );
        Ok(Self {
            lock,
            intro,
            reveal,
            groups,
            parallax,
            navbar: ScrolledFlag::new(config.navbar.scrolled_threshold),
            parallax_dirty: false,
            menu,
            gallery,
            last_viewport: None,
            torn_down: false,
        })
    }

    /// Start the intro.
    pub fn start(&mut self) -> ShutterResult<()> {
        self.intro.start()
    }

    /// Feed a scroll position. Held back until the intro is done.
    ///
    /// Parallax layers follow on the next [`PageSession::tick`], which owns the surface.
    pub fn scroll(&mut self, viewport: Viewport) -> Vec<PageEvent> {
        self.last_viewport = Some(viewport);
        self.parallax_dirty = true;
        if !self.is_ready() {
            tracing::trace!(?viewport, "scroll deferred until intro completes");
            return Vec::new();
        }
        self.apply_scroll(viewport)
    }

    fn apply_scroll(&mut self, viewport: Viewport) -> Vec<PageEvent> {
        let mut events = Vec::new();
        if let Some(scrolled) = self.navbar.update(viewport) {
            events.push(PageEvent::NavbarScrolled(scrolled));
        }
        let changes = self.reveal.on_scroll(viewport);
        events.extend(self.reveal_events(changes));
        events
    }

    /// Advance every controller by `dt` seconds.
    #[tracing::instrument(level = "trace", skip(self, surface))]
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> ShutterResult<Vec<PageEvent>> {
        let mut events = Vec::new();
        if self.torn_down {
            return Ok(events);
        }

        let entered = self.intro.tick(dt, surface)?;
        let finished = entered.contains(&IntroStage::Done);
        events.extend(entered.into_iter().map(PageEvent::IntroStage));
        if finished && let Some(viewport) = self.last_viewport {
            events.extend(self.apply_scroll(viewport));
        }
        if self.parallax_dirty
            && self.is_ready()
            && let Some(viewport) = self.last_viewport
        {
            self.parallax.on_scroll(viewport, surface);
            self.parallax_dirty = false;
        }

        let changes = self.reveal.tick(dt, surface);
        events.extend(self.reveal_events(changes));

        if let Some(menu) = self.menu.as_mut()
            && let Some(state) = menu.tick(dt, surface)
        {
            events.push(PageEvent::MenuState(state));
        }
        Ok(events)
    }

    fn reveal_events(&self, changes: Vec<RevealChange>) -> Vec<PageEvent> {
        changes
            .into_iter()
            .map(|change| PageEvent::Reveal {
                section: self.section_of(change.handle).unwrap_or_default().to_owned(),
                change,
            })
            .collect()
    }

    fn section_of(&self, handle: RevealHandle) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, handles)| handles.contains(&handle))
            .map(|(name, _)| name.as_str())
    }

    /// Toggle the overlay menu. Ignored until the intro is done.
    pub fn toggle_menu(&mut self) -> Option<OverlayState> {
        let menu = self.ready_menu()?;
        menu.toggle();
        Some(menu.state())
    }

    /// Open the overlay menu. Ignored until the intro is done.
    pub fn open_menu(&mut self) -> bool {
        self.ready_menu().is_some_and(OverlayMenuController::open)
    }

    /// Close the overlay menu. Ignored until the intro is done.
    pub fn close_menu(&mut self) -> bool {
        self.ready_menu().is_some_and(OverlayMenuController::close)
    }

    fn ready_menu(&mut self) -> Option<&mut OverlayMenuController> {
        if !self.is_ready() {
            tracing::debug!(stage = ?self.intro.stage(), "menu input ignored during intro");
            return None;
        }
        self.menu.as_mut()
    }

    /// Gallery for user interaction; `None` until the intro is done.
    pub fn gallery_mut(&mut self) -> Option<&mut GalleryController> {
        if !self.is_ready() {
            tracing::debug!(stage = ?self.intro.stage(), "gallery input ignored during intro");
            return None;
        }
        Some(&mut self.gallery)
    }

    /// Tear down every controller. The scroll lock is clear afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.intro.teardown();
        self.reveal.teardown();
        self.parallax.teardown();
        if let Some(menu) = self.menu.as_mut() {
            menu.teardown();
        }
        self.gallery.teardown();
        tracing::debug!(locked = self.lock.is_locked(), "page torn down");
    }

    /// Return `true` once the intro has completed and input is live.
    pub fn is_ready(&self) -> bool {
        self.intro.is_complete() && !self.torn_down
    }

    pub fn lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn intro(&self) -> &IntroSequencer {
        &self.intro
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn parallax(&self) -> &ParallaxController {
        &self.parallax
    }

    /// Return `true` while the navbar shows its scrolled look.
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar.is_scrolled()
    }

    pub fn menu(&self) -> Option<&OverlayMenuController> {
        self.menu.as_ref()
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    /// Reveal handles registered for section `name`, in stagger order.
    pub fn section(&self, name: &str) -> Option<&[RevealHandle]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, handles)| handles.as_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/page.rs"]
mod tests;
