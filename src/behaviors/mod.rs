use super::*;

pub(crate) mod back_to_top;
mod contact_form;
mod faq;
mod mobile_menu;
pub(crate) mod nav;
pub(crate) mod page_transition;
pub(crate) mod parallax;
mod reveal;
pub(crate) mod scroll_spy;

/// One of the independent page behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    Nav,
    ScrollSpy,
    MobileMenu,
    Reveal,
    Parallax,
    Faq,
    ContactForm,
    BackToTop,
    PageTransition,
}

impl Component {
    /// Mount order of a freshly loaded page.
    pub const ALL: [Component; 9] = [
        Self::Nav,
        Self::ScrollSpy,
        Self::MobileMenu,
        Self::Reveal,
        Self::Parallax,
        Self::Faq,
        Self::ContactForm,
        Self::BackToTop,
        Self::PageTransition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::ScrollSpy => "scroll_spy",
            Self::MobileMenu => "mobile_menu",
            Self::Reveal => "reveal",
            Self::Parallax => "parallax",
            Self::Faq => "faq",
            Self::ContactForm => "contact_form",
            Self::BackToTop => "back_to_top",
            Self::PageTransition => "page_transition",
        }
    }

    /// Selector of the first required element the registry could not bind.
    pub(crate) fn missing_binding(self, registry: &ElementRegistry) -> Option<&'static str> {
        match self {
            Self::Nav => registry.nav.missing(),
            Self::ScrollSpy => registry.scroll_spy.missing(),
            Self::MobileMenu => registry.mobile_menu.missing(),
            Self::Reveal => registry.reveals.missing(),
            Self::Parallax => registry.parallax.missing(),
            Self::Faq => registry.faq.missing(),
            Self::ContactForm => registry.contact.missing(),
            Self::BackToTop => registry.back_to_top.missing(),
            Self::PageTransition => registry.page_links.missing(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a registered listener or intersection watch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    NavScroll,
    ScrollSpyScroll,
    MenuToggle,
    MenuLinkClose,
    RevealEntries,
    ParallaxScroll,
    FaqQuestion { item: usize },
    FieldBlur(ContactField),
    ContactSubmit,
    BackToTopScroll,
    BackToTopClick,
    PageLinkClick { link: usize },
}

impl Handler {
    pub(crate) fn component(self) -> Component {
        match self {
            Self::NavScroll => Component::Nav,
            Self::ScrollSpyScroll => Component::ScrollSpy,
            Self::MenuToggle | Self::MenuLinkClose => Component::MobileMenu,
            Self::RevealEntries => Component::Reveal,
            Self::ParallaxScroll => Component::Parallax,
            Self::FaqQuestion { .. } => Component::Faq,
            Self::FieldBlur(_) | Self::ContactSubmit => Component::ContactForm,
            Self::BackToTopScroll | Self::BackToTopClick => Component::BackToTop,
            Self::PageLinkClick { .. } => Component::PageTransition,
        }
    }
}

/// Registrations made by one component mount; disposing removes all of them.
#[derive(Debug, Default)]
pub(crate) struct Disposer {
    listeners: Vec<ListenerId>,
    watches: Vec<WatchId>,
}

impl Disposer {
    pub(crate) fn registrations(&self) -> usize {
        self.listeners.len() + self.watches.len()
    }
}

impl Page {
    pub(crate) fn listen(
        &mut self,
        disposer: &mut Disposer,
        target: EventTarget,
        kind: EventKind,
        handler: Handler,
    ) {
        disposer.listeners.push(self.listeners.add(target, kind, handler));
    }

    pub(crate) fn watch(
        &mut self,
        disposer: &mut Disposer,
        threshold: f64,
        targets: Vec<NodeId>,
        handler: Handler,
    ) {
        disposer
            .watches
            .push(self.watches.observe(threshold, targets, handler));
    }

    /// Wires `component`; the registry must hold its required elements.
    pub(crate) fn mount_component(&mut self, component: Component) -> Result<Disposer> {
        let mut disposer = Disposer::default();
        match component {
            Component::Nav => self.mount_nav(&mut disposer)?,
            Component::ScrollSpy => self.mount_scroll_spy(&mut disposer)?,
            Component::MobileMenu => self.mount_mobile_menu(&mut disposer)?,
            Component::Reveal => self.mount_reveal(&mut disposer)?,
            Component::Parallax => self.mount_parallax(&mut disposer)?,
            Component::Faq => self.mount_faq(&mut disposer)?,
            Component::ContactForm => self.mount_contact_form(&mut disposer)?,
            Component::BackToTop => self.mount_back_to_top(&mut disposer)?,
            Component::PageTransition => self.mount_page_transition(&mut disposer)?,
        }
        Ok(disposer)
    }

    pub(crate) fn dispose(&mut self, disposer: Disposer) -> usize {
        let mut removed = 0;
        for id in disposer.listeners {
            removed += usize::from(self.listeners.remove(id));
        }
        for id in disposer.watches {
            removed += usize::from(self.watches.disconnect(id));
        }
        removed
    }

    pub(crate) fn invoke(&mut self, handler: Handler, event: &mut EventState) -> Result<()> {
        match handler {
            Handler::NavScroll => self.update_nav(),
            Handler::ScrollSpyScroll => self.update_scroll_spy(),
            Handler::MenuToggle => self.toggle_mobile_menu(),
            Handler::MenuLinkClose => self.close_mobile_menu(),
            Handler::ParallaxScroll => self.update_parallax(),
            Handler::FaqQuestion { item } => self.toggle_faq_item(item),
            Handler::FieldBlur(field) => self.validate_field_on_blur(field),
            Handler::ContactSubmit => self.submit_contact_form(event),
            Handler::BackToTopScroll => self.update_back_to_top(),
            Handler::BackToTopClick => self.scroll_back_to_top(),
            Handler::PageLinkClick { link } => self.start_page_transition(link, event),
            Handler::RevealEntries => Err(Error::Runtime(
                "reveal handler is driven by intersection entries, not events".into(),
            )),
        }
    }

    pub(crate) fn deliver_intersections(
        &mut self,
        handler: Handler,
        watch: WatchId,
        entries: &[NodeId],
    ) -> Result<()> {
        match handler {
            Handler::RevealEntries => self.reveal_entries(watch, entries),
            other => Err(Error::Runtime(format!(
                "{other:?} cannot receive intersection entries"
            ))),
        }
    }
}
