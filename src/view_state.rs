use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// One-way: an element never goes back to `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Handed to the transport, reply not delivered yet.
    Pending,
    /// Confirmation shown until the reset timer fires.
    Succeeded,
    Failed { reason: String },
}

impl SubmitPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    FadingOut { href: String },
    Navigated { href: String },
}

/// Transient UI state of every component on one page.
///
/// Handlers only change this value; the page renders it onto the document
/// after every handler ran.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub(crate) nav_scrolled: bool,
    pub(crate) active_section: Option<String>,
    pub(crate) menu: MenuState,
    pub(crate) reveals: Vec<RevealState>,
    pub(crate) parallax_offset: Option<f64>,
    pub(crate) open_faq: Option<usize>,
    pub(crate) fields: [FieldStatus; 3],
    pub(crate) submit: SubmitPhase,
    pub(crate) back_to_top_visible: bool,
    pub(crate) transition: TransitionState,
}

impl ViewState {
    pub fn nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    /// Id of the section the scroll-spy currently highlights.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Reveal state of every `.reveal` element, in document order.
    pub fn reveals(&self) -> &[RevealState] {
        &self.reveals
    }

    pub fn revealed_count(&self) -> usize {
        self.reveals
            .iter()
            .filter(|state| **state == RevealState::Visible)
            .count()
    }

    pub fn parallax_offset(&self) -> Option<f64> {
        self.parallax_offset
    }

    /// Index of the open `.faq-item`, in document order.
    pub fn open_faq(&self) -> Option<usize> {
        self.open_faq
    }

    pub fn field_status(&self, field: ContactField) -> FieldStatus {
        self.fields[field.index()]
    }

    pub fn submit_phase(&self) -> &SubmitPhase {
        &self.submit
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    pub(crate) fn set_field(&mut self, field: ContactField, status: FieldStatus) {
        self.fields[field.index()] = status;
    }
}
