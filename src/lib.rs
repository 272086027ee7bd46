//! Page behaviors of the Black Light Results marketing site.
//!
//! The behaviors (navigation highlighting, scroll-spy, mobile menu, reveal on
//! scroll, hero parallax, FAQ accordion, contact form validation, back-to-top
//! and page-transition fades) run on a small deterministic DOM runtime: a
//! [`Page`] parses the site's HTML, mounts every behavior and then reacts to
//! user actions driven from Rust.
//!
//! ```no_run
//! use blacklight_site::Page;
//!
//! # fn main() -> blacklight_site::Result<()> {
//! let mut page = Page::from_html("<body><nav class='nav'></nav></body>")?;
//! page.scroll_to(120.0)?;
//! page.assert_class(".nav", "scrolled", true)?;
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::error::Error as StdError;
use std::fmt;

mod behaviors;
mod config;
mod dom;
mod events;
mod html;
mod page;
mod registry;
mod render;
mod runtime;
mod scheduler;
mod selector;
mod site;
mod trace;
mod transport;
mod validation;
mod view_state;
mod viewport;

pub use behaviors::Component;
pub use config::{
    BackToTopConfig, ContactConfig, NavConfig, ParallaxConfig, RevealConfig, ScrollSpyConfig,
    SiteConfig, TraceConfig, TransitionConfig, ViewportConfig,
};
pub use page::Page;
pub use scheduler::PendingTimer;
pub use site::MockSite;
pub use transport::{
    ContactSubmission, ContactTransport, SimulatedTransport, TransportError, TransportReply,
};
pub use validation::{ContactField, ContactValidator};
pub use view_state::{
    FieldStatus, MenuState, RevealState, SubmitPhase, TransitionState, ViewState,
};
pub use viewport::{ScrollBehavior, ScrollRequest};

use dom::*;
use events::*;
use registry::*;
use scheduler::*;
use selector::*;
use trace::*;
use viewport::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    SelectorNotFound(String),
    UnsupportedSelector(String),
    Config(String),
    Validation(String),
    Runtime(String),
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
            Self::Runtime(msg) => write!(f, "runtime error: {msg}"),
            Self::TypeMismatch {
                selector,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {selector}: expected {expected}, actual {actual}"
            ),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
