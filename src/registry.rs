use super::*;

/// A binding resolved once when the page loads.
///
/// `Absent` carries the selector that found nothing, so a skipped component
/// can say why.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Bound<T> {
    Present(T),
    Absent(&'static str),
}

impl<T> Bound<T> {
    fn from_option(value: Option<T>, selector: &'static str) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent(selector),
        }
    }

    pub(crate) fn get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    pub(crate) fn missing(&self) -> Option<&'static str> {
        match self {
            Self::Present(_) => None,
            Self::Absent(selector) => Some(selector),
        }
    }
}

impl<T> Bound<Vec<T>> {
    fn non_empty(values: Vec<T>, selector: &'static str) -> Self {
        if values.is_empty() {
            Self::Absent(selector)
        } else {
            Self::Present(values)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScrollSpyBinding {
    /// Links with their `href`, e.g. `#leistungen`.
    pub(crate) links: Vec<(NodeId, String)>,
    /// Sections with their `id`, in document order.
    pub(crate) sections: Vec<(NodeId, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MenuBinding {
    pub(crate) hamburger: NodeId,
    pub(crate) menu: NodeId,
    pub(crate) links: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParallaxBinding {
    pub(crate) grid: NodeId,
    pub(crate) orbs: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FaqBinding {
    pub(crate) items: Vec<NodeId>,
    /// `.faq-question` of each item; items without one cannot be toggled.
    pub(crate) questions: Vec<Option<NodeId>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FieldBinding {
    pub(crate) input: NodeId,
    pub(crate) group: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ContactBinding {
    pub(crate) form: NodeId,
    pub(crate) fields: [Option<FieldBinding>; 3],
    pub(crate) submit: Option<NodeId>,
    /// Markup of the submit control as authored, restored after a submission.
    pub(crate) submit_label: String,
}

impl ContactBinding {
    pub(crate) fn field(&self, field: ContactField) -> Option<FieldBinding> {
        self.fields[field.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLink {
    pub(crate) node: NodeId,
    pub(crate) href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ElementRegistry {
    pub(crate) body: Bound<NodeId>,
    pub(crate) nav: Bound<NodeId>,
    pub(crate) scroll_spy: Bound<ScrollSpyBinding>,
    pub(crate) mobile_menu: Bound<MenuBinding>,
    pub(crate) reveals: Bound<Vec<NodeId>>,
    pub(crate) parallax: Bound<ParallaxBinding>,
    pub(crate) faq: Bound<FaqBinding>,
    pub(crate) contact: Bound<ContactBinding>,
    pub(crate) back_to_top: Bound<NodeId>,
    pub(crate) page_links: Bound<Vec<PageLink>>,
}

impl ElementRegistry {
    pub(crate) fn resolve(dom: &Dom, page_suffix: &str) -> Result<Self> {
        Ok(Self {
            body: Bound::from_option(dom.find_first_by_tag("body"), "body"),
            nav: Bound::from_option(dom.query_selector(".nav")?, ".nav"),
            scroll_spy: resolve_scroll_spy(dom)?,
            mobile_menu: resolve_mobile_menu(dom)?,
            reveals: Bound::non_empty(dom.query_selector_all(".reveal")?, ".reveal"),
            parallax: resolve_parallax(dom)?,
            faq: resolve_faq(dom)?,
            contact: resolve_contact(dom)?,
            back_to_top: Bound::from_option(
                dom.query_selector(".back-to-top")?,
                ".back-to-top",
            ),
            page_links: resolve_page_links(dom, page_suffix)?,
        })
    }

    pub(crate) fn reveal_nodes(&self) -> &[NodeId] {
        self.reveals.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn reveal_index(&self, node: NodeId) -> Option<usize> {
        self.reveal_nodes().iter().position(|candidate| *candidate == node)
    }
}

fn resolve_scroll_spy(dom: &Dom) -> Result<Bound<ScrollSpyBinding>> {
    let links = dom
        .query_selector_all(".nav-links a[href^=\"#\"]")?
        .into_iter()
        .map(|node| (node, dom.attr(node, "href").unwrap_or_default()))
        .collect::<Vec<_>>();
    if links.is_empty() {
        return Ok(Bound::Absent(".nav-links a[href^=\"#\"]"));
    }
    let sections = dom
        .query_selector_all("section[id]")?
        .into_iter()
        .map(|node| (node, dom.attr(node, "id").unwrap_or_default()))
        .collect::<Vec<_>>();
    if sections.is_empty() {
        return Ok(Bound::Absent("section[id]"));
    }
    Ok(Bound::Present(ScrollSpyBinding { links, sections }))
}

fn resolve_mobile_menu(dom: &Dom) -> Result<Bound<MenuBinding>> {
    let Some(hamburger) = dom.query_selector(".nav-hamburger")? else {
        return Ok(Bound::Absent(".nav-hamburger"));
    };
    let Some(menu) = dom.query_selector(".mobile-menu")? else {
        return Ok(Bound::Absent(".mobile-menu"));
    };
    let links = dom.query_selector_all_from(menu, "a")?;
    Ok(Bound::Present(MenuBinding {
        hamburger,
        menu,
        links,
    }))
}

fn resolve_parallax(dom: &Dom) -> Result<Bound<ParallaxBinding>> {
    let Some(grid) = dom.query_selector(".hero-grid")? else {
        return Ok(Bound::Absent(".hero-grid"));
    };
    let orbs = dom.query_selector_all(".hero .uv-orb")?;
    Ok(Bound::Present(ParallaxBinding { grid, orbs }))
}

fn resolve_faq(dom: &Dom) -> Result<Bound<FaqBinding>> {
    let items = dom.query_selector_all(".faq-item")?;
    if items.is_empty() {
        return Ok(Bound::Absent(".faq-item"));
    }
    let questions = items
        .iter()
        .map(|item| dom.query_selector_from(*item, ".faq-question"))
        .collect::<Result<Vec<_>>>()?;
    Ok(Bound::Present(FaqBinding { items, questions }))
}

fn resolve_contact(dom: &Dom) -> Result<Bound<ContactBinding>> {
    let Some(form) = dom.query_selector("#contact-form")? else {
        return Ok(Bound::Absent("#contact-form"));
    };
    let mut fields = [None; 3];
    for field in ContactField::ALL {
        let Some(input) = dom.query_selector_from(form, field.selector())? else {
            continue;
        };
        let group = dom.closest(input, ".form-group")?;
        fields[field.index()] = Some(FieldBinding { input, group });
    }
    let submit = dom.query_selector_from(form, ".form-submit")?;
    let submit_label = match submit {
        Some(node) => dom.inner_html(node)?,
        None => String::new(),
    };
    Ok(Bound::Present(ContactBinding {
        form,
        fields,
        submit,
        submit_label,
    }))
}

fn resolve_page_links(dom: &Dom, page_suffix: &str) -> Result<Bound<Vec<PageLink>>> {
    let links = dom
        .query_selector_all("a[href]")?
        .into_iter()
        .filter_map(|node| {
            let href = dom.attr(node, "href")?;
            behaviors::page_transition::is_page_link(&href, page_suffix)
                .then_some(PageLink { node, href })
        })
        .collect::<Vec<_>>();
    Ok(Bound::non_empty(links, "a[href] to a local page"))
}
