use super::*;

/// Links to local pages fade the document out before navigating; anchors and
/// absolute URLs are left to the browser.
pub(crate) fn is_page_link(href: &str, page_suffix: &str) -> bool {
    href.ends_with(page_suffix) && !href.starts_with("http") && !href.starts_with('#')
}

impl Page {
    pub(super) fn mount_page_transition(&mut self, disposer: &mut Disposer) -> Result<()> {
        let nodes = self
            .registry
            .page_links
            .get()
            .map(|links| links.iter().map(|link| link.node).collect::<Vec<_>>())
            .unwrap_or_default();
        for (link, node) in nodes.into_iter().enumerate() {
            self.listen(
                disposer,
                EventTarget::Node(node),
                EventKind::Click,
                Handler::PageLinkClick { link },
            );
        }
        Ok(())
    }

    pub(super) fn start_page_transition(
        &mut self,
        link: usize,
        event: &mut EventState,
    ) -> Result<()> {
        event.prevent_default();
        if let TransitionState::FadingOut { href } = &self.view.transition {
            let pending = href.clone();
            self.trace.behavior_line(|| {
                format!("[behavior] page_transition click swallowed pending={pending}")
            });
            return Ok(());
        }
        let href = self
            .registry
            .page_links
            .get()
            .and_then(|links| links.get(link))
            .map(|link| link.href.clone())
            .ok_or_else(|| Error::Runtime(format!("page link {link} is not bound")))?;
        let fade_ms = self.config.transition.fade_ms;
        self.trace
            .behavior_line(|| format!("[behavior] page_transition fade href={href} fade_ms={fade_ms}"));
        self.view.transition = TransitionState::FadingOut { href: href.clone() };
        self.schedule_timer(fade_ms, TimerTask::Navigate { href });
        Ok(())
    }

    pub(crate) fn finish_page_transition(&mut self, href: String) -> Result<()> {
        self.view.transition = TransitionState::Navigated { href: href.clone() };
        self.navigate(&href)
    }
}
