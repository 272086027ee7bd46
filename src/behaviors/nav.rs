use super::*;

/// Whether the navigation bar is styled as scrolled at offset `scroll_y`.
pub(crate) fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

impl Page {
    pub(super) fn mount_nav(&mut self, disposer: &mut Disposer) -> Result<()> {
        self.listen(disposer, EventTarget::Window, EventKind::Scroll, Handler::NavScroll);
        self.update_nav()
    }

    pub(super) fn update_nav(&mut self) -> Result<()> {
        let scrolled = is_scrolled(self.viewport.scroll_y, self.config.nav.scrolled_threshold);
        if scrolled != self.view.nav_scrolled {
            self.trace.behavior_line(|| format!("[behavior] nav scrolled={scrolled}"));
        }
        self.view.nav_scrolled = scrolled;
        Ok(())
    }
}
