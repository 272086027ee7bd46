use super::*;

impl Page {
    pub(super) fn mount_mobile_menu(&mut self, disposer: &mut Disposer) -> Result<()> {
        let Some(binding) = self.registry.mobile_menu.get().cloned() else {
            return Ok(());
        };
        self.listen(
            disposer,
            EventTarget::Node(binding.hamburger),
            EventKind::Click,
            Handler::MenuToggle,
        );
        for link in binding.links {
            self.listen(
                disposer,
                EventTarget::Node(link),
                EventKind::Click,
                Handler::MenuLinkClose,
            );
        }
        Ok(())
    }

    pub(super) fn toggle_mobile_menu(&mut self) -> Result<()> {
        self.view.menu = self.view.menu.toggled();
        let menu = self.view.menu;
        self.trace
            .behavior_line(|| format!("[behavior] mobile_menu toggle state={menu:?}"));
        Ok(())
    }

    /// Runs before the link's own navigation, so the menu is closed when the
    /// next page (or section) shows.
    pub(super) fn close_mobile_menu(&mut self) -> Result<()> {
        if self.view.menu.is_open() {
            self.trace
                .behavior_line(|| "[behavior] mobile_menu close via link".to_string());
        }
        self.view.menu = MenuState::Closed;
        Ok(())
    }
}
