use super::*;

pub(crate) fn is_back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

impl Page {
    pub(super) fn mount_back_to_top(&mut self, disposer: &mut Disposer) -> Result<()> {
        let Some(control) = self.registry.back_to_top.get().copied() else {
            return Ok(());
        };
        self.listen(
            disposer,
            EventTarget::Window,
            EventKind::Scroll,
            Handler::BackToTopScroll,
        );
        self.listen(
            disposer,
            EventTarget::Node(control),
            EventKind::Click,
            Handler::BackToTopClick,
        );
        self.update_back_to_top()
    }

    pub(super) fn update_back_to_top(&mut self) -> Result<()> {
        self.view.back_to_top_visible =
            is_back_to_top_visible(self.viewport.scroll_y, self.config.back_to_top.threshold);
        Ok(())
    }

    pub(super) fn scroll_back_to_top(&mut self) -> Result<()> {
        self.trace
            .behavior_line(|| "[behavior] back_to_top smooth scroll".to_string());
        self.request_scroll(0.0, ScrollBehavior::Smooth)
    }
}
