use super::*;

/// Index of the last section whose top lies at or above `probe`.
///
/// Sections are scanned in document order and a later match replaces an
/// earlier one, so overlapping or unordered tops still pick the last hit.
pub(crate) fn active_section_index(section_tops: &[f64], probe: f64) -> Option<usize> {
    section_tops
        .iter()
        .enumerate()
        .filter(|(_, top)| probe >= **top)
        .map(|(idx, _)| idx)
        .last()
}

impl Page {
    pub(super) fn mount_scroll_spy(&mut self, disposer: &mut Disposer) -> Result<()> {
        self.listen(
            disposer,
            EventTarget::Window,
            EventKind::Scroll,
            Handler::ScrollSpyScroll,
        );
        self.update_scroll_spy()
    }

    pub(super) fn update_scroll_spy(&mut self) -> Result<()> {
        let Some(binding) = self.registry.scroll_spy.get() else {
            return Ok(());
        };
        let tops = binding
            .sections
            .iter()
            .map(|(node, _)| self.dom.offset_top(*node))
            .collect::<Vec<_>>();
        let probe = self.viewport.scroll_y + self.config.scroll_spy.lookahead;
        let active = active_section_index(&tops, probe).map(|idx| binding.sections[idx].1.clone());
        if active != self.view.active_section {
            self.trace.behavior_line(|| {
                format!(
                    "[behavior] scroll_spy probe={probe} active={}",
                    active.as_deref().unwrap_or("none")
                )
            });
        }
        self.view.active_section = active;
        Ok(())
    }
}
