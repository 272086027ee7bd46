use super::*;

impl Page {
    pub(super) fn mount_reveal(&mut self, disposer: &mut Disposer) -> Result<()> {
        let hidden = self
            .registry
            .reveal_nodes()
            .iter()
            .zip(&self.view.reveals)
            .filter(|(_, state)| **state == RevealState::Hidden)
            .map(|(node, _)| *node)
            .collect::<Vec<_>>();
        let threshold = self.config.reveal.threshold;
        self.watch(disposer, threshold, hidden, Handler::RevealEntries);
        Ok(())
    }

    pub(super) fn reveal_entries(&mut self, watch: WatchId, entries: &[NodeId]) -> Result<()> {
        for node in entries {
            let Some(idx) = self.registry.reveal_index(*node) else {
                continue;
            };
            // Watching stops with the first delivery.
            self.watches.unobserve(watch, *node);
            if self.view.reveals[idx] == RevealState::Visible {
                continue;
            }
            self.view.reveals[idx] = RevealState::Visible;
            self.trace
                .behavior_line(|| format!("[behavior] reveal index={idx} visible"));
        }
        Ok(())
    }
}
