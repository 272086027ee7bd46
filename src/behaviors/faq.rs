use super::*;

impl Page {
    pub(super) fn mount_faq(&mut self, disposer: &mut Disposer) -> Result<()> {
        let Some(binding) = self.registry.faq.get() else {
            return Ok(());
        };
        let questions = binding
            .questions
            .iter()
            .enumerate()
            .filter_map(|(item, question)| question.map(|node| (item, node)))
            .collect::<Vec<_>>();
        for (item, question) in questions {
            self.listen(
                disposer,
                EventTarget::Node(question),
                EventKind::Click,
                Handler::FaqQuestion { item },
            );
        }
        Ok(())
    }

    /// Closes every other item and flips the clicked one.
    pub(super) fn toggle_faq_item(&mut self, item: usize) -> Result<()> {
        self.view.open_faq = if self.view.open_faq == Some(item) {
            None
        } else {
            Some(item)
        };
        let open = self.view.open_faq;
        self.trace
            .behavior_line(|| format!("[behavior] faq item={item} open={open:?}"));
        Ok(())
    }
}
