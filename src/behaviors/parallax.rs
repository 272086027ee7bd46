use super::*;

/// Inline transform of the hero grid for a given offset.
pub(crate) fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

impl Page {
    pub(super) fn mount_parallax(&mut self, disposer: &mut Disposer) -> Result<()> {
        self.listen(
            disposer,
            EventTarget::Window,
            EventKind::Scroll,
            Handler::ParallaxScroll,
        );
        Ok(())
    }

    /// Past one viewport height the grid keeps its last offset. The orbs are
    /// animated by the stylesheet and stay untouched.
    pub(super) fn update_parallax(&mut self) -> Result<()> {
        let y = self.viewport.scroll_y;
        if y >= self.viewport.inner_height {
            return Ok(());
        }
        let offset = y * self.config.parallax.factor;
        self.view.parallax_offset = Some(offset);
        let orbs = self
            .registry
            .parallax
            .get()
            .map(|binding| binding.orbs.len())
            .unwrap_or(0);
        self.trace
            .behavior_line(|| format!("[behavior] parallax offset={offset} orbs={orbs}"));
        Ok(())
    }
}
