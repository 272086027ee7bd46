use super::*;

/// What the last render wrote for the parts that replace markup or inline
/// styles, so those are only touched when their state changes.
#[derive(Debug)]
pub(crate) struct RenderCache {
    menu: Option<MenuState>,
    submit: SubmitPhase,
    transition: TransitionState,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self {
            menu: None,
            submit: SubmitPhase::Idle,
            transition: TransitionState::Idle,
        }
    }
}

impl Page {
    /// Projects the view state onto the document.
    pub(crate) fn render(&mut self) -> Result<()> {
        let Self {
            dom,
            registry,
            view,
            render_cache,
            config,
            ..
        } = self;

        if let Some(nav) = registry.nav.get() {
            dom.class_set(*nav, "scrolled", view.nav_scrolled)?;
        }

        if let Some(spy) = registry.scroll_spy.get() {
            for (link, href) in &spy.links {
                let active = view
                    .active_section
                    .as_deref()
                    .is_some_and(|id| href.strip_prefix('#') == Some(id));
                dom.class_set(*link, "active", active)?;
            }
        }

        if let Some(menu) = registry.mobile_menu.get() {
            if render_cache.menu != Some(view.menu) {
                let open = view.menu.is_open();
                dom.class_set(menu.menu, "open", open)?;
                dom.class_set(menu.hamburger, "open", open)?;
                if let Some(body) = registry.body.get() {
                    dom.style_set(*body, "overflow", if open { "hidden" } else { "" })?;
                }
                render_cache.menu = Some(view.menu);
            }
        }

        for (node, state) in registry.reveal_nodes().iter().zip(&view.reveals) {
            if *state == RevealState::Visible {
                dom.class_add(*node, "visible")?;
            }
        }

        if let (Some(parallax), Some(offset)) = (registry.parallax.get(), view.parallax_offset) {
            let transform = behaviors::parallax::translate_y(offset);
            dom.style_set(parallax.grid, "transform", &transform)?;
        }

        if let Some(faq) = registry.faq.get() {
            for (idx, item) in faq.items.iter().enumerate() {
                dom.class_set(*item, "open", view.open_faq == Some(idx))?;
            }
        }

        if let Some(contact) = registry.contact.get() {
            for field in ContactField::ALL {
                let Some(group) = contact.field(field).and_then(|bound| bound.group) else {
                    continue;
                };
                let status = view.field_status(field);
                dom.class_set(group, "valid", status == FieldStatus::Valid)?;
                dom.class_set(group, "invalid", status == FieldStatus::Invalid)?;
            }
            if render_cache.submit != view.submit {
                if let Some(submit) = contact.submit {
                    render_submit_control(dom, submit, contact, &view.submit, &config.contact)?;
                }
                render_cache.submit = view.submit.clone();
            }
        }

        if let Some(control) = registry.back_to_top.get() {
            dom.class_set(*control, "visible", view.back_to_top_visible)?;
        }

        if render_cache.transition != view.transition {
            if let (TransitionState::FadingOut { .. }, Some(body)) =
                (&view.transition, registry.body.get())
            {
                let seconds = config.transition.fade_ms as f64 / 1000.0;
                let transition = format!("opacity {seconds}s {}", config.transition.easing);
                dom.style_set(*body, "transition", &transition)?;
                dom.style_set(*body, "opacity", "0")?;
            }
            render_cache.transition = view.transition.clone();
        }

        Ok(())
    }
}

fn render_submit_control(
    dom: &mut Dom,
    submit: NodeId,
    contact: &ContactBinding,
    phase: &SubmitPhase,
    config: &ContactConfig,
) -> Result<()> {
    match phase {
        SubmitPhase::Idle => {
            dom.set_inner_html(submit, &contact.submit_label)?;
            dom.style_set(submit, "background", "")?;
            dom.set_disabled(submit, false)
        }
        SubmitPhase::Pending => {
            dom.set_inner_html(submit, &escape_text(&config.pending_message))?;
            dom.set_disabled(submit, true)
        }
        SubmitPhase::Succeeded => {
            let label = format!(
                "<span style=\"color:#fff\">{}</span>",
                escape_text(&config.success_message)
            );
            dom.set_inner_html(submit, &label)?;
            dom.style_set(submit, "background", &config.success_color)?;
            dom.set_disabled(submit, true)
        }
        SubmitPhase::Failed { .. } => {
            let label = format!(
                "<span style=\"color:#fff\">{}</span>",
                escape_text(&config.failure_message)
            );
            dom.set_inner_html(submit, &label)?;
            dom.style_set(submit, "background", &config.failure_color)?;
            dom.set_disabled(submit, true)
        }
    }
}
