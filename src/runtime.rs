use super::*;

impl Page {
    pub(crate) fn dispatch_event(&mut self, target: EventTarget, kind: EventKind) -> Result<EventState> {
        let mut event = EventState::new(kind, target);

        let mut path = vec![target];
        if let EventTarget::Node(node) = target {
            if kind.bubbles() {
                let mut cursor = self.dom.parent(node);
                while let Some(parent) = cursor {
                    path.push(EventTarget::Node(parent));
                    cursor = self.dom.parent(parent);
                }
                path.push(EventTarget::Window);
            }
        }

        for current in path {
            event.current_target = current;
            self.invoke_listeners(current, &mut event)?;
        }

        self.trace_event_done(&event);
        Ok(event)
    }

    fn invoke_listeners(&mut self, current: EventTarget, event: &mut EventState) -> Result<()> {
        let listeners = self.listeners.get(current, event.kind);
        for listener in listeners {
            if !self.listeners.contains(listener.id) {
                continue;
            }
            if self.trace.enabled {
                let target_label = self.trace_target_label(event.target);
                let current_label = self.trace_target_label(event.current_target);
                let component = listener.handler.component();
                let kind = event.kind.as_str();
                let default_prevented = event.default_prevented;
                self.trace.event_line(|| {
                    format!(
                        "[event] {kind} target={target_label} current={current_label} component={component} default_prevented={default_prevented}"
                    )
                });
            }
            self.invoke(listener.handler, event)?;
            self.render()?;
        }
        Ok(())
    }

    fn trace_event_done(&mut self, event: &EventState) {
        if !self.trace.enabled {
            return;
        }
        let target_label = self.trace_target_label(event.target);
        let kind = event.kind.as_str();
        let default_prevented = event.default_prevented;
        self.trace.event_line(|| {
            format!("[event] done {kind} target={target_label} default_prevented={default_prevented}")
        });
    }

    pub(crate) fn trace_target_label(&self, target: EventTarget) -> String {
        let EventTarget::Node(node) = target else {
            return "window".into();
        };
        if let Some(id) = self.dom.attr(node, "id") {
            if !id.is_empty() {
                return format!("#{id}");
            }
        }
        self.dom
            .tag_name(node)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("node-{}", node.0))
    }

    pub(crate) fn click_node(&mut self, target: NodeId) -> Result<()> {
        // Clicks on content inside a button belong to that button.
        let control = self.dom.closest(target, "button, input")?;
        if self.dom.disabled(target) || control.is_some_and(|node| self.dom.disabled(node)) {
            return Ok(());
        }

        let outcome = self.dispatch_event(EventTarget::Node(target), EventKind::Click)?;
        if outcome.default_prevented {
            return Ok(());
        }

        if let Some(link) = self.dom.closest(target, "a[href]")? {
            let href = self.dom.attr(link, "href").unwrap_or_default();
            return self.follow_link(&href);
        }

        let Some(control) = control else {
            return Ok(());
        };
        if is_submit_control(&self.dom, control) {
            if let Some(form) = self.form_owner(control) {
                self.submit_form(form)?;
            }
        }
        Ok(())
    }

    pub(crate) fn submit_form(&mut self, form: NodeId) -> Result<()> {
        let outcome = self.dispatch_event(EventTarget::Node(form), EventKind::Submit)?;
        if outcome.default_prevented {
            return Ok(());
        }
        let action = self
            .dom
            .attr(form, "action")
            .filter(|action| !action.is_empty())
            .unwrap_or_else(|| self.location.clone());
        self.navigate(&action)
    }

    pub(crate) fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        if self
            .dom
            .tag_name(node)
            .map(|tag| tag.eq_ignore_ascii_case("form"))
            .unwrap_or(false)
        {
            return Some(node);
        }
        self.dom.find_ancestor_by_tag(node, "form")
    }

    pub(crate) fn focus_node(&mut self, node: NodeId) -> Result<()> {
        if self.dom.disabled(node) || self.active_element == Some(node) {
            return Ok(());
        }
        if let Some(current) = self.active_element {
            self.blur_node(current)?;
        }
        self.active_element = Some(node);
        self.dispatch_event(EventTarget::Node(node), EventKind::Focus)?;
        Ok(())
    }

    pub(crate) fn blur_node(&mut self, node: NodeId) -> Result<()> {
        if self.active_element != Some(node) {
            return Ok(());
        }
        self.dispatch_event(EventTarget::Node(node), EventKind::Blur)?;
        self.active_element = None;
        Ok(())
    }

    fn follow_link(&mut self, href: &str) -> Result<()> {
        let Some(fragment) = href.strip_prefix('#') else {
            return self.navigate(href);
        };
        let top = if fragment.is_empty() {
            Some(0.0)
        } else {
            self.dom.by_id(fragment).map(|node| self.dom.offset_top(node))
        };
        self.location = format!("{}{href}", strip_fragment(&self.location));
        match top {
            Some(top) => self.request_scroll(top, ScrollBehavior::Instant),
            None => Ok(()),
        }
    }

    /// Records a programmatic scroll and resolves it at once.
    pub(crate) fn request_scroll(&mut self, top: f64, behavior: ScrollBehavior) -> Result<()> {
        self.viewport.requests.push(ScrollRequest { top, behavior });
        self.apply_scroll(top)
    }

    pub(crate) fn apply_scroll(&mut self, y: f64) -> Result<()> {
        if !y.is_finite() {
            return Err(Error::Runtime(format!("scroll offset must be finite, got {y}")));
        }
        self.viewport.scroll_y = y.max(0.0);
        self.dispatch_event(EventTarget::Window, EventKind::Scroll)?;
        self.check_intersections()
    }

    pub(crate) fn navigate(&mut self, href: &str) -> Result<()> {
        let resolved = resolve_url(&self.location, href);
        let from = self.location.clone();
        self.trace
            .behavior_line(|| format!("[behavior] navigate from={from} to={resolved}"));
        self.location = resolved.clone();
        self.navigations.push(resolved);
        Ok(())
    }

    /// Delivers entries to every watch whose targets crossed its threshold.
    pub(crate) fn check_intersections(&mut self) -> Result<()> {
        for watch in self.watches.snapshot() {
            if !self.watches.contains(watch.id) {
                continue;
            }
            let entries = watch
                .targets
                .iter()
                .copied()
                .filter(|node| {
                    self.viewport
                        .intersection_ratio(self.dom.layout(*node))
                        .is_some_and(|ratio| ratio >= watch.threshold)
                })
                .collect::<Vec<_>>();
            if entries.is_empty() {
                continue;
            }
            let count = entries.len();
            let scroll_y = self.viewport.scroll_y;
            let component = watch.handler.component();
            self.trace.event_line(|| {
                format!("[event] intersect component={component} entries={count} scroll_y={scroll_y}")
            });
            self.deliver_intersections(watch.handler, watch.id, &entries)?;
            self.render()?;
        }
        Ok(())
    }

    pub(crate) fn schedule_timer(&mut self, delay_ms: i64, task: TimerTask) {
        let scheduled = self.scheduler.schedule(delay_ms, task);
        self.trace.timer_line(|| {
            format!(
                "[timer] schedule id={} task={} due_at={} delay_ms={delay_ms}",
                scheduled.id,
                scheduled.task.label(),
                scheduled.due_at
            )
        });
    }

    pub(crate) fn run_due_timers_internal(&mut self) -> Result<usize> {
        let now = self.scheduler.now_ms;
        self.run_timer_queue(Some(now), false)
    }

    pub(crate) fn run_timer_queue(&mut self, due_limit: Option<i64>, advance_clock: bool) -> Result<usize> {
        let mut steps = 0usize;
        while let Some(next_idx) = self.scheduler.next_task_index(due_limit) {
            steps += 1;
            if steps > self.scheduler.timer_step_limit {
                return Err(self.scheduler.step_limit_error(steps, due_limit));
            }
            let task = self.scheduler.take(next_idx);
            if advance_clock && task.due_at > self.scheduler.now_ms {
                self.scheduler.now_ms = task.due_at;
            }
            self.execute_timer_task(task)?;
        }
        Ok(steps)
    }

    pub(crate) fn execute_timer_task(&mut self, task: ScheduledTask) -> Result<()> {
        let now_ms = self.scheduler.now_ms;
        self.trace.timer_line(|| {
            format!(
                "[timer] run id={} task={} due_at={} now_ms={now_ms}",
                task.id,
                task.task.label(),
                task.due_at
            )
        });
        match task.task {
            TimerTask::ResetContactForm => self.reset_contact_form()?,
            TimerTask::CompleteSubmission(outcome) => self.complete_submission(outcome)?,
            TimerTask::Navigate { href } => self.finish_page_transition(href)?,
        }
        self.render()
    }
}

fn is_submit_control(dom: &Dom, node: NodeId) -> bool {
    let Some(tag) = dom.tag_name(node) else {
        return false;
    };
    let kind = dom
        .attr(node, "type")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if tag.eq_ignore_ascii_case("button") {
        return kind.is_empty() || kind == "submit";
    }
    tag.eq_ignore_ascii_case("input") && (kind == "submit" || kind == "image")
}

fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map(|(base, _)| base).unwrap_or(url)
}

/// Resolves `href` against the document URL the way a browser follows links.
pub(crate) fn resolve_url(base: &str, href: &str) -> String {
    let href = href.trim();
    if has_scheme(href) {
        return href.to_string();
    }
    let base = strip_fragment(base);
    if href.starts_with('#') {
        return format!("{base}{href}");
    }
    let Some((scheme, rest)) = base.split_once("://") else {
        return href.to_string();
    };
    let (host, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, "/"),
    };
    if let Some(network_path) = href.strip_prefix("//") {
        return format!("{scheme}://{network_path}");
    }
    let path = path.split_once('?').map(|(path, _)| path).unwrap_or(path);
    if href.starts_with('?') {
        return format!("{scheme}://{host}{path}{href}");
    }

    let joined = if href.starts_with('/') {
        href.to_string()
    } else {
        let dir = path.rfind('/').map(|idx| &path[..=idx]).unwrap_or("/");
        format!("{dir}{href}")
    };

    let (joined_path, suffix) = match joined.find(['?', '#']) {
        Some(idx) => (&joined[..idx], &joined[idx..]),
        None => (joined.as_str(), ""),
    };
    let mut segments: Vec<&str> = Vec::new();
    let parts = joined_path.split('/').skip(1).collect::<Vec<_>>();
    let last = parts.len().saturating_sub(1);
    for (idx, segment) in parts.into_iter().enumerate() {
        match segment {
            "." => {
                if idx == last {
                    segments.push("");
                }
            }
            ".." => {
                segments.pop();
                if idx == last {
                    segments.push("");
                }
            }
            other => segments.push(other),
        }
    }
    format!("{scheme}://{host}/{}{suffix}", segments.join("/"))
}

fn has_scheme(href: &str) -> bool {
    let Some(colon) = href.find(':') else {
        return false;
    };
    let scheme = &href[..colon];
    !scheme.is_empty()
        && scheme
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}
