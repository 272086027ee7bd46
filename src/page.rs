use super::*;
use behaviors::Disposer;
use render::RenderCache;

const DEFAULT_URL: &str = "about:blank";

/// One loaded page of the site with every behavior mounted.
///
/// All time is virtual: timers only run through [`Page::advance_time`],
/// [`Page::flush`] and friends.
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) config: SiteConfig,
    pub(crate) validator: ContactValidator,
    pub(crate) registry: ElementRegistry,
    pub(crate) view: ViewState,
    pub(crate) render_cache: RenderCache,
    pub(crate) listeners: ListenerStore,
    pub(crate) watches: WatchStore,
    pub(crate) disposers: HashMap<Component, Disposer>,
    pub(crate) viewport: Viewport,
    pub(crate) scheduler: SchedulerState,
    pub(crate) trace: TraceState,
    pub(crate) transport: Box<dyn ContactTransport>,
    pub(crate) submissions: Vec<ContactSubmission>,
    pub(crate) location: String,
    pub(crate) navigations: Vec<String>,
    pub(crate) active_element: Option<NodeId>,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("location", &self.location)
            .field("scroll_y", &self.viewport.scroll_y)
            .field("now_ms", &self.scheduler.now_ms)
            .field("view", &self.view)
            .field("mounted", &self.disposers.len())
            .finish_non_exhaustive()
    }
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_url(DEFAULT_URL, html)
    }

    pub fn from_html_with_url(url: &str, html: &str) -> Result<Self> {
        Self::from_html_with_config(url, html, SiteConfig::default())
    }

    pub fn from_html_with_config(url: &str, html: &str, config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let dom = html::parse_html(html)?;
        let validator = ContactValidator::from_config(&config.contact)?;
        let registry = ElementRegistry::resolve(&dom, &config.transition.page_suffix)?;
        let view = initial_view_state(&dom, &registry)?;

        let mut page = Self {
            viewport: Viewport::new(config.viewport.height),
            trace: TraceState::from_config(&config.trace),
            dom,
            config,
            validator,
            registry,
            view,
            render_cache: RenderCache::default(),
            listeners: ListenerStore::default(),
            watches: WatchStore::default(),
            disposers: HashMap::new(),
            scheduler: SchedulerState::default(),
            transport: Box::new(SimulatedTransport::default()),
            submissions: Vec::new(),
            location: url.to_string(),
            navigations: Vec::new(),
            active_element: None,
        };

        for component in Component::ALL {
            page.mount(component)?;
        }
        page.render()?;
        Ok(page)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn set_transport(&mut self, transport: impl ContactTransport + 'static) {
        self.transport = Box::new(transport);
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace.enabled = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace.take()
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.trace.events = enabled;
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.trace.timers = enabled;
    }

    pub fn set_trace_behaviors(&mut self, enabled: bool) {
        self.trace.behaviors = enabled;
    }

    /// Also emit trace lines as `tracing` debug events.
    pub fn set_trace_forwarding(&mut self, enabled: bool) {
        self.trace.forward = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        self.trace.set_log_limit(max_entries)
    }

    pub fn set_timer_step_limit(&mut self, max_steps: usize) -> Result<()> {
        if max_steps == 0 {
            return Err(Error::Runtime(
                "set_timer_step_limit requires at least 1 step".into(),
            ));
        }
        self.scheduler.timer_step_limit = max_steps;
        Ok(())
    }

    /// Replaces the value of an input or textarea and fires `input`.
    ///
    /// The field gets focus first, like a visitor clicking into it, so the
    /// previously focused field is blurred.
    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }

        let tag = self
            .dom
            .tag_name(target)
            .ok_or_else(|| Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: "non-element".into(),
            })?
            .to_ascii_lowercase();

        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        self.focus_node(target)?;
        self.dom.set_value(target, text)?;
        self.dispatch_event(EventTarget::Node(target), EventKind::Input)?;
        Ok(())
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.click_node(target)
    }

    pub fn focus(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.focus_node(target)
    }

    /// Fires `blur` if the element currently has focus.
    pub fn blur(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.blur_node(target)
    }

    /// Submits the form matched by `selector`, or the form owning it.
    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if let Some(form) = self.form_owner(target) {
            self.submit_form(form)?;
        }
        Ok(())
    }

    /// Moves the viewport as a visitor scrolling would.
    pub fn scroll_to(&mut self, y: f64) -> Result<()> {
        self.apply_scroll(y)
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport.inner_height
    }

    pub fn set_viewport_height(&mut self, height: f64) -> Result<()> {
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::Runtime(format!(
                "viewport height must be positive, got {height}"
            )));
        }
        self.viewport.inner_height = height;
        self.check_intersections()
    }

    /// Places the first element matching `selector` at `top` (document
    /// coordinates) with the given height.
    pub fn set_layout(&mut self, selector: &str, top: f64, height: f64) -> Result<()> {
        if !top.is_finite() || !height.is_finite() || height < 0.0 {
            return Err(Error::Runtime(format!(
                "invalid layout for {selector}: top={top}, height={height}"
            )));
        }
        let target = self.select_one(selector)?;
        self.dom.set_layout(target, LayoutBox { top, height })?;
        self.check_intersections()
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.viewport.requests
    }

    pub fn now_ms(&self) -> i64 {
        self.scheduler.now_ms
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.scheduler.pending()
    }

    pub fn advance_time(&mut self, delta_ms: i64) -> Result<()> {
        if delta_ms < 0 {
            return Err(Error::Runtime(
                "advance_time requires non-negative milliseconds".into(),
            ));
        }
        let from = self.scheduler.now_ms;
        self.scheduler.now_ms = self.scheduler.now_ms.saturating_add(delta_ms);
        let ran = self.run_due_timers_internal()?;
        let to = self.scheduler.now_ms;
        self.trace.timer_line(|| {
            format!("[timer] advance delta_ms={delta_ms} from={from} to={to} ran_due={ran}")
        });
        Ok(())
    }

    pub fn advance_time_to(&mut self, target_ms: i64) -> Result<()> {
        if target_ms < self.scheduler.now_ms {
            return Err(Error::Runtime(format!(
                "advance_time_to requires target >= now_ms (target={target_ms}, now_ms={})",
                self.scheduler.now_ms
            )));
        }
        let from = self.scheduler.now_ms;
        self.scheduler.now_ms = target_ms;
        let ran = self.run_due_timers_internal()?;
        self.trace.timer_line(|| {
            format!("[timer] advance_to from={from} to={target_ms} ran_due={ran}")
        });
        Ok(())
    }

    /// Runs every pending timer, moving the clock to each due time.
    pub fn flush(&mut self) -> Result<()> {
        let from = self.scheduler.now_ms;
        let ran = self.run_timer_queue(None, true)?;
        let to = self.scheduler.now_ms;
        self.trace
            .timer_line(|| format!("[timer] flush from={from} to={to} ran={ran}"));
        Ok(())
    }

    pub fn run_next_timer(&mut self) -> Result<bool> {
        let Some(next_idx) = self.scheduler.next_task_index(None) else {
            self.trace.timer_line(|| "[timer] run_next none".into());
            return Ok(false);
        };
        let task = self.scheduler.take(next_idx);
        if task.due_at > self.scheduler.now_ms {
            self.scheduler.now_ms = task.due_at;
        }
        self.execute_timer_task(task)?;
        Ok(true)
    }

    pub fn run_due_timers(&mut self) -> Result<usize> {
        let ran = self.run_due_timers_internal()?;
        let now_ms = self.scheduler.now_ms;
        self.trace
            .timer_line(|| format!("[timer] run_due now_ms={now_ms} ran={ran}"));
        Ok(ran)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Every URL the page navigated to, oldest first. Fragment jumps are not
    /// navigations.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// Submissions handed to the transport.
    pub fn submissions(&self) -> &[ContactSubmission] {
        &self.submissions
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Wires `component` again after [`Page::unmount`].
    ///
    /// Returns `false` without registering anything when the component is
    /// already mounted or its elements are missing from the document.
    pub fn mount(&mut self, component: Component) -> Result<bool> {
        if self.disposers.contains_key(&component) {
            return Ok(false);
        }
        if let Some(selector) = component.missing_binding(&self.registry) {
            self.trace.behavior_line(|| {
                format!("[behavior] skip {component} missing={selector}")
            });
            return Ok(false);
        }
        let disposer = self.mount_component(component)?;
        let registrations = disposer.registrations();
        self.trace.behavior_line(|| {
            format!("[behavior] mount {component} registrations={registrations}")
        });
        self.disposers.insert(component, disposer);
        self.render()?;
        self.check_intersections()?;
        Ok(true)
    }

    /// Removes every listener and watch `component` registered.
    pub fn unmount(&mut self, component: Component) -> bool {
        let Some(disposer) = self.disposers.remove(&component) else {
            return false;
        };
        let removed = self.dispose(disposer);
        self.trace.behavior_line(|| {
            format!("[behavior] unmount {component} removed={removed}")
        });
        true
    }

    pub fn is_mounted(&self, component: Component) -> bool {
        self.disposers.contains_key(&component)
    }

    /// Listeners and intersection watches currently registered.
    pub fn registration_count(&self) -> usize {
        self.listeners.len() + self.watches.len()
    }

    /// Components that could not be mounted, with the selector that found
    /// nothing.
    pub fn missing_elements(&self) -> Vec<(Component, &'static str)> {
        Component::ALL
            .into_iter()
            .filter_map(|component| {
                component
                    .missing_binding(&self.registry)
                    .map(|selector| (component, selector))
            })
            .collect()
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.text_content(target))
    }

    pub fn value(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.value(target)
    }

    pub fn inner_html(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.inner_html(target)
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        self.dom.class_contains(target, class_name)
    }

    /// Inline style property, empty when unset.
    pub fn style(&self, selector: &str, property: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.style_get(target, property)
    }

    pub fn is_disabled(&self, selector: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.dom.disabled(target))
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        self.check(selector, target, expected.to_string(), actual)
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        self.check(selector, target, expected.to_string(), actual)
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn assert_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.class_contains(target, class_name)?;
        self.check(
            selector,
            target,
            class_expectation(class_name, expected),
            class_expectation(class_name, actual),
        )
    }

    pub fn assert_style(&self, selector: &str, property: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.style_get(target, property)?;
        self.check(
            selector,
            target,
            format!("{property}: {expected}"),
            format!("{property}: {actual}"),
        )
    }

    pub fn assert_disabled(&self, selector: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.disabled(target);
        self.check(selector, target, expected.to_string(), actual.to_string())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    fn check(&self, selector: &str, target: NodeId, expected: String, actual: String) -> Result<()> {
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected,
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }
}

fn class_expectation(class_name: &str, present: bool) -> String {
    if present {
        format!("class `{class_name}` present")
    } else {
        format!("class `{class_name}` absent")
    }
}

/// Reveal elements start hidden; the FAQ starts from the first item the
/// markup ships open.
fn initial_view_state(dom: &Dom, registry: &ElementRegistry) -> Result<ViewState> {
    let mut view = ViewState {
        reveals: vec![RevealState::Hidden; registry.reveal_nodes().len()],
        ..ViewState::default()
    };
    if let Some(faq) = registry.faq.get() {
        for (idx, item) in faq.items.iter().enumerate() {
            if dom.class_contains(*item, "open")? {
                view.open_faq = Some(idx);
                break;
            }
        }
    }
    Ok(view)
}
