use super::*;

pub(crate) const TRACE_TARGET: &str = "blacklight_site::trace";

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) events: bool,
    pub(crate) timers: bool,
    pub(crate) behaviors: bool,
    pub(crate) forward: bool,
    pub(crate) log_limit: usize,
    pub(crate) logs: VecDeque<String>,
}

impl TraceState {
    pub(crate) fn from_config(config: &TraceConfig) -> Self {
        Self {
            enabled: config.enabled,
            events: config.events,
            timers: config.timers,
            behaviors: config.behaviors,
            forward: config.forward,
            log_limit: config.log_limit.max(1),
            logs: VecDeque::new(),
        }
    }

    pub(crate) fn event_line(&mut self, line: impl FnOnce() -> String) {
        if self.enabled && self.events {
            self.push(line());
        }
    }

    pub(crate) fn timer_line(&mut self, line: impl FnOnce() -> String) {
        if self.enabled && self.timers {
            self.push(line());
        }
    }

    pub(crate) fn behavior_line(&mut self, line: impl FnOnce() -> String) {
        if self.enabled && self.behaviors {
            self.push(line());
        }
    }

    pub(crate) fn set_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Runtime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.log_limit = max_entries;
        while self.logs.len() > self.log_limit {
            self.logs.pop_front();
        }
        Ok(())
    }

    pub(crate) fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs).into()
    }

    fn push(&mut self, line: String) {
        if self.forward {
            tracing::debug!(target: TRACE_TARGET, "{line}");
        }
        if self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }
}
