use super::*;
use transport::TransportError;

/// Work a one-shot timer performs when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimerTask {
    /// Restore the contact form after its result was shown.
    ResetContactForm,
    /// Deliver a transport reply that reported latency.
    CompleteSubmission(std::result::Result<(), TransportError>),
    /// Follow a link once the fade-out finished.
    Navigate { href: String },
}

impl TimerTask {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::ResetContactForm => "reset_contact_form",
            Self::CompleteSubmission(_) => "complete_submission",
            Self::Navigate { .. } => "navigate",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ScheduledTask {
    pub(crate) id: i64,
    pub(crate) due_at: i64,
    pub(crate) order: i64,
    pub(crate) task: TimerTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: i64,
    pub due_at: i64,
    pub order: i64,
    pub label: &'static str,
}

#[derive(Debug)]
pub(crate) struct SchedulerState {
    pub(crate) now_ms: i64,
    pub(crate) task_queue: Vec<ScheduledTask>,
    pub(crate) timer_step_limit: usize,
    next_timer_id: i64,
    next_task_order: i64,
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self {
            now_ms: 0,
            task_queue: Vec::new(),
            timer_step_limit: 10_000,
            next_timer_id: 1,
            next_task_order: 0,
        }
    }
}

impl SchedulerState {
    pub(crate) fn schedule(&mut self, delay_ms: i64, task: TimerTask) -> ScheduledTask {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        let order = self.next_task_order;
        self.next_task_order += 1;
        let scheduled = ScheduledTask {
            id,
            due_at: self.now_ms.saturating_add(delay_ms.max(0)),
            order,
            task,
        };
        self.task_queue.push(scheduled.clone());
        scheduled
    }

    pub(crate) fn next_task_index(&self, due_limit: Option<i64>) -> Option<usize> {
        self.task_queue
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }

    pub(crate) fn take(&mut self, idx: usize) -> ScheduledTask {
        self.task_queue.remove(idx)
    }

    pub(crate) fn pending(&self) -> Vec<PendingTimer> {
        let mut timers = self
            .task_queue
            .iter()
            .map(|task| PendingTimer {
                id: task.id,
                due_at: task.due_at,
                order: task.order,
                label: task.task.label(),
            })
            .collect::<Vec<_>>();
        timers.sort_by_key(|timer| (timer.due_at, timer.order));
        timers
    }

    pub(crate) fn step_limit_error(&self, steps: usize, due_limit: Option<i64>) -> Error {
        let due_limit_desc = due_limit
            .map(|value| value.to_string())
            .unwrap_or_else(|| "none".into());
        let next_task_desc = self
            .next_task_index(due_limit)
            .and_then(|idx| self.task_queue.get(idx))
            .map(|task| {
                format!(
                    "id={},due_at={},order={},task={}",
                    task.id,
                    task.due_at,
                    task.order,
                    task.task.label()
                )
            })
            .unwrap_or_else(|| "none".into());

        Error::Runtime(format!(
            "timer queue exceeded max steps: limit={}, steps={steps}, now_ms={}, due_limit={due_limit_desc}, pending_tasks={}, next_task={next_task_desc}",
            self.timer_step_limit,
            self.now_ms,
            self.task_queue.len(),
        ))
    }
}
