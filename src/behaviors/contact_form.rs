use super::*;

impl Page {
    pub(super) fn mount_contact_form(&mut self, disposer: &mut Disposer) -> Result<()> {
        let Some(binding) = self.registry.contact.get().cloned() else {
            return Ok(());
        };
        for field in ContactField::ALL {
            if let Some(bound) = binding.field(field) {
                self.listen(
                    disposer,
                    EventTarget::Node(bound.input),
                    EventKind::Blur,
                    Handler::FieldBlur(field),
                );
            }
        }
        self.listen(
            disposer,
            EventTarget::Node(binding.form),
            EventKind::Submit,
            Handler::ContactSubmit,
        );
        Ok(())
    }

    fn contact_field_value(&self, field: ContactField) -> Result<Option<String>> {
        let Some(bound) = self.registry.contact.get().and_then(|b| b.field(field)) else {
            return Ok(None);
        };
        self.dom.value(bound.input).map(Some)
    }

    pub(super) fn validate_field_on_blur(&mut self, field: ContactField) -> Result<()> {
        let Some(value) = self.contact_field_value(field)? else {
            return Ok(());
        };
        let status = self.validator.blur_status(field, &value)?;
        self.trace
            .behavior_line(|| format!("[behavior] contact blur field={field:?} status={status:?}"));
        self.view.set_field(field, status);
        Ok(())
    }

    pub(super) fn submit_contact_form(&mut self, event: &mut EventState) -> Result<()> {
        event.prevent_default();
        if !self.view.submit.is_idle() {
            let phase = self.view.submit.clone();
            self.trace
                .behavior_line(|| format!("[behavior] contact submit ignored phase={phase:?}"));
            return Ok(());
        }

        let mut submission = ContactSubmission::default();
        let mut failed = Vec::new();
        for field in ContactField::ALL {
            let Some(value) = self.contact_field_value(field)? else {
                continue;
            };
            if !self.validator.accepts(field, &value)? {
                // Passing fields keep whatever blur left on them.
                self.view.set_field(field, FieldStatus::Invalid);
                failed.push(field);
            }
            match field {
                ContactField::Name => submission.name = value,
                ContactField::Email => submission.email = value,
                ContactField::Message => submission.message = value,
            }
        }
        if !failed.is_empty() {
            self.trace
                .behavior_line(|| format!("[behavior] contact submit blocked invalid={failed:?}"));
            return Ok(());
        }

        let reply = self.transport.send(&submission);
        self.submissions.push(submission);
        if reply.latency_ms > 0 {
            self.trace.behavior_line(|| {
                format!(
                    "[behavior] contact submit pending latency_ms={}",
                    reply.latency_ms
                )
            });
            self.view.submit = SubmitPhase::Pending;
            self.schedule_timer(reply.latency_ms, TimerTask::CompleteSubmission(reply.outcome));
            return Ok(());
        }
        self.complete_submission(reply.outcome)
    }

    pub(crate) fn complete_submission(
        &mut self,
        outcome: std::result::Result<(), TransportError>,
    ) -> Result<()> {
        self.view.submit = match outcome {
            Ok(()) => SubmitPhase::Succeeded,
            Err(err) => SubmitPhase::Failed { reason: err.reason },
        };
        let phase = self.view.submit.clone();
        self.trace
            .behavior_line(|| format!("[behavior] contact submit result={phase:?}"));
        let delay = self.config.contact.reset_delay_ms;
        self.schedule_timer(delay, TimerTask::ResetContactForm);
        Ok(())
    }

    /// After a success the form is cleared; after a failure only the submit
    /// control comes back, so the visitor can retry.
    pub(crate) fn reset_contact_form(&mut self) -> Result<()> {
        let succeeded = matches!(self.view.submit, SubmitPhase::Succeeded);
        self.view.submit = SubmitPhase::Idle;
        if !succeeded {
            self.trace
                .behavior_line(|| "[behavior] contact restore after failure".to_string());
            return Ok(());
        }
        let Some(form) = self.registry.contact.get().map(|binding| binding.form) else {
            return Ok(());
        };
        for control in self.dom.query_selector_all_from(form, "input, textarea, select")? {
            self.dom.reset_value(control)?;
        }
        for field in ContactField::ALL {
            self.view.set_field(field, FieldStatus::Untouched);
        }
        self.trace
            .behavior_line(|| "[behavior] contact reset".to_string());
        Ok(())
    }
}
