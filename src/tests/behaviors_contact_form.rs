use super::*;

#[test]
fn blur_marks_fields_valid_or_invalid() -> Result<()> {
    let mut page = site_page()?;
    fill_contact_form(&mut page, "A", "bad", "Hallo Welt!")?;

    // Typing into a field blurs the previous one.
    page.assert_class("#group-name", "invalid", true)?;
    page.assert_class("#group-email", "invalid", true)?;
    page.assert_class("#group-message", "valid", false)?;
    page.assert_class("#group-message", "invalid", false)?;

    page.blur("#message")?;
    page.assert_class("#group-message", "valid", true)?;

    page.type_text("#name", "Al")?;
    page.blur("#name")?;
    page.assert_class("#group-name", "valid", true)?;
    page.assert_class("#group-name", "invalid", false)?;
    assert_eq!(
        page.view_state().field_status(ContactField::Email),
        FieldStatus::Invalid
    );
    Ok(())
}

#[test]
fn blurring_an_empty_field_clears_its_status() -> Result<()> {
    let mut page = site_page()?;
    page.type_text("#name", "A")?;
    page.blur("#name")?;
    page.assert_class("#group-name", "invalid", true)?;

    page.type_text("#name", "   ")?;
    page.blur("#name")?;
    page.assert_class("#group-name", "invalid", false)?;
    page.assert_class("#group-name", "valid", false)?;
    assert_eq!(
        page.view_state().field_status(ContactField::Name),
        FieldStatus::Untouched
    );
    Ok(())
}

#[test]
fn blur_without_focus_is_ignored() -> Result<()> {
    let mut page = site_page()?;
    page.blur("#email")?;
    assert_eq!(
        page.view_state().field_status(ContactField::Email),
        FieldStatus::Untouched
    );
    Ok(())
}

#[test]
fn invalid_submit_marks_failing_fields_and_sends_nothing() -> Result<()> {
    let mut page = site_page()?;
    fill_contact_form(&mut page, "A", "a@b", "0123456789")?;
    page.click(".form-submit")?;

    page.assert_class("#group-name", "invalid", true)?;
    page.assert_class("#group-email", "invalid", true)?;
    // The message still has focus, so nothing has judged it yet.
    page.assert_class("#group-message", "valid", false)?;
    page.assert_class("#group-message", "invalid", false)?;

    assert!(page.submissions().is_empty());
    assert!(page.navigations().is_empty());
    assert!(page.view_state().submit_phase().is_idle());
    page.assert_text(".form-submit", "Nachricht senden")?;
    page.assert_disabled(".form-submit", false)?;
    Ok(())
}

#[test]
fn successful_submit_shows_confirmation_then_clears_the_form() -> Result<()> {
    let mut page = site_page()?;
    fill_contact_form(&mut page, "  Al ", "a@b.co", "0123456789")?;
    page.submit("#contact-form")?;

    assert_eq!(
        page.submissions(),
        &[ContactSubmission {
            name: "  Al ".into(),
            email: "a@b.co".into(),
            message: "0123456789".into(),
        }]
    );
    assert_eq!(page.view_state().submit_phase(), &SubmitPhase::Succeeded);
    page.assert_text(".form-submit", "Nachricht gesendet!")?;
    page.assert_style(".form-submit", "background", "#06d6a0")?;
    page.assert_style(".form-submit span", "color", "#fff")?;
    page.assert_disabled(".form-submit", true)?;
    assert!(page.navigations().is_empty());

    page.advance_time(2999)?;
    page.assert_text(".form-submit", "Nachricht gesendet!")?;

    page.advance_time(1)?;
    page.assert_text(".form-submit", "Nachricht senden")?;
    page.assert_style(".form-submit", "background", "")?;
    page.assert_disabled(".form-submit", false)?;
    page.assert_value("#name", "")?;
    page.assert_value("#email", "")?;
    page.assert_value("#message", "")?;
    for group in ["#group-name", "#group-email", "#group-message"] {
        page.assert_class(group, "valid", false)?;
        page.assert_class(group, "invalid", false)?;
    }
    assert!(page.view_state().submit_phase().is_idle());
    Ok(())
}

#[test]
fn reset_restores_authored_default_values() -> Result<()> {
    let html = r#"
        <form id="contact-form">
          <div class="form-group"><input id="name" value="Gast"></div>
          <div class="form-group"><input id="email" value=""></div>
          <div class="form-group"><textarea id="message">Bitte ruft mich an.</textarea></div>
          <button class="form-submit">Senden</button>
        </form>
        "#;
    let mut page = Page::from_html(html)?;
    page.type_text("#name", "Alex")?;
    page.type_text("#email", "alex@example.org")?;
    page.submit("#contact-form")?;
    page.flush()?;

    page.assert_value("#name", "Gast")?;
    page.assert_value("#email", "")?;
    page.assert_value("#message", "Bitte ruft mich an.")?;
    Ok(())
}

#[test]
fn failed_submit_shows_failure_and_keeps_the_fields() -> Result<()> {
    let mut page = site_page()?;
    page.set_transport(SimulatedTransport::failing("offline"));
    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.click(".form-submit")?;

    assert_eq!(
        page.view_state().submit_phase(),
        &SubmitPhase::Failed {
            reason: "offline".into()
        }
    );
    page.assert_text(".form-submit", "Senden fehlgeschlagen")?;
    page.assert_style(".form-submit", "background", "#ef476f")?;
    page.assert_disabled(".form-submit", true)?;

    page.advance_time(3000)?;
    page.assert_text(".form-submit", "Nachricht senden")?;
    page.assert_disabled(".form-submit", false)?;
    page.assert_value("#name", "Al")?;
    page.assert_value("#message", "0123456789")?;
    page.assert_class("#group-email", "valid", true)?;
    Ok(())
}

#[test]
fn slow_transport_shows_pending_state() -> Result<()> {
    let mut page = site_page()?;
    page.set_transport(SimulatedTransport::default().with_latency(500));
    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.click(".form-submit")?;

    assert_eq!(page.view_state().submit_phase(), &SubmitPhase::Pending);
    page.assert_text(".form-submit", "Wird gesendet…")?;
    page.assert_disabled(".form-submit", true)?;
    let pending = page.pending_timers();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].label, "complete_submission");
    assert_eq!(pending[0].due_at, 500);

    page.advance_time(500)?;
    page.assert_text(".form-submit", "Nachricht gesendet!")?;
    assert_eq!(page.pending_timers()[0].due_at, 3500);

    page.advance_time(3000)?;
    assert!(page.view_state().submit_phase().is_idle());
    page.assert_value("#name", "")?;
    Ok(())
}

#[test]
fn submit_is_ignored_until_the_form_is_idle_again() -> Result<()> {
    let mut page = site_page()?;
    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.submit("#contact-form")?;
    page.submit("#contact-form")?;
    assert_eq!(page.submissions().len(), 1);
    assert_eq!(page.pending_timers().len(), 1);
    assert!(page.navigations().is_empty());

    page.advance_time(3000)?;
    fill_contact_form(&mut page, "Bo", "b@c.de", "Noch eine Nachricht")?;
    page.submit("#contact-form")?;
    assert_eq!(page.submissions().len(), 2);
    Ok(())
}

#[test]
fn disabled_submit_control_ignores_clicks() -> Result<()> {
    let mut page = site_page()?;
    page.set_transport(SimulatedTransport::default().with_latency(100));
    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.click(".form-submit")?;
    page.click(".form-submit")?;
    assert_eq!(page.submissions().len(), 1);
    Ok(())
}

#[test]
fn closure_transport_receives_the_submission() -> Result<()> {
    let mut page = site_page()?;
    page.set_transport(|submission: &ContactSubmission| {
        if submission.email.ends_with(".invalid") {
            TransportReply::failure("rejected")
        } else {
            TransportReply::success().after(20)
        }
    });
    fill_contact_form(&mut page, "Al", "a@b.invalid", "0123456789")?;
    page.submit("#contact-form")?;
    assert_eq!(
        page.view_state().submit_phase(),
        &SubmitPhase::Failed {
            reason: "rejected".into()
        }
    );
    Ok(())
}

#[test]
fn form_without_contact_listener_navigates_to_its_action() -> Result<()> {
    let mut page = site_page()?;
    assert!(page.unmount(Component::ContactForm));
    page.click(".form-submit")?;
    assert_eq!(page.navigations(), &["https://blacklight.test/danke.html".to_string()]);
    Ok(())
}

#[test]
fn type_text_rejects_non_text_controls() -> Result<()> {
    let mut page = site_page()?;
    match page.type_text(".form-submit", "x") {
        Err(Error::TypeMismatch { actual, .. }) => assert_eq!(actual, "button"),
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[test]
fn short_name_and_bad_email_block_submit() -> Result<()> {
    let mut page = site_page()?;
    fill_contact_form(&mut page, "A", "bad", "1234567890")?;
    page.blur("#message")?;
    page.submit("#contact-form")?;

    page.assert_class("#group-name", "invalid", true)?;
    page.assert_class("#group-email", "invalid", true)?;
    page.assert_class("#group-message", "valid", true)?;
    assert!(page.submissions().is_empty());
    Ok(())
}

#[test]
fn clicking_inside_the_submit_control_submits_the_form() -> Result<()> {
    let html = r#"
        <form id="contact-form">
          <div class="form-group"><input id="name"></div>
          <div class="form-group"><input id="email"></div>
          <div class="form-group"><textarea id="message"></textarea></div>
          <button type="submit" class="form-submit">Senden <span class="arrow">→</span></button>
        </form>
        "#;
    let mut page = Page::from_html(html)?;
    page.set_transport(SimulatedTransport::default().with_latency(100));
    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.click(".form-submit .arrow")?;
    assert_eq!(page.submissions().len(), 1);
    assert_eq!(page.view_state().submit_phase(), &SubmitPhase::Pending);

    // The control is disabled while pending, and so is everything inside it.
    page.type_text("#name", "Bo")?;
    page.click(".form-submit")?;
    page.click(".form-submit")?;
    assert_eq!(page.submissions().len(), 1);
    assert!(page.navigations().is_empty());

    page.advance_time(100)?;
    assert_eq!(page.view_state().submit_phase(), &SubmitPhase::Succeeded);
    Ok(())
}

#[test]
fn submit_control_markup_is_only_rewritten_on_phase_changes() -> Result<()> {
    let mut page = site_page()?;
    let loaded = page.dom.nodes.len();
    for y in [0.0, 300.0, 900.0, 0.0] {
        page.scroll_to(y)?;
    }
    page.type_text("#name", "Al")?;
    page.blur("#name")?;
    assert_eq!(page.dom.nodes.len(), loaded);

    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.submit("#contact-form")?;
    page.advance_time(3000)?;
    let one_cycle = page.dom.nodes.len() - loaded;
    assert!(one_cycle > 0);

    fill_contact_form(&mut page, "Al", "a@b.co", "0123456789")?;
    page.submit("#contact-form")?;
    page.advance_time(3000)?;
    assert_eq!(page.dom.nodes.len(), loaded + 2 * one_cycle);
    Ok(())
}
