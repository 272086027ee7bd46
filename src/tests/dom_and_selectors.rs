use super::*;

#[test]
fn parses_site_markup_and_resolves_registry() -> Result<()> {
    let page = site_page()?;
    let registry = &page.registry;

    let spy = registry.scroll_spy.get().map(|spy| {
        spy.links
            .iter()
            .map(|(_, href)| href.as_str())
            .collect::<Vec<_>>()
    });
    assert_eq!(spy, Some(vec!["#leistungen", "#ablauf", "#faq"]));
    assert_eq!(
        registry
            .scroll_spy
            .get()
            .map(|spy| spy.sections.iter().map(|(_, id)| id.clone()).collect::<Vec<_>>()),
        Some(vec!["leistungen".into(), "ablauf".into(), "faq".into()])
    );
    assert_eq!(registry.reveal_nodes().len(), 3);
    assert_eq!(registry.parallax.get().map(|p| p.orbs.len()), Some(2));
    assert_eq!(registry.mobile_menu.get().map(|m| m.links.len()), Some(2));

    let hrefs = registry
        .page_links
        .get()
        .map(|links| links.iter().map(|link| link.href.as_str()).collect::<Vec<_>>());
    assert_eq!(
        hrefs,
        Some(vec![
            "index.html",
            "kontakt.html",
            "kontakt.html",
            "impressum.html"
        ])
    );

    let contact = registry.contact.get().cloned();
    let contact = contact.ok_or_else(|| Error::Runtime("contact form not bound".into()))?;
    assert!(contact.submit.is_some());
    assert_eq!(contact.submit_label, "Nachricht senden");
    for field in ContactField::ALL {
        let bound = contact.field(field);
        assert!(bound.is_some_and(|bound| bound.group.is_some()), "{field:?}");
    }
    Ok(())
}

#[test]
fn registry_records_the_selector_that_found_nothing() -> Result<()> {
    let dom = html::parse_html("<div class='hero'><div class='uv-orb'></div></div>")?;
    let registry = ElementRegistry::resolve(&dom, ".html")?;
    assert_eq!(registry.parallax.missing(), Some(".hero-grid"));
    assert_eq!(registry.body.missing(), Some("body"));
    assert!(registry.reveal_nodes().is_empty());
    Ok(())
}

#[test]
fn contact_form_without_groups_or_submit_still_binds() -> Result<()> {
    let dom = html::parse_html(r#"<form id="contact-form"><input id="email"></form>"#)?;
    let registry = ElementRegistry::resolve(&dom, ".html")?;
    let contact = registry
        .contact
        .get()
        .ok_or_else(|| Error::Runtime("contact form not bound".into()))?;
    assert!(contact.field(ContactField::Name).is_none());
    assert!(
        contact
            .field(ContactField::Email)
            .is_some_and(|bound| bound.group.is_none())
    );
    assert!(contact.submit.is_none());
    assert_eq!(contact.submit_label, "");
    Ok(())
}

#[test]
fn selectors_cover_attribute_prefixes_and_descendants() -> Result<()> {
    let page = site_page()?;
    let dom = &page.dom;
    assert_eq!(dom.query_selector_all(".nav-links a[href^=\"#\"]")?.len(), 3);
    assert_eq!(dom.query_selector_all("a[href$=\".html\"]")?.len(), 5);
    assert_eq!(dom.query_selector_all("section[id]")?.len(), 3);
    assert_eq!(dom.query_selector_all(".nav-links > li > a")?.len(), 4);
    assert_eq!(dom.query_selector_all("a:not([href^=\"#\"])")?.len(), 5);
    assert_eq!(
        dom.query_selector_all("input, textarea, select")?.len(),
        3
    );

    let question = dom
        .query_selector("#faq-2 .faq-question")?
        .ok_or_else(|| Error::SelectorNotFound("#faq-2 .faq-question".into()))?;
    assert_eq!(dom.closest(question, ".faq-item")?, dom.by_id("faq-2"));
    assert_eq!(dom.closest(question, ".form-group")?, None);
    Ok(())
}

#[test]
fn unknown_selector_reports_not_found() -> Result<()> {
    let page = site_page()?;
    assert!(matches!(
        page.text("#does-not-exist"),
        Err(Error::SelectorNotFound(selector)) if selector == "#does-not-exist"
    ));
    Ok(())
}

#[test]
fn class_and_style_edits_keep_other_tokens() -> Result<()> {
    let mut dom = html::parse_html(
        r#"<div id="box" class="card reveal" style="color: red; transform: none;"></div>"#,
    )?;
    let node = dom
        .by_id("box")
        .ok_or_else(|| Error::SelectorNotFound("#box".into()))?;

    dom.class_set(node, "visible", true)?;
    dom.class_set(node, "visible", true)?;
    assert_eq!(dom.attr(node, "class").as_deref(), Some("card reveal visible"));
    dom.class_set(node, "reveal", false)?;
    assert_eq!(dom.attr(node, "class").as_deref(), Some("card visible"));

    dom.style_set(node, "transform", "translateY(6px)")?;
    assert_eq!(dom.style_get(node, "transform")?, "translateY(6px)");
    assert_eq!(dom.style_get(node, "COLOR")?, "red");
    dom.style_set(node, "color", "")?;
    assert_eq!(
        dom.attr(node, "style").as_deref(),
        Some("transform: translateY(6px);")
    );
    dom.style_set(node, "transform", "")?;
    assert_eq!(dom.attr(node, "style"), None);
    Ok(())
}

#[test]
fn inner_html_round_trips_markup_and_entities() -> Result<()> {
    let mut dom = html::parse_html(r#"<button id="b">Senden &amp; <span class="arrow">→</span></button>"#)?;
    let node = dom
        .by_id("b")
        .ok_or_else(|| Error::SelectorNotFound("#b".into()))?;
    assert_eq!(dom.text_content(node), "Senden & →");
    let markup = dom.inner_html(node)?;
    assert_eq!(markup, "Senden &amp; <span class=\"arrow\">→</span>");

    dom.set_inner_html(node, "<span style=\"color:#fff\">OK</span>")?;
    assert_eq!(dom.text_content(node), "OK");
    dom.set_inner_html(node, &markup)?;
    assert_eq!(dom.text_content(node), "Senden & →");
    Ok(())
}

#[test]
fn disabled_flag_follows_attribute() -> Result<()> {
    let mut dom = html::parse_html(r#"<button id="b" disabled>x</button>"#)?;
    let node = dom
        .by_id("b")
        .ok_or_else(|| Error::SelectorNotFound("#b".into()))?;
    assert!(dom.disabled(node));
    dom.set_disabled(node, false)?;
    assert!(!dom.disabled(node));
    assert_eq!(dom.attr(node, "disabled"), None);
    dom.set_disabled(node, true)?;
    assert!(dom.disabled(node));
    Ok(())
}

#[test]
fn parse_rejects_unclosed_comments() {
    assert!(matches!(
        html::parse_html("<p>a</p><!-- open"),
        Err(Error::HtmlParse(_))
    ));
}

#[test]
fn script_and_style_bodies_stay_raw() -> Result<()> {
    let dom = html::parse_html("<style>.a > .b { color: red }</style><p id='p'>x</p>")?;
    assert!(dom.by_id("p").is_some());
    assert_eq!(dom.query_selector_all(".b")?.len(), 0);
    Ok(())
}

#[test]
fn failed_assertion_carries_a_snippet() -> Result<()> {
    let page = site_page()?;
    match page.assert_text("#faq-1 .faq-question", "Falsch") {
        Err(Error::AssertionFailed {
            selector,
            expected,
            actual,
            dom_snippet,
        }) => {
            assert_eq!(selector, "#faq-1 .faq-question");
            assert_eq!(expected, "Falsch");
            assert_eq!(actual, "Was kostet das?");
            assert_eq!(
                dom_snippet,
                "<button class=\"faq-question\">Was kostet das?</button>"
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
    match page.assert_class("#faq-1", "open", true) {
        Err(Error::AssertionFailed { expected, actual, .. }) => {
            assert_eq!(expected, "class `open` present");
            assert_eq!(actual, "class `open` absent");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[test]
fn snippets_are_truncated() {
    assert_eq!(truncate_chars("abcdef", 3), "abc...");
    assert_eq!(truncate_chars("abc", 3), "abc");
    assert_eq!(truncate_chars("äöü", 2), "äö...");
}

#[test]
fn error_display_is_readable() {
    let err = Error::TypeMismatch {
        selector: "#submit".into(),
        expected: "input or textarea".into(),
        actual: "button".into(),
    };
    assert_eq!(
        err.to_string(),
        "type mismatch for #submit: expected input or textarea, actual button"
    );
    assert_eq!(
        Error::Config("bad".into()).to_string(),
        "config error: bad"
    );
}

#[test]
fn focus_moves_between_fields_and_blurs_the_previous_one() -> Result<()> {
    let mut page = site_page()?;
    page.assert_exists("#contact-form #name")?;
    page.type_text("#name", "A")?;
    page.focus("#email")?;
    page.assert_class("#group-name", "invalid", true)?;

    page.focus("#email")?;
    page.assert_class("#group-email", "invalid", false)?;

    let dump = page.dump_dom("#group-name")?;
    assert!(dump.starts_with("<div"), "{dump}");
    assert!(dump.contains("invalid"), "{dump}");
    assert!(matches!(
        page.assert_exists("#does-not-exist"),
        Err(Error::SelectorNotFound(_))
    ));
    Ok(())
}
