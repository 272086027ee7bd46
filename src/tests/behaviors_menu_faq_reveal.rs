use super::*;

#[test]
fn hamburger_toggles_menu_and_locks_body_scroll() -> Result<()> {
    let mut page = site_page()?;
    assert_eq!(page.view_state().menu(), MenuState::Closed);
    page.assert_class(".mobile-menu", "open", false)?;
    page.assert_style("body", "overflow", "")?;

    page.click(".nav-hamburger")?;
    assert_eq!(page.view_state().menu(), MenuState::Open);
    page.assert_class(".mobile-menu", "open", true)?;
    page.assert_class(".nav-hamburger", "open", true)?;
    page.assert_style("body", "overflow", "hidden")?;

    page.click(".nav-hamburger")?;
    page.assert_class(".mobile-menu", "open", false)?;
    page.assert_class(".nav-hamburger", "open", false)?;
    page.assert_style("body", "overflow", "")?;
    Ok(())
}

#[test]
fn clicking_inside_hamburger_bubbles_to_toggle() -> Result<()> {
    let mut page = site_page()?;
    page.click(".nav-hamburger span")?;
    page.assert_class(".mobile-menu", "open", true)?;
    Ok(())
}

#[test]
fn menu_link_closes_menu_and_follows_anchor() -> Result<()> {
    let mut page = laid_out_site()?;
    page.click(".nav-hamburger")?;
    page.click("#mobile-leistungen")?;

    assert_eq!(page.view_state().menu(), MenuState::Closed);
    page.assert_class(".mobile-menu", "open", false)?;
    page.assert_style("body", "overflow", "")?;
    assert_eq!(page.scroll_y(), 900.0);
    assert_eq!(page.location(), "https://blacklight.test/index.html#leistungen");
    Ok(())
}

#[test]
fn closed_menu_link_click_keeps_menu_closed() -> Result<()> {
    let mut page = site_page()?;
    page.click("#mobile-leistungen")?;
    assert_eq!(page.view_state().menu(), MenuState::Closed);
    page.assert_style("body", "overflow", "")?;
    Ok(())
}

#[test]
fn menu_page_link_closes_menu_and_starts_fade() -> Result<()> {
    let mut page = site_page()?;
    page.click(".nav-hamburger")?;
    page.click("#mobile-kontakt")?;

    assert_eq!(page.view_state().menu(), MenuState::Closed);
    assert_eq!(
        page.view_state().transition(),
        &TransitionState::FadingOut {
            href: "kontakt.html".into()
        }
    );
    page.assert_style("body", "opacity", "0")?;
    Ok(())
}

#[test]
fn menu_state_toggles() {
    assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn faq_keeps_at_most_one_item_open() -> Result<()> {
    let mut page = site_page()?;
    assert_eq!(page.view_state().open_faq(), None);

    page.click("#faq-1 .faq-question")?;
    page.assert_class("#faq-1", "open", true)?;
    assert_eq!(page.view_state().open_faq(), Some(0));

    page.click("#faq-2 .faq-question")?;
    page.assert_class("#faq-1", "open", false)?;
    page.assert_class("#faq-2", "open", true)?;
    page.assert_class("#faq-3", "open", false)?;

    page.click("#faq-2 .faq-question")?;
    assert_eq!(page.view_state().open_faq(), None);
    for item in ["#faq-1", "#faq-2", "#faq-3"] {
        page.assert_class(item, "open", false)?;
    }
    Ok(())
}

#[test]
fn faq_answer_clicks_do_not_toggle() -> Result<()> {
    let mut page = site_page()?;
    page.click("#faq-3 .faq-answer")?;
    assert_eq!(page.view_state().open_faq(), None);
    Ok(())
}

#[test]
fn faq_starts_from_first_item_shipped_open() -> Result<()> {
    let html = r#"
        <section id="faq">
          <div class="faq-item" id="a"><button class="faq-question">A</button></div>
          <div class="faq-item open" id="b"><button class="faq-question">B</button></div>
          <div class="faq-item open" id="c"><button class="faq-question">C</button></div>
        </section>
        "#;
    let mut page = Page::from_html(html)?;
    assert_eq!(page.view_state().open_faq(), Some(1));
    page.assert_class("#b", "open", true)?;
    page.assert_class("#c", "open", false)?;

    page.click("#b .faq-question")?;
    page.assert_class("#b", "open", false)?;
    Ok(())
}

#[test]
fn reveal_marks_elements_once_they_enter_the_viewport() -> Result<()> {
    let mut page = laid_out_site()?;
    page.assert_class("#headline", "visible", true)?;
    page.assert_class("#services-title", "visible", false)?;
    page.assert_class("#process-text", "visible", false)?;
    assert_eq!(page.view_state().revealed_count(), 1);

    page.scroll_to(200.0)?;
    page.assert_class("#services-title", "visible", true)?;

    page.scroll_to(0.0)?;
    page.assert_class("#services-title", "visible", true)?;
    page.assert_class("#process-text", "visible", false)?;

    page.scroll_to(1200.0)?;
    assert_eq!(
        page.view_state().reveals(),
        &[RevealState::Visible; 3][..]
    );
    Ok(())
}

#[test]
fn reveal_waits_for_the_visible_fraction() -> Result<()> {
    let mut page = Page::from_html(r#"<body><p class="reveal" id="r">hi</p></body>"#)?;
    page.set_layout("#r", 790.0, 100.0)?;
    page.assert_class("#r", "visible", false)?;

    page.scroll_to(3.0)?;
    page.assert_class("#r", "visible", true)?;
    Ok(())
}

#[test]
fn reveal_treats_zero_height_boxes_by_their_top_edge() -> Result<()> {
    let mut page = Page::from_html(r#"<body><p class="reveal" id="r"></p></body>"#)?;
    page.set_layout("#r", 1200.0, 0.0)?;
    page.assert_class("#r", "visible", false)?;
    page.scroll_to(400.0)?;
    page.assert_class("#r", "visible", true)?;
    Ok(())
}

#[test]
fn unlaid_reveal_elements_stay_hidden() -> Result<()> {
    let mut page = site_page()?;
    page.scroll_to(500.0)?;
    assert_eq!(page.view_state().revealed_count(), 0);
    Ok(())
}

#[test]
fn remounted_reveal_picks_up_elements_already_in_view() -> Result<()> {
    let mut page = site_page()?;
    assert!(page.unmount(Component::Reveal));
    page.set_layout("#headline", 100.0, 50.0)?;
    page.assert_class("#headline", "visible", false)?;

    assert!(page.mount(Component::Reveal)?);
    page.assert_class("#headline", "visible", true)?;
    Ok(())
}

#[test]
fn intersection_ratio_covers_partial_and_outside_boxes() {
    let mut viewport = Viewport::new(800.0);
    viewport.scroll_y = 100.0;
    assert_eq!(viewport.intersection_ratio(None), None);
    assert_eq!(
        viewport.intersection_ratio(Some(LayoutBox {
            top: 0.0,
            height: 200.0,
        })),
        Some(0.5)
    );
    assert_eq!(
        viewport.intersection_ratio(Some(LayoutBox {
            top: 900.0,
            height: 50.0,
        })),
        None
    );
    assert_eq!(
        viewport.intersection_ratio(Some(LayoutBox {
            top: 300.0,
            height: 0.0,
        })),
        Some(1.0)
    );
}

#[test]
fn reveal_never_fires_for_boxes_taller_than_the_threshold_allows() -> Result<()> {
    let html = r#"<body><div class="reveal" id="tall"></div><div class="reveal" id="big"></div></body>"#;
    let mut page = Page::from_html(html)?;
    // 800 / 8000 = 0.10 at best, below the 0.12 threshold.
    page.set_layout("#tall", 0.0, 8000.0)?;
    page.set_layout("#big", 9000.0, 6000.0)?;
    for y in [0.0, 1000.0, 3000.0, 5000.0, 7200.0] {
        page.scroll_to(y)?;
        page.assert_class("#tall", "visible", false)?;
    }

    page.scroll_to(10_000.0)?;
    page.assert_class("#big", "visible", true)?;
    page.assert_class("#tall", "visible", false)?;

    page.set_viewport_height(1000.0)?;
    page.scroll_to(0.0)?;
    page.assert_class("#tall", "visible", true)?;
    Ok(())
}
