use super::*;

mod behaviors_contact_form;
mod behaviors_menu_faq_reveal;
mod dom_and_selectors;

const SITE_URL: &str = "https://blacklight.test/index.html";

const SITE_HTML: &str = r##"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="utf-8">
  <title>Black Light Results</title>
  <style>.reveal { opacity: 0; }</style>
</head>
<body>
  <nav class="nav" id="nav">
    <a class="nav-logo" id="logo" href="index.html">BLR</a>
    <ul class="nav-links">
      <li><a id="link-leistungen" href="#leistungen">Leistungen</a></li>
      <li><a id="link-ablauf" href="#ablauf">Ablauf</a></li>
      <li><a id="link-faq" href="#faq">FAQ</a></li>
      <li><a id="link-kontakt" href="kontakt.html">Kontakt</a></li>
    </ul>
    <button class="nav-hamburger" id="hamburger"><span></span><span></span></button>
  </nav>
  <div class="mobile-menu" id="mobile-menu">
    <a id="mobile-leistungen" href="#leistungen">Leistungen</a>
    <a id="mobile-kontakt" href="kontakt.html">Kontakt</a>
  </div>
  <header class="hero" id="hero">
    <div class="hero-grid" id="grid"></div>
    <div class="uv-orb"></div>
    <div class="uv-orb"></div>
    <h1 class="reveal" id="headline">Sichtbar im Dunkeln</h1>
  </header>
  <section id="leistungen">
    <h2 class="reveal" id="services-title">Leistungen</h2>
  </section>
  <section id="ablauf">
    <p class="reveal" id="process-text">So arbeiten wir.</p>
  </section>
  <section id="faq">
    <div class="faq-item" id="faq-1">
      <button class="faq-question">Was kostet das?</button>
      <div class="faq-answer">Kommt drauf an.</div>
    </div>
    <div class="faq-item" id="faq-2">
      <button class="faq-question">Wie lange dauert es?</button>
      <div class="faq-answer">Zwei Wochen.</div>
    </div>
    <div class="faq-item" id="faq-3">
      <button class="faq-question">Wo seid ihr?</button>
      <div class="faq-answer">Berlin.</div>
    </div>
  </section>
  <form id="contact-form" action="/danke.html">
    <div class="form-group" id="group-name"><input id="name" name="name"></div>
    <div class="form-group" id="group-email"><input id="email" name="email" type="email"></div>
    <div class="form-group" id="group-message"><textarea id="message" name="message"></textarea></div>
    <button type="submit" class="btn form-submit" id="submit">Nachricht senden</button>
  </form>
  <footer>
    <a id="external" href="https://instagram.com/blr.html">Instagram</a>
    <a id="imprint" href="impressum.html">Impressum</a>
  </footer>
  <button class="back-to-top" id="back-to-top">Nach oben</button>
</body>
</html>
"##;

fn site_page() -> Result<Page> {
    Page::from_html_with_url(SITE_URL, SITE_HTML)
}

/// The site page with sections and reveal elements placed in the document.
fn laid_out_site() -> Result<Page> {
    let mut page = site_page()?;
    page.set_layout("#leistungen", 900.0, 700.0)?;
    page.set_layout("#ablauf", 1600.0, 600.0)?;
    page.set_layout("#faq", 2200.0, 800.0)?;
    page.set_layout("#headline", 300.0, 100.0)?;
    page.set_layout("#services-title", 950.0, 80.0)?;
    page.set_layout("#process-text", 1650.0, 60.0)?;
    Ok(page)
}

fn fill_contact_form(page: &mut Page, name: &str, email: &str, message: &str) -> Result<()> {
    page.type_text("#name", name)?;
    page.type_text("#email", email)?;
    page.type_text("#message", message)?;
    Ok(())
}
