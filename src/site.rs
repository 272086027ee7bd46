use super::*;

/// Several pages of the site served by URL.
///
/// When the current page navigates to a URL the site knows, that page is
/// loaded fresh, so no view state survives a navigation.
#[derive(Debug)]
pub struct MockSite {
    pub(crate) pages: HashMap<String, String>,
    pub(crate) config: SiteConfig,
    pub(crate) current: Option<Page>,
    pub(crate) followed: usize,
    pub(crate) history: Vec<String>,
}

impl MockSite {
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            pages: HashMap::new(),
            config,
            current: None,
            followed: 0,
            history: Vec::new(),
        }
    }

    pub fn add_page(&mut self, url: &str, html: &str) {
        self.pages.insert(url.to_string(), html.to_string());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Loads the page stored under `url` and makes it current.
    pub fn open(&mut self, url: &str) -> Result<&mut Page> {
        let html = self
            .pages
            .get(url)
            .ok_or_else(|| Error::Runtime(format!("unknown page: {url}")))?;
        let page = Page::from_html_with_config(url, html, self.config.clone())?;
        self.history.push(url.to_string());
        self.followed = 0;
        Ok(self.current.insert(page))
    }

    pub fn page(&self) -> Result<&Page> {
        self.current
            .as_ref()
            .ok_or_else(|| Error::Runtime("site has no open page".into()))
    }

    pub fn page_mut(&mut self) -> Result<&mut Page> {
        self.current
            .as_mut()
            .ok_or_else(|| Error::Runtime("site has no open page".into()))
    }

    pub fn current_url(&self) -> Result<&str> {
        self.page().map(Page::location)
    }

    /// URLs of every page load, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Loads the target of the current page's latest navigation if the site
    /// serves it. Returns whether a new page was loaded.
    pub fn follow_navigation(&mut self) -> Result<bool> {
        let (count, latest) = {
            let navigations = self.page()?.navigations();
            (navigations.len(), navigations.last().cloned())
        };
        if count <= self.followed {
            return Ok(false);
        }
        self.followed = count;
        let Some(target) = latest else {
            return Ok(false);
        };
        let url = target
            .split_once('#')
            .map(|(url, _)| url.to_string())
            .unwrap_or_else(|| target.clone());
        if !self.pages.contains_key(&url) {
            return Ok(false);
        }
        self.open(&url)?;
        Ok(true)
    }

    fn with_current_page<R>(&mut self, f: impl FnOnce(&mut Page) -> Result<R>) -> Result<R> {
        let out = f(self.page_mut()?)?;
        self.follow_navigation()?;
        Ok(out)
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        self.with_current_page(|page| page.click(selector))
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        self.with_current_page(|page| page.type_text(selector, text))
    }

    pub fn submit(&mut self, selector: &str) -> Result<()> {
        self.with_current_page(|page| page.submit(selector))
    }

    pub fn scroll_to(&mut self, y: f64) -> Result<()> {
        self.with_current_page(|page| page.scroll_to(y))
    }

    pub fn advance_time(&mut self, delta_ms: i64) -> Result<()> {
        self.with_current_page(|page| page.advance_time(delta_ms))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.with_current_page(|page| page.flush())
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        self.page()?.assert_text(selector, expected)
    }

    pub fn assert_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        self.page()?.assert_class(selector, class_name, expected)
    }
}

impl Default for MockSite {
    fn default() -> Self {
        Self::new()
    }
}
