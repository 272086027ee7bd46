// Site configuration.
//
// Every value defaults to what the live site uses; a TOML document only needs
// to name what it overrides. Unknown keys are rejected so typos surface.

use super::*;
use serde::Deserialize;

/// Navigation bar style toggle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Scroll offset (px) above which the bar gets `scrolled`.
    pub scrolled_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollSpyConfig {
    /// Added to the scroll offset before sections are compared.
    pub lookahead: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self { lookahead: 200.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible fraction (0..=1) that reveals an element.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.12 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    /// Grid translation per scrolled pixel.
    pub factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { factor: 0.15 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackToTopConfig {
    pub threshold: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { threshold: 600.0 }
    }
}

/// Contact form rules and the visuals of each submit phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub name_min_chars: usize,
    pub message_min_chars: usize,
    pub email_pattern: String,
    /// How long the success or failure visual stays before the form resets.
    pub reset_delay_ms: i64,
    pub pending_message: String,
    pub success_message: String,
    pub success_color: String,
    pub failure_message: String,
    pub failure_color: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            message_min_chars: 10,
            email_pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
            reset_delay_ms: 3000,
            pending_message: "Wird gesendet…".to_string(),
            success_message: "Nachricht gesendet!".to_string(),
            success_color: "#06d6a0".to_string(),
            failure_message: "Senden fehlgeschlagen".to_string(),
            failure_color: "#ef476f".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    pub fade_ms: i64,
    pub easing: String,
    /// Only hrefs ending with this suffix fade out before navigating.
    pub page_suffix: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_ms: 250,
            easing: "ease".to_string(),
            page_suffix: ".html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { height: 800.0 }
    }
}

/// Trace log settings; tracing is off unless `enabled`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    pub enabled: bool,
    pub events: bool,
    pub timers: bool,
    pub behaviors: bool,
    /// Also emit every line through `tracing`.
    pub forward: bool,
    pub log_limit: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            events: true,
            timers: true,
            behaviors: true,
            forward: true,
            log_limit: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub back_to_top: BackToTopConfig,
    pub contact: ContactConfig,
    pub transition: TransitionConfig,
    pub viewport: ViewportConfig,
    pub trace: TraceConfig,
}

impl SiteConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("nav.scrolled_threshold", self.nav.scrolled_threshold),
            ("scroll_spy.lookahead", self.scroll_spy.lookahead),
            ("parallax.factor", self.parallax.factor),
            ("back_to_top.threshold", self.back_to_top.threshold),
        ];
        for (key, value) in finite {
            if !value.is_finite() {
                return Err(Error::Config(format!("{key} must be finite, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::Config(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if !self.viewport.height.is_finite() || self.viewport.height <= 0.0 {
            return Err(Error::Config(format!(
                "viewport.height must be positive, got {}",
                self.viewport.height
            )));
        }
        if self.contact.reset_delay_ms < 0 {
            return Err(Error::Config(format!(
                "contact.reset_delay_ms must be non-negative, got {}",
                self.contact.reset_delay_ms
            )));
        }
        if self.transition.fade_ms < 0 {
            return Err(Error::Config(format!(
                "transition.fade_ms must be non-negative, got {}",
                self.transition.fade_ms
            )));
        }
        if self.transition.page_suffix.is_empty() {
            return Err(Error::Config("transition.page_suffix must not be empty".into()));
        }
        if self.trace.log_limit == 0 {
            return Err(Error::Config("trace.log_limit must be at least 1".into()));
        }
        ContactValidator::from_config(&self.contact)?;
        Ok(())
    }
}
