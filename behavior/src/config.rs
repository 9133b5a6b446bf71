//! Site configuration: DOM hooks, thresholds, timings and the form relay.
//!
//! Every field has a compiled-in default matching the shipped markup and
//! stylesheet. A page may override any subset by embedding a JSON object
//! (see [`SiteConfig::from_json`]); missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_STICKY_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_ACTIVE_LOOKAHEAD_PX: f64 = 150.0;
pub const DEFAULT_HOME_SECTION_ID: &str = "home";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_STATUS_CLEAR_MS: u32 = 5_000;
pub const DEFAULT_TYPING_START_DELAY_MS: u32 = 500;
pub const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
pub const DEFAULT_PARALLAX_RATE: f64 = -0.5;
pub const DEFAULT_ANCHOR_GAP_PX: f64 = 20.0;
pub const DEFAULT_ANCHOR_FALLBACK_OFFSET_PX: f64 = 80.0;

/// Content blocks that fade in when scrolled into view.
pub const DEFAULT_REVEAL_SELECTORS: [&str; 7] = [
    ".skill-card",
    ".project-card",
    ".timeline-item",
    ".education-card",
    ".certification-card",
    ".detail-block",
    ".section-title",
];

/// Errors raised while loading a [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// CSS selectors for every element the page behaviors touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub menu_toggle: String,
    pub menu_panel: String,
    pub nav_links: String,
    pub theme_toggle: String,
    /// Relative to the theme toggle button.
    pub theme_icon: String,
    pub sections: String,
    pub scrollbar_track: String,
    pub scrollbar_thumb: String,
    pub contact_form: String,
    pub form_status: String,
    pub year: String,
    pub navbar: String,
    pub anchors: String,
    pub hero_title: String,
    pub parallax: String,
}

impl Selectors {
    fn named(&self) -> [(&'static str, &str); 16] {
        [
            ("selectors.header", &self.header),
            ("selectors.menu_toggle", &self.menu_toggle),
            ("selectors.menu_panel", &self.menu_panel),
            ("selectors.nav_links", &self.nav_links),
            ("selectors.theme_toggle", &self.theme_toggle),
            ("selectors.theme_icon", &self.theme_icon),
            ("selectors.sections", &self.sections),
            ("selectors.scrollbar_track", &self.scrollbar_track),
            ("selectors.scrollbar_thumb", &self.scrollbar_thumb),
            ("selectors.contact_form", &self.contact_form),
            ("selectors.form_status", &self.form_status),
            ("selectors.year", &self.year),
            ("selectors.navbar", &self.navbar),
            ("selectors.anchors", &self.anchors),
            ("selectors.hero_title", &self.hero_title),
            ("selectors.parallax", &self.parallax),
        ]
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: ".header-container".into(),
            menu_toggle: "#mobile-menu-toggle".into(),
            menu_panel: ".mobile-menu".into(),
            nav_links: ".nav-link".into(),
            theme_toggle: "#theme-toggle".into(),
            theme_icon: "i".into(),
            sections: "section[id]".into(),
            scrollbar_track: "#bot-scrollbar".into(),
            scrollbar_thumb: "#bot-thumb".into(),
            contact_form: "#contact-form".into(),
            form_status: "#form-status".into(),
            year: "#current-year".into(),
            navbar: "#navbar".into(),
            anchors: "a[href^=\"#\"]".into(),
            hero_title: ".hero-title".into(),
            parallax: ".ai-accent".into(),
        }
    }
}

/// Viewport-intersection settings for the scroll animator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
    pub root_margin: String,
    pub selectors: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.into(),
            selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl RevealConfig {
    /// All reveal selectors joined into one selector list.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self { start_delay_ms: DEFAULT_TYPING_START_DELAY_MS, interval_ms: DEFAULT_TYPING_INTERVAL_MS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Gap kept between the fixed navbar and the scrolled-to section.
    pub gap_px: f64,
    /// Total offset used when the navbar element is absent.
    pub fallback_offset_px: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { gap_px: DEFAULT_ANCHOR_GAP_PX, fallback_offset_px: DEFAULT_ANCHOR_FALLBACK_OFFSET_PX }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub theme_storage_key: String,
    pub sticky_threshold_px: f64,
    pub active_lookahead_px: f64,
    pub home_section_id: String,
    pub status_clear_ms: u32,
    pub parallax_rate: f64,
    pub reveal: RevealConfig,
    pub typing: TypingConfig,
    pub anchor: AnchorConfig,
    pub selectors: Selectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.into(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.into(),
            sticky_threshold_px: DEFAULT_STICKY_THRESHOLD_PX,
            active_lookahead_px: DEFAULT_ACTIVE_LOOKAHEAD_PX,
            home_section_id: DEFAULT_HOME_SECTION_ID.into(),
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            parallax_rate: DEFAULT_PARALLAX_RATE,
            reveal: RevealConfig::default(),
            typing: TypingConfig::default(),
            anchor: AnchorConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a field is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that the deserializer cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as [`ConfigError::Invalid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.form_endpoint.trim().is_empty() {
            return Err(invalid("form_endpoint", "must not be empty"));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(invalid("theme_storage_key", "must not be empty"));
        }
        if !self.sticky_threshold_px.is_finite() || self.sticky_threshold_px < 0.0 {
            return Err(invalid("sticky_threshold_px", "must be a non-negative number"));
        }
        if !self.active_lookahead_px.is_finite() {
            return Err(invalid("active_lookahead_px", "must be finite"));
        }
        if !self.parallax_rate.is_finite() {
            return Err(invalid("parallax_rate", "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid("reveal.threshold", format!("{} is outside [0, 1]", self.reveal.threshold)));
        }
        if self.reveal.selectors.is_empty() {
            return Err(invalid("reveal.selectors", "must list at least one selector"));
        }
        if self.reveal.selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("reveal.selectors", "must not contain empty selectors"));
        }
        if let Some((field, _)) = self.selectors.named().into_iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(invalid(field, "must not be empty"));
        }
        if self.status_clear_ms == 0 {
            return Err(invalid("status_clear_ms", "must be positive"));
        }
        if self.typing.interval_ms == 0 {
            return Err(invalid("typing.interval_ms", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}
