//! Small page effects: anchor scrolling, parallax, typing reveal.

#[cfg(test)]
#[path = "glue_test.rs"]
mod glue_test;

/// Target id of a same-page link, `None` for a bare `#` or external href.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears the fixed navbar.
///
/// `nav_height` is `None` when the navbar is absent, in which case
/// `fallback_offset` replaces the whole `nav_height + gap` term.
#[must_use]
pub fn anchor_scroll_offset(target_top: f64, nav_height: Option<f64>, gap: f64, fallback_offset: f64) -> f64 {
    let clearance = nav_height.map_or(fallback_offset, |height| height + gap);
    (target_top - clearance).max(0.0)
}

/// CSS `transform` value shifting an element vertically by `offset` px.
#[must_use]
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Vertical translation for the parallax accent.
#[must_use]
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Successive prefixes of a heading, one more character each step.
///
/// Steps on Unicode scalar boundaries so multi-byte text never splits.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    text: String,
    shown: usize,
}

impl TypingAnimation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shown: 0 }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }
}

impl Iterator for TypingAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let next_char = self.text[self.shown..].chars().next()?;
        self.shown += next_char.len_utf8();
        Some(self.text[..self.shown].to_owned())
    }
}
