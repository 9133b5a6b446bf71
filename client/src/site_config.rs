//! Resolve the page's [`SiteConfig`] from an optional inline JSON block.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

use behavior::config::SiteConfig;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Parse `raw` if present; fall back to defaults on absence or error.
pub fn resolve(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("site config loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}

/// Read the config block from `document`.
#[cfg(feature = "csr")]
pub fn load(document: &web_sys::Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    resolve(raw.as_deref())
}
