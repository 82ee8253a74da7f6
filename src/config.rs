use safespeech_demo_core::config::CONFIG_ELEMENT_ID;
use safespeech_demo_core::PageConfig;
use web_sys::Document;

/// Reads the optional JSON block the host page embeds; falls back to defaults.
pub(crate) fn load_page_config(document: &Document) -> PageConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return PageConfig::default();
    }
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("page config ignored", err.to_string());
            PageConfig::default()
        }
    }
}
