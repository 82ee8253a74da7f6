pub const SCROLL_MARGIN_PX: f64 = 20.0;
pub const HIGHLIGHT_DURATION_MS: u32 = 1200;

/// Returns the element id referenced by an in-page link, if any.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

pub fn scroll_offset(offset_top: f64, margin_px: f64) -> f64 {
    offset_top - margin_px
}
