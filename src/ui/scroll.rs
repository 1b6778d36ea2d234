use crate::config::{SCROLL_TOP_THRESHOLD, SECTION_REFERENCE_FRACTION};

/// Vertical extent of a content section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent<'_> {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Point in document coordinates used to decide which section is in view.
pub fn reference_point(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height.max(0.0) * SECTION_REFERENCE_FRACTION
}

/// Id of the first section whose extent contains `reference`, if any.
pub fn active_section<'a>(sections: &[SectionExtent<'a>], reference: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.contains(reference))
        .map(|s| s.id)
}

/// Whether a nav link `href` points at the section `id` (`#id` or `/#id`).
pub fn link_targets_section(href: &str, id: &str) -> bool {
    href.rsplit_once('#')
        .map(|(path, frag)| frag == id && (path.is_empty() || path == "/"))
        .unwrap_or(false)
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}
