//! In-page anchor scrolling that accounts for the fixed header.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id targeted by an in-page `href`, or `None` when the link should
/// keep its default behavior (`#`, other pages, empty).
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where a scroll request should land so the target clears the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorGeometry {
    /// `getBoundingClientRect().top` of the target.
    pub rect_top: f64,
    /// Current `window.scrollY`.
    pub scroll_y: f64,
    /// Rendered header height, zero when there is no header.
    pub header_height: f64,
}

/// Document offset to scroll to, never negative.
#[must_use]
pub fn scroll_top(geometry: AnchorGeometry, gap_px: f64) -> f64 {
    (geometry.rect_top + geometry.scroll_y - geometry.header_height - gap_px).max(0.0)
}
