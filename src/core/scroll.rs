//! Scroll threshold used to switch the navigation bar style.

/// Whether the page has been scrolled past `threshold` pixels.
///
/// The comparison is strict: sitting exactly on the threshold still counts
/// as the top of the page.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
