//! Scrolling helpers for lists taller than their viewport.

/// Calculate centered scroll offset for a list.
///
/// Returns the scroll offset that keeps the selected item centered when possible,
/// while handling edge cases near the beginning and end of the list.
///
/// # Arguments
/// * `selected_idx` - The currently selected item index
/// * `total_items` - Total number of items in the list
/// * `visible_count` - Number of items visible in the viewport
///
/// # Returns
/// The scroll offset to apply to keep the selection visible and centered
pub fn calculate_centered_scroll(
    selected_idx: usize,
    total_items: usize,
    visible_count: usize,
) -> usize {
    if total_items <= visible_count {
        return 0;
    }

    let center = visible_count / 2;

    if selected_idx <= center {
        // Near the top: selection moves down from top
        0
    } else if selected_idx >= total_items.saturating_sub(visible_count.saturating_sub(center)) {
        // Near the bottom: keep the last page in view
        total_items.saturating_sub(visible_count)
    } else {
        // Middle: center the selection
        selected_idx.saturating_sub(center)
    }
}
