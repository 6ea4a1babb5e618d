use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within the given display width, handling Unicode properly
pub fn truncate_by_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave room for the ellipsis
    let budget = max_width - 1;
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > budget {
            break;
        }
        result.push(ch);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Helper function to center a rect within another rect
pub fn center_area(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

/// First visible row of a list so that `selected` stays on screen
pub fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    selected.saturating_sub(visible_rows - 1)
}

/// Single-row rect at `row` within `area`, or `None` past the bottom
pub fn row_rect(area: Rect, row: u16) -> Option<Rect> {
    (row < area.height).then(|| Rect {
        x: area.x,
        y: area.y + row,
        width: area.width,
        height: 1,
    })
}
