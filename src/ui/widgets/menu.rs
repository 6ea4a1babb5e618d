use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::config::Config;
use crate::player::{MenuRow, ScreenView};
use crate::ui::hit_map::{HitMap, HitTarget};
use crate::ui::utils::{row_rect, scroll_offset, truncate_by_width};

const CHEVRON: &str = "›";

/// Header bar plus the item list, registering a click region per visible row
pub fn render_menu_pane(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ScreenView<'_>,
    config: &Config,
    hit_map: &mut HitMap,
) {
    let [header_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

    let header = Paragraph::new(truncate_by_width(view.header, header_area.width as usize))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(config.colors.header_color())
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(config.colors.wheel_label_color())),
        );
    frame.render_widget(header, header_area);

    let visible = list_area.height as usize;
    let offset = scroll_offset(view.selected, visible);

    for (row, (index, item)) in view
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let Some(rect) = row_rect(list_area, row as u16) else {
            break;
        };
        let selected = index == view.selected;
        frame.render_widget(menu_line(item, selected, rect.width, config), rect);
        hit_map.push(rect, HitTarget::MenuItem(index));
    }
}

fn menu_line<'a>(item: &MenuRow, selected: bool, width: u16, config: &Config) -> Paragraph<'a> {
    let width = width as usize;
    let style = if selected {
        Style::default()
            .bg(config.colors.highlight_color())
            .fg(config.colors.highlight_text_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(config.colors.screen_text_color())
    };

    // " label ... › "
    let suffix = if item.navigates { CHEVRON } else { "" };
    let label = truncate_by_width(item.label, width.saturating_sub(3));
    let used = 1 + label.width() + suffix.width();
    let padding = " ".repeat(width.saturating_sub(used + 1));

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(label),
        Span::raw(padding),
        Span::raw(suffix),
        Span::raw(" "),
    ]);
    Paragraph::new(line).style(style)
}
