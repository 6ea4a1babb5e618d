use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::config::Config;
use crate::player::Gesture;
use crate::ui::hit_map::{HitMap, HitTarget};
use crate::ui::utils::row_rect;

pub const WHEEL_WIDTH: u16 = 27;
pub const WHEEL_HEIGHT: u16 = 13;
const CENTER_WIDTH: u16 = 9;

/// Draw the click wheel and register one click region per gesture
pub fn render_wheel(frame: &mut Frame<'_>, area: Rect, config: &Config, hit_map: &mut HitMap) {
    let ring_style = Style::default()
        .bg(config.colors.wheel_color())
        .fg(config.colors.wheel_label_color());
    let ring = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(ring_style);
    let inner = ring.inner(area);
    frame.render_widget(ring, area);

    let [menu_area, up_area, middle_area, down_area, play_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(inner);
    let [prev_area, center_area, next_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(CENTER_WIDTH),
        Constraint::Fill(1),
    ])
    .areas(middle_area);

    let label_style = ring_style.add_modifier(Modifier::BOLD);
    draw_label(frame, menu_area, 0, "MENU", label_style);
    draw_label(frame, up_area, up_area.height.saturating_sub(1), "▴", ring_style);
    draw_label(frame, prev_area, 1, "◀◀", label_style);
    draw_label(frame, next_area, 1, "▶▶", label_style);
    draw_label(frame, down_area, 0, "▾", ring_style);
    draw_label(frame, play_area, play_area.height.saturating_sub(1), "▶❙❙", label_style);

    let button = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(
            Style::default()
                .bg(config.colors.center_button_color())
                .fg(config.colors.wheel_label_color()),
        );
    frame.render_widget(button, center_area);

    for (region, gesture) in [
        (menu_area, Gesture::Back),
        (up_area, Gesture::Up),
        (prev_area, Gesture::Previous),
        (next_area, Gesture::Next),
        (down_area, Gesture::Down),
        (play_area, Gesture::PlayPause),
        (center_area, Gesture::Center),
    ] {
        hit_map.push(region, HitTarget::Wheel(gesture));
    }
}

fn draw_label(frame: &mut Frame<'_>, area: Rect, row: u16, text: &'static str, style: Style) {
    if let Some(rect) = row_rect(area, row) {
        let label = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(label, rect);
    }
}
