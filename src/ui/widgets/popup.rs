use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::config::Config;
use crate::ui::utils::center_area;

/// Modal list of config problems, dismissed by any key
pub fn render_config_warnings(frame: &mut Frame<'_>, area: Rect, warnings: &[String], config: &Config) {
    let height = (warnings.len() as u16).saturating_add(4).min(area.height);
    let popup_area = center_area(area, Constraint::Percentage(70), Constraint::Length(height));

    let lines: Vec<Line> = warnings
        .iter()
        .map(|w| Line::from(format!("• {}", w)))
        .collect();

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .bg(config.colors.screen_color())
                .fg(config.colors.screen_text_color()),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(config.colors.highlight_color()))
                .title(" Config warnings ")
                .title_bottom(Line::from(" press any key ").right_aligned()),
        );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
