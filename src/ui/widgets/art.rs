use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::config::Config;
use crate::player::{ArtPane, NowPlayingView};
use crate::ui::utils::{center_area, truncate_by_width};

const ART_WIDTH: u16 = 14;

pub fn render_art_pane(frame: &mut Frame<'_>, area: Rect, art: &ArtPane, config: &Config) {
    match art {
        ArtPane::Placeholder => render_placeholder(frame, area, config),
        ArtPane::NowPlaying(now) => render_now_playing(frame, area, now, config),
    }
}

fn render_placeholder(frame: &mut Frame<'_>, area: Rect, config: &Config) {
    let note_area = center_area(area, Constraint::Length(3), Constraint::Length(1));
    let note = Paragraph::new("♪")
        .alignment(Alignment::Center)
        .style(Style::default().fg(config.colors.wheel_label_color()));
    frame.render_widget(note, note_area);
}

fn render_now_playing(frame: &mut Frame<'_>, area: Rect, now: &NowPlayingView, config: &Config) {
    let [art_area, _, title_area, byline_area, status_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let width = area.width as usize;

    let art_area = center_area(
        art_area,
        Constraint::Length(ART_WIDTH.min(area.width)),
        Constraint::Length(art_area.height),
    );
    let art_inner = art_area.width.saturating_sub(2) as usize;
    let art = Paragraph::new(vec![
        Line::from("♫"),
        Line::from(truncate_by_width(artwork_name(now.track.artwork_url), art_inner))
            .style(Style::default().fg(config.colors.wheel_label_color())),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(config.colors.screen_text_color()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(config.colors.wheel_label_color())),
    );
    frame.render_widget(art, art_area);

    let title = Paragraph::new(truncate_by_width(now.track.title, width))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(config.colors.screen_text_color())
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, title_area);

    let byline = Paragraph::new(truncate_by_width(&now.byline(), width))
        .alignment(Alignment::Center)
        .style(Style::default().fg(config.colors.header_color()));
    frame.render_widget(byline, byline_area);

    let status = Paragraph::new(now.status_line())
        .alignment(Alignment::Center)
        .style(Style::default().fg(config.colors.status_color()));
    frame.render_widget(status, status_area);
}

/// Last path segment of the artwork URL
fn artwork_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_name() {
        assert_eq!(
            artwork_name("https://example.org/en/9/97/The_Slim_Shady_LP.png"),
            "The_Slim_Shady_LP.png"
        );
        assert_eq!(artwork_name("cover.jpg"), "cover.jpg");
    }
}
