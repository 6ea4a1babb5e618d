use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use crate::app::config::Config;
use crate::player::ScreenView;
use crate::ui::hit_map::HitMap;
use crate::ui::utils::center_area;
use crate::ui::widgets::{
    render_art_pane, render_config_warnings, render_menu_pane, render_wheel,
    wheel::{WHEEL_HEIGHT, WHEEL_WIDTH},
};

const DEVICE_WIDTH: u16 = 46;
const DEVICE_HEIGHT: u16 = 29;
const SCREEN_HEIGHT: u16 = 12;

/// Draw the backdrop with the device centered on it. Reads nothing but the
/// view and config; returns the clickable regions of what was drawn.
pub fn render(
    frame: &mut Frame<'_>,
    view: &ScreenView<'_>,
    config: &Config,
    warnings: Option<&[String]>,
) -> HitMap {
    let mut hit_map = HitMap::new();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(config.colors.backdrop_color())),
        area,
    );

    let device_area = center_area(
        area,
        Constraint::Length(DEVICE_WIDTH.min(area.width)),
        Constraint::Length(DEVICE_HEIGHT.min(area.height)),
    );
    render_device(frame, device_area, view, config, &mut hit_map);

    if let Some(warnings) = warnings.filter(|w| !w.is_empty()) {
        render_config_warnings(frame, area, warnings, config);
    }

    hit_map
}

fn render_device(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ScreenView<'_>,
    config: &Config,
    hit_map: &mut HitMap,
) {
    let body = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(
            Style::default()
                .bg(config.colors.body_color())
                .fg(config.colors.wheel_label_color()),
        );
    let inner = body.inner(area);
    frame.render_widget(body, area);

    let [screen_area, _, wheel_row] = Layout::vertical([
        Constraint::Length(SCREEN_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(WHEEL_HEIGHT),
    ])
    .horizontal_margin(1)
    .areas(inner);

    render_screen(frame, screen_area, view, config, hit_map);

    let wheel_area = center_area(
        wheel_row,
        Constraint::Length(WHEEL_WIDTH.min(wheel_row.width)),
        Constraint::Length(wheel_row.height),
    );
    render_wheel(frame, wheel_area, config, hit_map);
}

fn render_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ScreenView<'_>,
    config: &Config,
    hit_map: &mut HitMap,
) {
    let screen = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.colors.header_color()))
        .style(
            Style::default()
                .bg(config.colors.screen_color())
                .fg(config.colors.screen_text_color()),
        );
    let inner = screen.inner(area);
    frame.render_widget(screen, area);

    let [menu_area, divider_area, art_area] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    render_menu_pane(frame, menu_area, view, config, hit_map);
    frame.render_widget(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(config.colors.wheel_label_color())),
        divider_area,
    );
    render_art_pane(frame, art_area, &view.art, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Gesture, Player};
    use crate::ui::hit_map::HitTarget;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(player: &Player, warnings: Option<&[String]>) -> (HitMap, Buffer) {
        let backend = TestBackend::new(80, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        let config = Config::default();
        let mut hit_map = HitMap::new();
        terminal
            .draw(|frame| {
                hit_map = render(frame, &player.view(), &config, warnings);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (hit_map, buffer)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_root_menu_is_drawn() {
        let player = Player::with_seed(1);
        let (_, buffer) = draw(&player, None);
        let text = buffer_text(&buffer);
        assert!(text.contains("iPod"));
        assert!(text.contains("Music"));
        assert!(text.contains("Shuffle Songs"));
        assert!(text.contains("MENU"));
        assert!(text.contains("♪"));
    }

    #[test]
    fn test_every_gesture_has_a_click_region() {
        let player = Player::with_seed(1);
        let (hit_map, _) = draw(&player, None);
        for gesture in Gesture::ALL {
            let area = hit_map
                .area_of(HitTarget::Wheel(gesture))
                .unwrap_or_else(|| panic!("no region for {gesture}"));
            assert_eq!(hit_map.hit(area.x, area.y), Some(HitTarget::Wheel(gesture)));
        }
    }

    #[test]
    fn test_menu_rows_are_clickable() {
        let player = Player::with_seed(1);
        let (hit_map, buffer) = draw(&player, None);
        let row = hit_map.area_of(HitTarget::MenuItem(6)).unwrap();
        let line: String = (row.x..row.right())
            .map(|x| buffer[(x, row.y)].symbol())
            .collect();
        assert!(line.contains("Shuffle Songs"));
        assert_eq!(hit_map.hit(row.x + 2, row.y), Some(HitTarget::MenuItem(6)));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut player = Player::with_seed(1);
        player.apply(Gesture::Down);
        let (hit_map, buffer) = draw(&player, None);
        let config = Config::default();
        let selected = hit_map.area_of(HitTarget::MenuItem(1)).unwrap();
        let other = hit_map.area_of(HitTarget::MenuItem(0)).unwrap();
        assert_eq!(
            buffer[(selected.x, selected.y)].bg,
            config.colors.highlight_color()
        );
        assert_ne!(buffer[(other.x, other.y)].bg, config.colors.highlight_color());
    }

    #[test]
    fn test_now_playing_screen() {
        let mut player = Player::with_seed(1);
        player.click_item(7);
        let (hit_map, buffer) = draw(&player, None);
        let text = buffer_text(&buffer);
        assert!(text.contains("Now Playing"));
        assert!(text.contains("Song One"));
        assert!(text.contains("Artist A – Album X"));
        assert!(text.contains("Playing"));
        assert!(hit_map.area_of(HitTarget::MenuItem(0)).is_none());

        player.apply(Gesture::PlayPause);
        let (_, buffer) = draw(&player, None);
        assert!(buffer_text(&buffer).contains("Paused"));
    }

    #[test]
    fn test_config_warnings_popup() {
        let player = Player::with_seed(1);
        let warnings = vec!["Unknown config section: [colours]".to_string()];
        let (_, buffer) = draw(&player, Some(warnings.as_slice()));
        let text = buffer_text(&buffer);
        assert!(text.contains("Config warnings"));
        assert!(text.contains("[colours]"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(12, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let player = Player::with_seed(1);
        let config = Config::default();
        terminal
            .draw(|frame| {
                render(frame, &player.view(), &config, None);
            })
            .unwrap();
    }
}
