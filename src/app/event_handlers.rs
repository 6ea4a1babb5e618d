use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::app::binds_handler::Action;
use crate::app::logging::{InputSource, log_gesture, log_transition};
use crate::player::Gesture;
use crate::ui::HitTarget;

/// Trait for event handling
pub trait EventHandlers {
    fn handle_crossterm_event(&mut self, event: Event);
    fn on_key_event(&mut self, key: KeyEvent);
    fn on_mouse_event(&mut self, mouse: MouseEvent);
    fn run_gesture(&mut self, gesture: Gesture, source: InputSource);
    fn quit(&mut self);
}

impl EventHandlers for App {
    /// Dispatch one terminal event
    fn handle_crossterm_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            // Redrawn on the next loop iteration anyway
            Event::Resize(width, height) => log::debug!("Terminal resized to {}x{}", width, height),
            _ => {}
        }
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        if self.show_config_warnings_popup {
            if key.kind == KeyEventKind::Press {
                self.show_config_warnings_popup = false;
            }
            return;
        }

        match self.key_binds.handle_key(key) {
            Some(Action::Wheel(gesture)) => self.run_gesture(gesture, InputSource::Key),
            Some(Action::Quit) => self.quit(),
            None => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if self.show_config_warnings_popup {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.show_config_warnings_popup = false;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_map.hit(mouse.column, mouse.row) {
                    Some(HitTarget::Wheel(gesture)) => {
                        self.run_gesture(gesture, InputSource::Mouse)
                    }
                    Some(HitTarget::MenuItem(index)) => {
                        let changed = self.player.click_item(index);
                        log::debug!("Clicked menu item {}{}", index, if changed { "" } else { " (no-op)" });
                        log_transition(self.player.navigation());
                    }
                    None => {}
                }
            }
            MouseEventKind::ScrollUp => self.run_gesture(Gesture::Up, InputSource::Mouse),
            MouseEventKind::ScrollDown => self.run_gesture(Gesture::Down, InputSource::Mouse),
            _ => {}
        }
    }

    fn run_gesture(&mut self, gesture: Gesture, source: InputSource) {
        let changed = self.player.apply(gesture);
        log_gesture(gesture, source, changed);
        if changed {
            log_transition(self.player.navigation());
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        log::info!("Quit requested");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cli::Args;
    use crate::app::config::Config;
    use crate::app::constructor::AppConstructor;
    use crate::player::MenuKey;
    use crate::ui::HitMap;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;

    fn app() -> App {
        let args = Args {
            seed: Some(3),
            ..Args::default()
        };
        let mut app = App::new_with_config(Config::default(), &args);
        app.running = true;
        app
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys_drive_the_player() {
        let mut app = app();
        app.handle_crossterm_event(press(KeyCode::Enter));
        assert_eq!(app.player.navigation().top().menu, MenuKey::Music);
        app.handle_crossterm_event(press(KeyCode::Down));
        assert_eq!(app.player.navigation().top().selected, 1);
        app.handle_crossterm_event(press(KeyCode::Esc));
        assert_eq!(app.player.navigation().top().menu, MenuKey::Root);
        assert!(app.running);
    }

    #[test]
    fn test_key_repeat_is_suppressed() {
        let mut app = app();
        let repeat = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        app.handle_crossterm_event(Event::Key(repeat));
        assert_eq!(app.player.navigation().top().selected, 0);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_crossterm_event(press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_click_on_wheel_and_menu_rows() {
        let mut app = app();
        let mut hit_map = HitMap::new();
        hit_map.push(Rect::new(0, 0, 20, 1), HitTarget::MenuItem(0));
        hit_map.push(Rect::new(0, 1, 20, 1), HitTarget::MenuItem(1));
        hit_map.push(Rect::new(30, 0, 5, 2), HitTarget::Wheel(Gesture::Back));
        app.hit_map = hit_map;

        // Clicking an item highlights and activates it
        app.handle_crossterm_event(click(3, 0));
        assert_eq!(app.player.navigation().top().menu, MenuKey::Music);

        app.handle_crossterm_event(click(31, 1));
        assert_eq!(app.player.navigation().top().menu, MenuKey::Root);

        // Outside every region
        app.handle_crossterm_event(click(50, 10));
        assert_eq!(app.player.navigation().depth(), 1);
    }

    #[test]
    fn test_scroll_moves_selection() {
        let mut app = app();
        let scroll = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        app.handle_crossterm_event(scroll(MouseEventKind::ScrollUp));
        assert_eq!(app.player.navigation().top().selected, 7);
        app.handle_crossterm_event(scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.player.navigation().top().selected, 0);
    }

    #[test]
    fn test_popup_swallows_first_key() {
        let mut app = app();
        app.config_warnings = vec!["Unknown config section: [x]".to_string()];
        app.show_config_warnings_popup = true;

        app.handle_crossterm_event(press(KeyCode::Enter));
        assert!(!app.show_config_warnings_popup);
        assert_eq!(app.player.navigation().depth(), 1);

        app.handle_crossterm_event(press(KeyCode::Enter));
        assert_eq!(app.player.navigation().top().menu, MenuKey::Music);
    }
}
