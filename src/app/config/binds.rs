use crate::app::binds_handler::Action;
use crate::player::Gesture;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key strings per action, e.g. `"enter"`, `"ctrl-c"`, `"shift-p"`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BindsConfig {
    #[serde(default = "BindsConfig::default_up")]
    pub up: Vec<String>,
    #[serde(default = "BindsConfig::default_down")]
    pub down: Vec<String>,
    #[serde(default = "BindsConfig::default_center")]
    pub center: Vec<String>,
    #[serde(default = "BindsConfig::default_back")]
    pub back: Vec<String>,
    #[serde(default = "BindsConfig::default_previous")]
    pub previous: Vec<String>,
    #[serde(default = "BindsConfig::default_next")]
    pub next: Vec<String>,
    #[serde(default = "BindsConfig::default_play_pause")]
    pub play_pause: Vec<String>,
    #[serde(default = "BindsConfig::default_quit")]
    pub quit: Vec<String>,
}

impl BindsConfig {
    fn default_up() -> Vec<String> {
        vec!["up".to_string()]
    }
    fn default_down() -> Vec<String> {
        vec!["down".to_string()]
    }
    fn default_center() -> Vec<String> {
        vec!["enter".to_string(), "space".to_string()]
    }
    fn default_back() -> Vec<String> {
        vec!["esc".to_string(), "backspace".to_string()]
    }
    fn default_previous() -> Vec<String> {
        vec!["left".to_string()]
    }
    fn default_next() -> Vec<String> {
        vec!["right".to_string()]
    }
    fn default_play_pause() -> Vec<String> {
        vec!["p".to_string()]
    }
    fn default_quit() -> Vec<String> {
        vec!["q".to_string(), "ctrl-c".to_string()]
    }

    fn keys_for(&self, gesture: Gesture) -> &[String] {
        match gesture {
            Gesture::Up => &self.up,
            Gesture::Down => &self.down,
            Gesture::Center => &self.center,
            Gesture::Back => &self.back,
            Gesture::Previous => &self.previous,
            Gesture::Next => &self.next,
            Gesture::PlayPause => &self.play_pause,
        }
    }

    pub fn parse_keybinding(key_str: &str) -> Option<(KeyModifiers, KeyCode)> {
        let key_str = key_str.trim().to_lowercase();

        // A lone "-" would otherwise split into two empty parts
        if key_str == "-" {
            return Some((KeyModifiers::NONE, KeyCode::Char('-')));
        }

        let mut parts: Vec<&str> = key_str.split('-').collect();
        let key_part = parts.pop()?;

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            match part {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part {
            "esc" => KeyCode::Esc,
            "enter" => KeyCode::Enter,
            "backspace" => KeyCode::Backspace,
            "tab" => KeyCode::Tab,
            "delete" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "space" => KeyCode::Char(' '),
            f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
            c => {
                let mut chars = c.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                // Terminals report shifted letters as uppercase
                if modifiers.contains(KeyModifiers::SHIFT) {
                    KeyCode::Char(ch.to_ascii_uppercase())
                } else {
                    KeyCode::Char(ch)
                }
            }
        };

        Some((modifiers, code))
    }

    /// Build the lookup table used by the key handler. Unparseable key strings
    /// are returned as warnings; on conflicts the later action wins.
    pub fn build_key_map(&self) -> (HashMap<(KeyModifiers, KeyCode), Action>, Vec<String>) {
        let mut map = HashMap::new();
        let mut warnings = Vec::new();

        let bindings = Gesture::ALL
            .into_iter()
            .map(|gesture| (gesture.as_str(), self.keys_for(gesture), Action::Wheel(gesture)))
            .chain(std::iter::once(("quit", self.quit.as_slice(), Action::Quit)));

        for (name, keys, action) in bindings {
            for key in keys {
                match Self::parse_keybinding(key) {
                    Some(parsed) => {
                        if let Some(previous) = map.insert(parsed, action) {
                            log::debug!("Key '{}' rebound from {:?} to {:?}", key, previous, action);
                        }
                    }
                    None => warnings.push(format!("Invalid key '{}' in [binds] {}", key, name)),
                }
            }
        }

        (map, warnings)
    }
}

impl Default for BindsConfig {
    fn default() -> Self {
        Self {
            up: Self::default_up(),
            down: Self::default_down(),
            center: Self::default_center(),
            back: Self::default_back(),
            previous: Self::default_previous(),
            next: Self::default_next(),
            play_pause: Self::default_play_pause(),
            quit: Self::default_quit(),
        }
    }
}
