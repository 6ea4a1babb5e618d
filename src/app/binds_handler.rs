use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use crate::app::config::BindsConfig;
use crate::player::Gesture;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Wheel(Gesture),
    Quit,
}

/// Key binding lookup built from `[binds]`
#[derive(Debug)]
pub struct KeyBinds {
    map: HashMap<(KeyModifiers, KeyCode), Action>,
}

impl KeyBinds {
    pub fn new(map: HashMap<(KeyModifiers, KeyCode), Action>) -> Self {
        Self { map }
    }

    /// Build from config, returning warnings for keys that failed to parse
    pub fn from_config(binds: &BindsConfig) -> (Self, Vec<String>) {
        let (map, warnings) = binds.build_key_map();
        (Self::new(map), warnings)
    }

    /// Map a key event to an action. Only the initial press counts: repeat
    /// and release events never trigger anything.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if let Some(action) = self.map.get(&(key.modifiers, key.code)) {
            return Some(*action);
        }

        // Some terminals add SHIFT to uppercase letters and some don't
        if let KeyCode::Char(c) = key.code
            && c.is_ascii_uppercase()
        {
            let toggled = key.modifiers ^ KeyModifiers::SHIFT;
            return self.map.get(&(toggled, key.code)).copied();
        }

        None
    }
}

impl Default for KeyBinds {
    fn default() -> Self {
        Self::from_config(&BindsConfig::default()).0
    }
}
