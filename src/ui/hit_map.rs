use ratatui::layout::{Position, Rect};

use crate::player::Gesture;

/// Something on screen that reacts to a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Wheel(Gesture),
    /// Index into the current menu's items
    MenuItem(usize),
}

/// Clickable regions of the last rendered frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Target under the given cell; later regions win on overlap
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
