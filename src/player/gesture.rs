use std::fmt;

/// The seven inputs the click wheel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Up,
    Down,
    Center,
    /// The MENU button
    Back,
    Previous,
    Next,
    PlayPause,
}

impl Gesture {
    pub const ALL: [Gesture; 7] = [
        Gesture::Up,
        Gesture::Down,
        Gesture::Center,
        Gesture::Back,
        Gesture::Previous,
        Gesture::Next,
        Gesture::PlayPause,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::Up => "up",
            Gesture::Down => "down",
            Gesture::Center => "center",
            Gesture::Back => "back",
            Gesture::Previous => "previous",
            Gesture::Next => "next",
            Gesture::PlayPause => "play_pause",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
