use super::catalog::Track;

/// Everything the screen needs for one frame, derived from player state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView<'a> {
    pub header: &'a str,
    pub items: Vec<MenuRow>,
    /// Highlighted row; 0 when `items` is empty
    pub selected: usize,
    pub art: ArtPane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow {
    pub label: &'static str,
    /// Draw a chevron after the label
    pub navigates: bool,
}

/// Right-hand side of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtPane {
    Placeholder,
    NowPlaying(NowPlayingView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlayingView {
    pub track: &'static Track,
    pub playing: bool,
}

impl NowPlayingView {
    pub fn byline(&self) -> String {
        format!("{} – {}", self.track.artist, self.track.album)
    }

    pub fn status_line(&self) -> &'static str {
        if self.playing {
            "▶ Playing"
        } else {
            "⏸ Paused"
        }
    }
}

impl ScreenView<'_> {
    pub fn selected_row(&self) -> Option<&MenuRow> {
        self.items.get(self.selected)
    }
}
