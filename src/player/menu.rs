//! Static menu table.
//!
//! Every menu item carries the action it triggers, so what a label does is
//! decided here, next to the label itself, instead of by matching strings at
//! selection time.

use std::fmt;

/// Identity of a menu in the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKey {
    Root,
    Music,
    Playlists,
    Artists,
    Albums,
    Songs,
    NowPlaying,
    /// A key with no table entry; renders as an empty menu titled with the key
    Other(String),
}

impl MenuKey {
    pub fn parse(name: &str) -> Self {
        match name {
            "root" => Self::Root,
            "Music" => Self::Music,
            "Playlists" => Self::Playlists,
            "Artists" => Self::Artists,
            "Albums" => Self::Albums,
            "Songs" => Self::Songs,
            "Now Playing" => Self::NowPlaying,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Music => "Music",
            Self::Playlists => "Playlists",
            Self::Artists => "Artists",
            Self::Albums => "Albums",
            Self::Songs => "Songs",
            Self::NowPlaying => "Now Playing",
            Self::Other(name) => name,
        }
    }

    /// Resolve the header and items shown for this menu
    pub fn node(&self) -> MenuNode<'_> {
        match self {
            Self::Root => MenuNode::new("iPod", ROOT_ITEMS),
            Self::Music => MenuNode::new("Music", MUSIC_ITEMS),
            Self::Playlists => MenuNode::new("Playlists", PLAYLISTS_ITEMS),
            Self::NowPlaying => MenuNode::new("Now Playing", &[]),
            other => MenuNode::new(other.as_str(), &[]),
        }
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browsable menus an item can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submenu {
    Music,
    Playlists,
    Artists,
    Albums,
    Songs,
}

impl From<Submenu> for MenuKey {
    fn from(submenu: Submenu) -> Self {
        match submenu {
            Submenu::Music => MenuKey::Music,
            Submenu::Playlists => MenuKey::Playlists,
            Submenu::Artists => MenuKey::Artists,
            Submenu::Albums => MenuKey::Albums,
            Submenu::Songs => MenuKey::Songs,
        }
    }
}

/// What pressing the center button on an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Push a browsing frame
    Open(Submenu),
    /// Start the given playlist position and show Now Playing
    PlayTrack(usize),
    /// Start a random track and show Now Playing
    Shuffle,
    /// Show Now Playing, starting the first track if nothing was played yet
    ResumeNowPlaying,
    /// Listed for show; selecting it does nothing
    Inert,
}

impl MenuAction {
    /// Whether the item leads to another screen (drawn with a chevron)
    pub fn navigates(self) -> bool {
        !matches!(self, Self::Inert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuEntry {
    const fn new(label: &'static str, action: MenuAction) -> Self {
        Self { label, action }
    }
}

/// A resolved menu: header text plus ordered items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuNode<'a> {
    pub header: &'a str,
    pub items: &'static [MenuEntry],
}

impl<'a> MenuNode<'a> {
    fn new(header: &'a str, items: &'static [MenuEntry]) -> Self {
        Self { header, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|entry| entry.label)
    }
}

const ROOT_ITEMS: &[MenuEntry] = &[
    MenuEntry::new("Music", MenuAction::Open(Submenu::Music)),
    MenuEntry::new("Videos", MenuAction::Inert),
    MenuEntry::new("Photos", MenuAction::Inert),
    MenuEntry::new("Podcasts", MenuAction::Inert),
    MenuEntry::new("Extras", MenuAction::Inert),
    MenuEntry::new("Settings", MenuAction::Inert),
    MenuEntry::new("Shuffle Songs", MenuAction::Shuffle),
    MenuEntry::new("Now Playing", MenuAction::ResumeNowPlaying),
];

const MUSIC_ITEMS: &[MenuEntry] = &[
    MenuEntry::new("Playlists", MenuAction::Open(Submenu::Playlists)),
    MenuEntry::new("Artists", MenuAction::Open(Submenu::Artists)),
    MenuEntry::new("Albums", MenuAction::Open(Submenu::Albums)),
    MenuEntry::new("Songs", MenuAction::Open(Submenu::Songs)),
];

// "All Songs" always starts the first track; the playlists list no songs.
const PLAYLISTS_ITEMS: &[MenuEntry] = &[
    MenuEntry::new("Playlist 1", MenuAction::Inert),
    MenuEntry::new("Playlist 2", MenuAction::Inert),
    MenuEntry::new("All Songs", MenuAction::PlayTrack(0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_menu() {
        let node = MenuKey::Root.node();
        assert_eq!(node.header, "iPod");
        let labels: Vec<_> = node.labels().collect();
        assert_eq!(
            labels,
            [
                "Music",
                "Videos",
                "Photos",
                "Podcasts",
                "Extras",
                "Settings",
                "Shuffle Songs",
                "Now Playing"
            ]
        );
    }

    #[test]
    fn test_music_menu() {
        let node = MenuKey::Music.node();
        assert_eq!(node.header, "Music");
        let labels: Vec<_> = node.labels().collect();
        assert_eq!(labels, ["Playlists", "Artists", "Albums", "Songs"]);
    }

    #[test]
    fn test_unknown_key_degrades_to_empty_menu() {
        let key = MenuKey::parse("Genres");
        assert_eq!(key, MenuKey::Other("Genres".to_string()));
        let node = key.node();
        assert_eq!(node.header, "Genres");
        assert!(node.is_empty());
    }

    #[test]
    fn test_browse_only_submenus_are_empty() {
        for key in [MenuKey::Artists, MenuKey::Albums, MenuKey::Songs] {
            let node = key.node();
            assert_eq!(node.header, key.as_str());
            assert!(node.is_empty());
        }
        assert!(MenuKey::NowPlaying.node().is_empty());
    }

    #[test]
    fn test_parse_round_trip() {
        for key in [
            MenuKey::Root,
            MenuKey::Music,
            MenuKey::Playlists,
            MenuKey::Artists,
            MenuKey::Albums,
            MenuKey::Songs,
            MenuKey::NowPlaying,
        ] {
            assert_eq!(MenuKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn test_transition_table() {
        let action_of = |key: MenuKey, label: &str| {
            key.node()
                .items
                .iter()
                .find(|entry| entry.label == label)
                .map(|entry| entry.action)
        };

        assert_eq!(
            action_of(MenuKey::Root, "Music"),
            Some(MenuAction::Open(Submenu::Music))
        );
        assert_eq!(
            action_of(MenuKey::Root, "Shuffle Songs"),
            Some(MenuAction::Shuffle)
        );
        assert_eq!(
            action_of(MenuKey::Root, "Now Playing"),
            Some(MenuAction::ResumeNowPlaying)
        );
        assert_eq!(action_of(MenuKey::Root, "Videos"), Some(MenuAction::Inert));
        assert_eq!(
            action_of(MenuKey::Music, "Albums"),
            Some(MenuAction::Open(Submenu::Albums))
        );
        assert_eq!(
            action_of(MenuKey::Playlists, "All Songs"),
            Some(MenuAction::PlayTrack(0))
        );
        assert_eq!(
            action_of(MenuKey::Playlists, "Playlist 2"),
            Some(MenuAction::Inert)
        );
    }
}
