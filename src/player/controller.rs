use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog::{self, DEMO_TRACKS};
use super::gesture::Gesture;
use super::menu::{MenuAction, MenuKey};
use super::navigation::NavigationStack;
use super::view::{ArtPane, MenuRow, NowPlayingView, ScreenView};

/// Transport state of the pretend player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// `None` until something is played, then always a valid playlist index
    pub current_track: Option<usize>,
}

/// All navigation and playback state of the click-wheel widget
#[derive(Debug)]
pub struct Player {
    navigation: NavigationStack,
    playback: PlaybackState,
    rng: StdRng,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Player whose shuffle picks are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            navigation: NavigationStack::new(),
            playback: PlaybackState::default(),
            rng,
        }
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn in_now_playing(&self) -> bool {
        self.navigation.is_at(&MenuKey::NowPlaying)
    }

    /// Run one gesture. Returns whether any state changed.
    pub fn apply(&mut self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Up => self.wheel_up(),
            Gesture::Down => self.wheel_down(),
            Gesture::Center => self.center(),
            Gesture::Back => self.back(),
            Gesture::Previous => self.previous(),
            Gesture::Next => self.next(),
            Gesture::PlayPause => self.play_pause(),
        }
    }

    pub fn wheel_up(&mut self) -> bool {
        self.navigation.wheel_up()
    }

    pub fn wheel_down(&mut self) -> bool {
        self.navigation.wheel_down()
    }

    pub fn back(&mut self) -> bool {
        let popped = self.navigation.pop();
        if popped {
            log::debug!("Back to menu: {}", self.navigation.top().menu);
        }
        popped
    }

    pub fn previous(&mut self) -> bool {
        self.skip(-1)
    }

    pub fn next(&mut self) -> bool {
        self.skip(1)
    }

    /// Activate the highlighted item of the current menu
    pub fn center(&mut self) -> bool {
        if self.in_now_playing() {
            return false;
        }
        let Some(entry) = self.navigation.selected_entry() else {
            return false;
        };
        log::debug!(
            "Selected '{}' in {}: {:?}",
            entry.label,
            self.navigation.top().menu,
            entry.action
        );
        self.activate(entry.action)
    }

    /// A click on a menu row: highlight it, then activate it unless the
    /// Now Playing screen is up
    pub fn click_item(&mut self, index: usize) -> bool {
        if !self.navigation.set_selected(index) {
            return false;
        }
        if !self.in_now_playing() {
            self.center();
        }
        true
    }

    pub fn play_pause(&mut self) -> bool {
        if !self.in_now_playing() {
            return false;
        }
        self.playback.is_playing = !self.playback.is_playing;
        log::debug!("Playing: {}", self.playback.is_playing);
        true
    }

    fn skip(&mut self, delta: isize) -> bool {
        if !self.in_now_playing() {
            return false;
        }
        let Some(current) = self.playback.current_track else {
            return false;
        };
        let index = catalog::wrap_track_index(current, delta);
        self.playback.current_track = Some(index);
        self.playback.is_playing = true;
        log::debug!("Skipped to track {}", index);
        true
    }

    fn activate(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::Open(submenu) => {
                self.navigation.push(submenu.into());
                true
            }
            MenuAction::PlayTrack(index) => {
                self.start(index);
                true
            }
            MenuAction::Shuffle => {
                let index = self.rng.random_range(0..DEMO_TRACKS.len());
                self.start(index);
                true
            }
            MenuAction::ResumeNowPlaying => {
                let index = self.playback.current_track.unwrap_or(0);
                self.start(index);
                true
            }
            MenuAction::Inert => false,
        }
    }

    fn start(&mut self, index: usize) {
        self.playback = PlaybackState {
            is_playing: true,
            current_track: Some(index),
        };
        self.navigation.push(MenuKey::NowPlaying);
        log::debug!("Now playing track {}", index);
    }

    /// Project current state into what the screen shows
    pub fn view(&self) -> ScreenView<'_> {
        let frame = self.navigation.top();
        let node = frame.menu.node();
        let items = node
            .items
            .iter()
            .map(|entry| MenuRow {
                label: entry.label,
                navigates: entry.action.navigates(),
            })
            .collect();

        let art = match self.playback.current_track.and_then(catalog::track) {
            Some(track) if self.in_now_playing() => ArtPane::NowPlaying(NowPlayingView {
                track,
                playing: self.playback.is_playing,
            }),
            _ => ArtPane::Placeholder,
        };

        ScreenView {
            header: node.header,
            items,
            selected: frame.selected,
            art,
        }
    }
}
