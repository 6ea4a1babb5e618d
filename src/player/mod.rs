//! Navigation and playback state of the click-wheel player.
//!
//! Nothing in here touches the terminal: gestures go in, a [`ScreenView`]
//! comes out.

pub mod catalog;
pub mod controller;
pub mod gesture;
pub mod menu;
pub mod navigation;
pub mod view;

pub use catalog::{DEMO_TRACKS, Track};
pub use controller::{PlaybackState, Player};
pub use gesture::Gesture;
pub use menu::{MenuAction, MenuEntry, MenuKey, MenuNode, Submenu};
pub use navigation::{NavigationFrame, NavigationStack};
pub use view::{ArtPane, MenuRow, NowPlayingView, ScreenView};
