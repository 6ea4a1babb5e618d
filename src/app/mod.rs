use crate::app::binds_handler::KeyBinds;
use crate::app::config::Config;
use crate::player::Player;
use crate::ui::HitMap;

pub use crate::app::constructor::AppConstructor;
pub use crate::app::event_handlers::EventHandlers;
pub use crate::app::main_loop::AppMainLoop;

// Module declarations
pub mod binds_handler;
pub mod cli;
pub mod config;
pub mod constructor;
pub mod event_handlers;
pub mod logging;
pub mod main_loop;
pub mod terminal;

/// Application state: the player widget plus everything around it
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: Config,
    pub player: Player,
    pub key_binds: KeyBinds,
    /// Click regions of the last drawn frame
    pub hit_map: HitMap,
    pub config_warnings: Vec<String>,
    pub show_config_warnings_popup: bool,
}
