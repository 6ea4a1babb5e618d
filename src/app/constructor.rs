use super::App;
use crate::app::binds_handler::KeyBinds;
use crate::app::cli::Args;
use crate::app::config::Config;
use crate::player::Player;
use crate::ui::HitMap;

/// Trait for App construction
pub trait AppConstructor {
    fn new_with_config(config: Config, args: &Args) -> Self
    where
        Self: Sized;
}

impl AppConstructor for App {
    /// Construct a new instance of [`App`] from an already loaded config.
    fn new_with_config(config: Config, args: &Args) -> Self {
        let (key_binds, bind_warnings) = KeyBinds::from_config(&config.binds);
        for warning in &bind_warnings {
            log::warn!("{}", warning);
        }

        let player = match args.seed {
            Some(seed) => {
                log::info!("Shuffle seed: {}", seed);
                Player::with_seed(seed)
            }
            None => Player::new(),
        };

        Self {
            running: false,
            config,
            player,
            key_binds,
            hit_map: HitMap::new(),
            show_config_warnings_popup: !bind_warnings.is_empty(),
            config_warnings: bind_warnings,
        }
    }
}
