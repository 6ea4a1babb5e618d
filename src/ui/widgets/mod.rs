pub mod art;
pub mod menu;
pub mod popup;
pub mod wheel;

pub use self::art::render_art_pane;
pub use self::menu::render_menu_pane;
pub use self::popup::render_config_warnings;
pub use self::wheel::render_wheel;
