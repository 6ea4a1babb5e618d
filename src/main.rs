use clap::Parser;
use clickwheel::app::cli::Args;
use clickwheel::app::config::Config;
use clickwheel::app::terminal::{init_terminal, restore_terminal};
use clickwheel::app::{App, AppConstructor, AppMainLoop, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Handle --generate-config option
    if let Some(path) = &args.generate_config {
        let config_path = if path.is_dir() {
            path.join("config.toml")
        } else {
            path.clone()
        };
        Config::generate_default(config_path)?;
        return Ok(());
    }

    let config_path = match args.config.clone() {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let config_existed = config_path.exists();

    // Load config first for logger initialization
    let (config, config_warnings) = Config::load(Some(config_path.clone()))?;

    let _logger = if config.logging.enabled {
        logging::ensure_log_directory(&config.logging)?;
        let handle = logging::init_logger(&config.logging)?;
        logging::log_startup_info(&config.logging);
        logging::log_config_loading(&config_path, !config_existed);
        for warning in &config_warnings {
            log::warn!("{}", warning);
        }
        Some(handle)
    } else {
        None
    };

    let mut app = App::new_with_config(config, &args);
    if !config_warnings.is_empty() {
        app.config_warnings.extend(config_warnings);
        app.show_config_warnings_popup = true;
    }

    let terminal = init_terminal()?;
    let result = app.run(terminal).await;

    logging::log_shutdown_info();

    restore_terminal()?;
    result
}
