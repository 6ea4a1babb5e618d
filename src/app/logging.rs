use crate::app::config::LoggingConfig;
use crate::player::{Gesture, NavigationStack};
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "clickwheel";

/// Initialize the file logger. The returned handle must stay alive for the
/// rest of the program or buffered lines are lost.
pub fn init_logger(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug.max(config.level_filter())
    } else {
        config.level_filter()
    };
    let mut logger = Logger::try_with_str(level.as_str().to_lowercase())?
        .log_to_file(
            FileSpec::default()
                .directory(get_log_directory(config))
                .basename(LOG_BASENAME)
                .suppress_timestamp(),
        )
        .format_for_files(custom_log_format)
        .use_utc();

    if config.append_to_file {
        logger = logger.append();
    }

    if config.rotate_logs {
        logger = logger.rotate(
            Criterion::Size(config.rotation_size_mb * 1024 * 1024),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(config.keep_log_files as usize),
        );
    }

    if config.log_to_console {
        logger = logger.duplicate_to_stdout(Duplicate::All);
    }

    let handle = logger.start()?;
    log::info!("Logger initialized with level: {}", level);
    log::info!("Log file location: {}", get_log_file_path(config).display());

    Ok(handle)
}

/// Platform data dir, or `custom_log_path` when set
pub fn get_log_directory(config: &LoggingConfig) -> PathBuf {
    if let Some(custom) = &config.custom_log_path {
        return custom.clone();
    }

    #[cfg(target_os = "macos")]
    return dirs::home_dir()
        .map(|h| h.join("Library/Logs/clickwheel"))
        .unwrap_or_else(|| PathBuf::from("./logs"));

    #[cfg(not(target_os = "macos"))]
    return dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
        .map(|d| d.join("clickwheel/logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"));
}

pub fn get_log_file_path(config: &LoggingConfig) -> PathBuf {
    get_log_directory(config).join(format!("{}.log", LOG_BASENAME))
}

/// Custom log format for file output
fn custom_log_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

pub fn ensure_log_directory(config: &LoggingConfig) -> color_eyre::Result<()> {
    let log_dir = get_log_directory(config);
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)?;
    }
    Ok(())
}

pub fn log_startup_info(config: &LoggingConfig) {
    log::info!("=== Clickwheel Starting ===");
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    log::info!("OS: {}", std::env::consts::OS);
    log::info!("Architecture: {}", std::env::consts::ARCH);
    log::info!("Log file: {}", get_log_file_path(config).display());
}

pub fn log_shutdown_info() {
    log::info!("=== Clickwheel Shutting Down ===");
}

pub fn log_config_loading(config_path: &Path, created: bool) {
    if created {
        log::info!("Created default config file at: {}", config_path.display());
    } else {
        log::info!("Loaded config file from: {}", config_path.display());
    }
}

/// Which input produced a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Key,
    Mouse,
}

pub fn log_gesture(gesture: Gesture, source: InputSource, changed: bool) {
    log::debug!(
        "Gesture {} from {:?}{}",
        gesture,
        source,
        if changed { "" } else { " (no-op)" }
    );
}

/// Log the breadcrumb of menus after a transition
pub fn log_transition(navigation: &NavigationStack) {
    let path = navigation
        .frames()
        .map(|frame| frame.menu.as_str())
        .collect::<Vec<_>>()
        .join(" > ");
    log::trace!("Menu path: {} [{}]", path, navigation.top().selected);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_log_directory() {
        let config = LoggingConfig {
            custom_log_path: Some(PathBuf::from("/tmp/wheel-logs")),
            ..LoggingConfig::default()
        };
        assert_eq!(get_log_directory(&config), PathBuf::from("/tmp/wheel-logs"));
        assert_eq!(
            get_log_file_path(&config),
            PathBuf::from("/tmp/wheel-logs/clickwheel.log")
        );
    }

    // Only test in this crate that installs the global logger
    #[test]
    fn test_console_logging_keeps_log_file() {
        let dir = std::env::temp_dir().join(format!("clickwheel-logs-{}", std::process::id()));
        let config = LoggingConfig {
            log_to_console: true,
            rotate_logs: false,
            custom_log_path: Some(dir.clone()),
            ..LoggingConfig::default()
        };
        ensure_log_directory(&config).unwrap();

        let handle = init_logger(&config).unwrap();
        log::warn!("console and file");
        handle.flush();

        let contents = std::fs::read_to_string(get_log_file_path(&config)).unwrap();
        assert!(contents.contains("Logger initialized"));
        assert!(contents.contains("console and file"));

        handle.shutdown();
        let _ = std::fs::remove_dir_all(&dir);
    }
}
