use crate::app::config::binds::BindsConfig;
use crate::app::config::colors::ColorsConfig;
use crate::app::config::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub binds: BindsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const KNOWN_SECTIONS: &[&str] = &["colors", "binds", "logging"];

const KNOWN_COLORS_FIELDS: &[&str] = &[
    "backdrop",
    "body",
    "screen",
    "screen_text",
    "header",
    "highlight",
    "highlight_text",
    "wheel",
    "wheel_label",
    "center_button",
    "status",
];

const KNOWN_BINDS_FIELDS: &[&str] = &[
    "up",
    "down",
    "center",
    "back",
    "previous",
    "next",
    "play_pause",
    "quit",
];

const KNOWN_LOGGING_FIELDS: &[&str] = &[
    "enabled",
    "level",
    "log_to_console",
    "append_to_file",
    "rotate_logs",
    "rotation_size_mb",
    "keep_log_files",
    "custom_log_path",
];

/// Edit distance between two strings, counted in chars
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = prev_row[j] + usize::from(a_char != *b_char);
            curr_row[j + 1] = substitution
                .min(prev_row[j + 1] + 1)
                .min(curr_row[j] + 1);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

/// Closest candidate to `unknown`, if any is close enough to be a likely typo
fn find_similar<'a>(unknown: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let unknown_lower = unknown.to_lowercase();
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein_distance(&unknown_lower, candidate)))
        .filter(|&(candidate, distance)| {
            let threshold = (unknown.len().max(candidate.len()) / 2).max(3);
            distance <= threshold
        })
        .min_by_key(|&(_, distance)| distance)
        .map(|(candidate, _)| candidate)
}

fn unknown_section_warning(key: &str) -> String {
    match find_similar(key, KNOWN_SECTIONS) {
        Some(s) => format!("Unknown config section: [{}] (did you mean: [{}]?)", key, s),
        None => format!("Unknown config section: [{}]", key),
    }
}

fn unknown_field_warning(section: &str, key: &str, known: &[&str]) -> String {
    match find_similar(key, known) {
        Some(s) => format!(
            "Unknown option in [{}]: {} (did you mean: {}?)",
            section, key, s
        ),
        None => format!("Unknown option in [{}]: {}", section, key),
    }
}

impl Config {
    /// Returns the default config file path based on the platform:
    /// - Linux: ~/.config/clickwheel/config.toml (XDG_CONFIG_HOME)
    /// - macOS: ~/Library/Application Support/clickwheel/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\clickwheel\config.toml
    pub fn default_config_path() -> color_eyre::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(config_dir.join("clickwheel").join("config.toml"))
    }

    /// Load the config file, creating it with defaults when missing.
    /// Returns the config and any warnings collected while reading it.
    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<(Self, Vec<String>)> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            let default_config = Config::default();
            default_config.write_to(&config_path)?;
            // The logger is not up yet; main logs the creation afterwards
            return Ok((default_config, Vec::new()));
        }

        let contents = std::fs::read_to_string(&config_path)?;
        Ok(Self::parse(&contents))
    }

    /// Parse config text. Never fails: a malformed file yields the defaults
    /// plus a warning describing the parse error.
    pub fn parse(contents: &str) -> (Self, Vec<String>) {
        let mut warnings = Self::check_unknown_fields(contents);

        let config = match toml::from_str::<Config>(contents) {
            Ok(config) => config,
            Err(e) => {
                warnings.push(format!(
                    "Failed to parse config, using defaults: {}",
                    e.message()
                ));
                Config::default()
            }
        };

        (config, warnings)
    }

    /// Check for unknown sections and fields and return warnings
    fn check_unknown_fields(contents: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        // Syntax errors are reported by the typed parse
        let Ok(table) = toml::from_str::<toml::Table>(contents) else {
            return warnings;
        };

        for (key, value) in &table {
            let known = match key.as_str() {
                "colors" => KNOWN_COLORS_FIELDS,
                "binds" => KNOWN_BINDS_FIELDS,
                "logging" => KNOWN_LOGGING_FIELDS,
                _ => {
                    warnings.push(unknown_section_warning(key));
                    continue;
                }
            };
            if let toml::Value::Table(section) = value {
                for field in section.keys() {
                    if !known.contains(&field.as_str()) {
                        warnings.push(unknown_field_warning(key, field, known));
                    }
                }
            }
        }

        warnings
    }

    fn write_to(&self, path: &Path) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Generate a default config file at the specified path
    pub fn generate_default(path: PathBuf) -> color_eyre::Result<()> {
        if path.exists() {
            return Err(color_eyre::eyre::eyre!(
                "Config file already exists at: {}",
                path.display()
            ));
        }

        Config::default().write_to(&path)?;
        println!("Generated default config at: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("colors", "colors"), 0);
        assert_eq!(levenshtein_distance("colours", "colors"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_find_similar() {
        assert_eq!(find_similar("colours", KNOWN_SECTIONS), Some("colors"));
        assert_eq!(find_similar("PlayPause", KNOWN_BINDS_FIELDS), Some("play_pause"));
        assert_eq!(find_similar("zzzzzzzzzzzz", KNOWN_SECTIONS), None);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, warnings) = Config::parse("");
        assert!(warnings.is_empty());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let (config, warnings) = Config::parse(
            r##"
            [colors]
            highlight = "#FF0000"

            [binds]
            play_pause = ["p", "shift-p"]
            "##,
        );
        assert!(warnings.is_empty());
        assert_eq!(config.colors.highlight, "#FF0000");
        assert_eq!(config.colors.backdrop, ColorsConfig::default().backdrop);
        assert_eq!(config.binds.play_pause, ["p", "shift-p"]);
        assert_eq!(config.binds.center, BindsConfig::default().center);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_unknown_fields_produce_suggestions() {
        let (_, warnings) = Config::parse(
            r##"
            [colours]
            wheel = "#000000"

            [binds]
            centre = ["enter"]
            "##,
        );
        assert_eq!(
            warnings,
            [
                "Unknown option in [binds]: centre (did you mean: center?)",
                "Unknown config section: [colours] (did you mean: [colors]?)",
            ]
        );
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let (config, warnings) = Config::parse("[logging]\nenabled = \"sometimes\"\n");
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse config"));
    }

    #[test]
    fn test_default_round_trip() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let (config, warnings) = Config::parse(&text);
        assert!(warnings.is_empty());
        assert_eq!(config, Config::default());
    }
}
