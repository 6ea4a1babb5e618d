use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "clickwheel")]
#[command(version)]
#[command(about = "A click-wheel music player simulation for the terminal", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a default config file to PATH (a directory gets config.toml) and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<PathBuf>,

    /// Seed for "Shuffle Songs", for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["clickwheel", "-c", "/tmp/wheel.toml", "--seed", "9"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/wheel.toml")));
        assert_eq!(args.seed, Some(9));
        assert!(args.generate_config.is_none());
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Args::try_parse_from(["clickwheel", "--seed", "many"]).is_err());
    }
}
