pub mod binds;
pub mod colors;
#[allow(clippy::module_inception)]
pub mod config;
pub mod logging;

pub use binds::BindsConfig;
pub use colors::ColorsConfig;
pub use config::Config;
pub use logging::LoggingConfig;
