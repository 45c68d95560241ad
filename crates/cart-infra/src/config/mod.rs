mod file_loader;

pub use file_loader::{FileConfigLoader, DEFAULT_CONFIG_FILE};
