pub mod config;
pub mod paths;

pub use config::{Config, DEFAULT_ENDPOINT};
pub use paths::{PathManager, base_path_override};
