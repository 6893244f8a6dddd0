use anyhow::Result;
use std::path::PathBuf;

/// Base directory override from `GHIBLIST_BASE_PATH`, if set
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var_os("GHIBLIST_BASE_PATH").map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("ghiblist");

        Ok(Self::with_base(base_dir))
    }

    /// Config files at the base level, logs in a subdirectory
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            log_dir: base.join("logs"),
            config_dir: base,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("ghiblist.log")
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::with_base(base);
        }

        // Platform config dir (e.g. ~/.config/ghiblist on Linux), or the
        // working directory when none can be determined
        Self::new().unwrap_or_else(|_| Self::with_base(".ghiblist"))
    }
}
