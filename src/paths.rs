use color_eyre::eyre::{eyre, Result, WrapErr};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides every directory below with a single flat one.
pub const HOME_ENV: &str = "EMOSANTE_HOME";

pub struct AppPaths;

impl AppPaths {
    fn proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "emosante", "emosante")
    }

    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            fs::create_dir_all(&path)
                .wrap_err_with(|| format!("failed to create directory {}", path.display()))?;
        }
        Ok(path)
    }

    fn resolve(kind: &str) -> Option<PathBuf> {
        if let Ok(home) = env::var(HOME_ENV) {
            return Some(PathBuf::from(home));
        }
        let proj = Self::proj_dirs()?;
        let dir = match kind {
            "data" => proj.data_dir(),
            "config" => proj.config_dir(),
            _ => return None,
        };
        Some(dir.to_path_buf())
    }

    pub fn data_dir() -> Result<PathBuf> {
        let path = Self::resolve("data").ok_or_else(|| eyre!("could not determine data directory"))?;
        Self::ensure_exists(path)
    }

    pub fn config_dir() -> Result<PathBuf> {
        let path =
            Self::resolve("config").ok_or_else(|| eyre!("could not determine config directory"))?;
        Self::ensure_exists(path)
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("emosante.log"))
    }

    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("session.json"))
    }
}
