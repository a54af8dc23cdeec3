use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;
use shared::domain::{Session, UserId};

pub const CONFIG_FILE: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub backend_url: String,
    pub user_id: i64,
    /// Seconds; `None` (or 0) leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".into(),
            user_id: 123,
            request_timeout_secs: None,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Settings {
    pub fn session(&self) -> Result<Session> {
        let user_id = UserId::new(self.user_id).context("invalid configured user id")?;
        Ok(Session::new(user_id))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    backend_url: Option<String>,
    user_id: Option<i64>,
    request_timeout_secs: Option<u64>,
    log_dir: Option<PathBuf>,
}

pub fn load_settings() -> Result<Settings> {
    let raw = read_optional(Path::new(CONFIG_FILE))?;
    settings_from_sources(raw.as_deref(), |key| std::env::var(key).ok())
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Layers defaults, the optional config file and the environment, in that order.
pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        let file_cfg: FileSettings =
            toml::from_str(raw).with_context(|| format!("failed to parse {CONFIG_FILE}"))?;
        if let Some(v) = file_cfg.backend_url {
            settings.backend_url = v;
        }
        if let Some(v) = file_cfg.user_id {
            settings.user_id = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = Some(v);
        }
        if let Some(v) = file_cfg.log_dir {
            settings.log_dir = v;
        }
    }

    if let Some(v) = env("BACKEND_URL") {
        settings.backend_url = v;
    }
    if let Some(v) = env("APP__BACKEND_URL") {
        settings.backend_url = v;
    }

    if let Some(v) = env("APP__USER_ID") {
        if let Ok(parsed) = v.trim().parse::<i64>() {
            settings.user_id = parsed;
        }
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }

    if let Some(v) = env("APP__LOG_DIR") {
        settings.log_dir = PathBuf::from(v);
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
