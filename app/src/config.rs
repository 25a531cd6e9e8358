use std::fs;

use profile_core::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "profile-finder.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            api_base_url: DEFAULT_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

/// Keys accepted in `profile-finder.toml`; all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    api_base_url: Option<String>,
    user_agent: Option<String>,
}

/// Defaults, then `profile-finder.toml` in the working directory, then
/// environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(cfg) => cfg,
        Err(error) => {
            warn!(file = SETTINGS_FILE, %error, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.bind_addr {
        settings.bind_addr = v;
    }
    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.user_agent {
        settings.user_agent = v;
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("PROFILE_FINDER_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = var("PROFILE_FINDER_API_BASE") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("PROFILE_FINDER_USER_AGENT") {
        settings.user_agent = v;
    }
}
