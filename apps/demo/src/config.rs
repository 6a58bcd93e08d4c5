use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "demo.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub core_key: String,
    pub log_filter: String,
    pub seed_items: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            core_key: shared::CoreKey::DEFAULT.into(),
            log_filter: "warn".into(),
            seed_items: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    core_key: Option<String>,
    log_filter: Option<String>,
    seed_items: Option<Vec<String>>,
}

/// Defaults, then the TOML file at `path` (if present), then the environment.
///
/// A missing file at the default location is not an error; an explicitly
/// requested file must exist and parse.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };
    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = parse_file_settings(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file(&mut settings, file_cfg);
        }
        Err(err) if required => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
        Err(_) => {}
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn parse_file_settings(raw: &str) -> anyhow::Result<FileSettings> {
    Ok(toml::from_str(raw)?)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.core_key {
        settings.core_key = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.seed_items {
        settings.seed_items = v;
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DEMO_CORE_KEY") {
        settings.core_key = v;
    }
    if let Some(v) = var("APP__CORE_KEY") {
        settings.core_key = v;
    }

    if let Some(v) = var("DEMO_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = var("APP__SEED_ITEMS") {
        settings.seed_items = v
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
