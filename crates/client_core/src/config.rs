use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::protocol::GENERATE_PATH;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
        }
    }
}

impl ClientSettings {
    pub fn generate_endpoint(&self) -> anyhow::Result<Url> {
        generate_endpoint(&self.base_url)
    }
}

pub fn load_settings_from(path: &Path) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings
}

/// `APP__GENERATE_BASE_URL` wins over `GENERATE_BASE_URL`.
fn apply_env_overrides(settings: &mut ClientSettings, get: impl Fn(&str) -> Option<String>) {
    if let Some(v) = get("GENERATE_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = get("APP__GENERATE_BASE_URL") {
        settings.base_url = v;
    }
}

fn apply_file_overrides(settings: &mut ClientSettings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("base_url") {
            settings.base_url = v.clone();
        }
    }
}

/// Resolves the full `/generate` URL for a server base such as
/// `http://127.0.0.1:5000`.
pub fn generate_endpoint(base_url: &str) -> anyhow::Result<Url> {
    let base_url = base_url.trim().trim_end_matches('/');
    if base_url.is_empty() {
        bail!("generate base url is empty");
    }

    let url = Url::parse(&format!("{base_url}{GENERATE_PATH}"))
        .with_context(|| format!("invalid generate base url '{base_url}'"))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("unsupported scheme '{other}' in generate base url '{base_url}'"),
    }
}
