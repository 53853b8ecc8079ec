use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::i18n;

/// XDG prefix for config, data and state directories.
pub const APP_PREFIX: &str = "shortcut-wall";

/// Global configuration loaded from `~/.config/shortcut-wall/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Display name of the landing page.
    pub app_name: String,
    /// Locale used when the visitor has not picked one ("fr" or "en").
    pub default_locale: String,
    /// Directory holding `shortcuts.json` and `folders.json`. Defaults to the XDG data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Directory backing `/uploads/...` image URLs. Defaults to `<data_dir>/uploads`.
    #[serde(default)]
    pub uploads_dir: Option<PathBuf>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub support_phone: Option<String>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3050,
            app_name: "ShortcutWall".to_string(),
            default_locale: i18n::DEFAULT_LOCALE.to_string(),
            data_dir: None,
            uploads_dir: None,
            support_email: None,
            support_phone: None,
        }
    }
}

impl WallConfig {
    /// Applies overrides from `lookup` (normally the process environment):
    /// `HOST`, `PORT`, `APP_NAME`, `APP_DEFAULT_LOCALE`, `SUPPORT_EMAIL`, `SUPPORT_PHONE`.
    /// Blank values and unparseable ports are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        if let Some(host) = get("HOST") {
            self.host = host;
        }
        if let Some(port) = get("PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(name) = get("APP_NAME") {
            self.app_name = name;
        }
        if let Some(locale) = get("APP_DEFAULT_LOCALE").as_deref().and_then(i18n::normalize_locale) {
            self.default_locale = locale.to_string();
        }
        if let Some(email) = get("SUPPORT_EMAIL") {
            self.support_email = Some(email);
        }
        if let Some(phone) = get("SUPPORT_PHONE") {
            self.support_phone = Some(phone);
        }
    }

    /// Default locale, falling back to the built-in one if the file names an unsupported locale.
    pub fn locale(&self) -> &'static str {
        i18n::normalize_locale(&self.default_locale).unwrap_or(i18n::DEFAULT_LOCALE)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
                Ok(xdg_dirs.get_data_home())
            }
        }
    }

    pub fn resolved_uploads_dir(&self) -> Result<PathBuf> {
        match &self.uploads_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.resolved_data_dir()?.join("uploads")),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists,
/// then apply environment overrides.
pub fn load_or_init() -> Result<WallConfig> {
    let path = config_path()?;
    let mut cfg: WallConfig = if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("read config: {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?
    } else {
        let default_cfg = WallConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    };
    cfg.apply_overrides(|key| std::env::var(key).ok());
    Ok(cfg)
}
