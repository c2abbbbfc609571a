//! Configuration for the nextstep server.
//!
//! Provides a TOML-based config file at `~/.config/nextstep/config.toml`
//! and a resolution chain per value: CLI flag > env var > config file >
//! default. The Firebase section is pure client configuration: it is
//! handed to the browser verbatim and never interpreted here.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gemini: GeminiSection,
    #[serde(default)]
    pub firebase: FirebaseSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSection {
    pub api_key: String,
    /// Model override; the client's default is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseSection {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

// -----------------------------------------------------------------------
// Client configuration record
// -----------------------------------------------------------------------

/// Firebase client configuration as the browser SDK expects it
/// (camelCase keys). Embedded into the login/form/dashboard pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl From<FirebaseSection> for FirebaseConfig {
    fn from(s: FirebaseSection) -> Self {
        Self {
            api_key: s.api_key,
            auth_domain: s.auth_domain,
            project_id: s.project_id,
            storage_bucket: s.storage_bucket,
            messaging_sender_id: s.messaging_sender_id,
            app_id: s.app_id,
            measurement_id: s.measurement_id,
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the nextstep config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/nextstep` or
/// `~/.config/nextstep`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("nextstep");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("nextstep")
}

/// Return the path to the nextstep config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix (the file holds an API key).
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved server configuration, ready for use.
#[derive(Debug)]
pub struct ServerConfig {
    pub api_key: String,
    pub model: Option<String>,
    pub firebase: FirebaseConfig,
}

impl ServerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config
    /// file > default.
    ///
    /// - API key: `cli_api_key` > `GEMINI_API_KEY` env > `[gemini] api_key`
    ///   in the config file > error. The server refuses to start without
    ///   one.
    /// - Model: `GEMINI_MODEL` env > `[gemini] model` > client default.
    /// - Firebase fields: `FIREBASE_*` env vars > `[firebase]` section >
    ///   empty strings.
    pub fn resolve(cli_api_key: Option<&str>) -> Result<Self> {
        let file_config = load_config().ok();

        let api_key = if let Some(key) = cli_api_key {
            key.to_string()
        } else if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            key
        } else if let Some(ref cfg) = file_config {
            cfg.gemini.api_key.clone()
        } else {
            String::new()
        };
        if api_key.is_empty() {
            bail!(
                "Gemini API key not found; set GEMINI_API_KEY or run `nextstep init` and fill in [gemini] api_key"
            );
        }

        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .or_else(|| file_config.as_ref().and_then(|c| c.gemini.model.clone()));

        let section = file_config
            .map(|c| c.firebase)
            .unwrap_or_default();
        let firebase = resolve_firebase(section);

        Ok(Self {
            api_key,
            model,
            firebase,
        })
    }
}

fn resolve_firebase(section: FirebaseSection) -> FirebaseConfig {
    FirebaseConfig {
        api_key: env_or("FIREBASE_API_KEY", section.api_key),
        auth_domain: env_or("FIREBASE_AUTH_DOMAIN", section.auth_domain),
        project_id: env_or("FIREBASE_PROJECT_ID", section.project_id),
        storage_bucket: env_or("FIREBASE_STORAGE_BUCKET", section.storage_bucket),
        messaging_sender_id: env_or("FIREBASE_MESSAGING_SENDER_ID", section.messaging_sender_id),
        app_id: env_or("FIREBASE_APP_ID", section.app_id),
        measurement_id: env_or("FIREBASE_MEASUREMENT_ID", section.measurement_id),
    }
}

fn env_or(var: &str, fallback: String) -> String {
    std::env::var(var).unwrap_or(fallback)
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
