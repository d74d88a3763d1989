use anyhow::{anyhow, Context, Result};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::models::Config;

pub const ENV_API_TOKEN: &str = "HETZNER_DNS_API_TOKEN";
const APP_DIR: &str = "hetznerdns";
const CONFIG_FILE: &str = "config.yaml";

/// Reads and writes the token file at one fixed path.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/hetznerdns/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Failed to determine home directory"))?;
        Ok(home.join(".config").join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config, letting `HETZNER_DNS_API_TOKEN` override the file.
    pub fn load(&self) -> Result<Config> {
        self.load_with_override(std::env::var(ENV_API_TOKEN).ok())
    }

    pub(crate) fn load_with_override(&self, env_token: Option<String>) -> Result<Config> {
        let mut config = self.load_file()?;

        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            debug!("Using API token from {}", ENV_API_TOKEN);
            config.api_token = token;
        }

        Ok(config)
    }

    /// Reads only the file, ignoring the environment.
    pub fn load_file(&self) -> Result<Config> {
        let path = self.path.display();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file {} not found, starting without a token", path);
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config file: {}", path))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Writes the config next to its final location and renames it into
    /// place, so an interrupted write leaves the old file intact.
    pub fn save(&self, config: &Config) -> Result<()> {
        let path = self.path.display();
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = serde_yaml::to_string(config).context("Failed to serialize config")?;

        let tmp_path = self.path.with_extension("yaml.tmp");
        // A stale temp file would keep its old permissions.
        match fs::remove_file(&tmp_path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                return Err(e)
                    .with_context(|| format!("Failed to remove {}", tmp_path.display()));
            }
            _ => {}
        }

        let written = write_new(&tmp_path, contents.as_bytes())
            .and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("Failed to write config file: {}", path));
        }

        debug!("Saved config to {}", path);
        Ok(())
    }
}

fn write_new(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = owner_only(OpenOptions::new().write(true).create_new(true)).open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(unix)]
fn owner_only(options: &mut OpenOptions) -> &mut OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(0o600)
}

#[cfg(not(unix))]
fn owner_only(options: &mut OpenOptions) -> &mut OpenOptions {
    options
}
