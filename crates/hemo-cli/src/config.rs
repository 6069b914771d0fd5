use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "HEMO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HemoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Largest batch `hemo batch` accepts. Added in v1.
    pub max_batch: usize,
}

impl Default for HemoConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            max_batch: hemo_analysis::session::DEFAULT_MAX_BATCH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Resolve the config path: explicit flag, then `HEMO_CONFIG`, then the
/// platform config directory.
pub fn config_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("hemo").join("config.json"))
}

/// Where a loaded config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Nothing at the path; built-in defaults.
    Defaults,
    /// Read from disk at the current version.
    File,
    /// Read from disk and upgraded from an older `config_version`.
    Migrated { from: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: HemoConfig,
    pub origin: ConfigOrigin,
}

/// Read the config at `path`. A missing file is not an error.
///
/// Nothing is logged here: the CLI loads its config before the subscriber
/// exists, and reports [`LoadedConfig::origin`] once logging is up.
pub fn load_config(path: &Path) -> eyre::Result<LoadedConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadedConfig {
                config: HemoConfig::default(),
                origin: ConfigOrigin::Defaults,
            });
        }
        Err(e) => eyre::bail!("cannot read {}: {e}", path.display()),
    };

    // Upgrades work on the untyped tree, before any field is required.
    let mut tree: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| eyre::eyre!("{} is not valid JSON: {e}", path.display()))?;
    let stored = stored_version(&tree)?;
    if stored > CURRENT_VERSION {
        eyre::bail!(
            "{} has config_version {stored}, but hemo only understands up to {CURRENT_VERSION}",
            path.display()
        );
    }

    let origin = if stored < CURRENT_VERSION {
        upgrade(&mut tree, stored)?;
        ConfigOrigin::Migrated { from: stored }
    } else {
        ConfigOrigin::File
    };

    let config = serde_json::from_value(tree)
        .map_err(|e| eyre::eyre!("invalid config in {}: {e}", path.display()))?;
    Ok(LoadedConfig { config, origin })
}

/// `config_version` as stored. Absent or null means a pre-versioned file.
fn stored_version(tree: &serde_json::Value) -> eyre::Result<u32> {
    match tree.get("config_version") {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(raw) => raw
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("config_version {raw} is not a valid version")),
    }
}

/// Bring `tree` from version `from` to [`CURRENT_VERSION`], one step at a time.
fn upgrade(tree: &mut serde_json::Value, from: u32) -> eyre::Result<()> {
    let fields = tree
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config root must be a JSON object"))?;

    // 1: max_batch
    if from < 1 {
        fields
            .entry("max_batch")
            .or_insert_with(|| hemo_analysis::session::DEFAULT_MAX_BATCH.into());
    }

    fields.insert("config_version".to_string(), CURRENT_VERSION.into());
    Ok(())
}

/// Write `config` to `path` with owner-only permissions, stamped with
/// [`CURRENT_VERSION`]. The file is staged beside `path` and renamed over it.
pub fn save_config(path: &Path, config: &HemoConfig) -> eyre::Result<()> {
    let Some(dir) = path.parent() else {
        eyre::bail!("{} has no parent directory", path.display());
    };
    std::fs::create_dir_all(dir)?;

    let body = serde_json::to_string_pretty(&HemoConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    })?;

    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }
    std::fs::rename(&staging, path)?;

    tracing::info!(path = %path.display(), "config written");
    Ok(())
}

/// Write a default config to `path`. An existing file is kept unless `force`.
pub fn init_config(path: &Path, force: bool) -> eyre::Result<()> {
    if path.exists() && !force {
        eyre::bail!(
            "{} already exists (use --force to replace it with defaults)",
            path.display()
        );
    }
    save_config(path, &HemoConfig::default())
}
