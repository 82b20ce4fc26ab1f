use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabdxConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// JSON reference table replacing the built-in one. Relative paths are
    /// resolved against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_table: Option<PathBuf>,
    /// JSON pattern table replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_table: Option<PathBuf>,
    /// Added in v1.
    #[serde(default)]
    pub default_format: OutputFormat,
}

impl LabdxConfig {
    /// Table paths in a config file are relative to the file itself, not to
    /// wherever labdx happens to be run from.
    fn resolve_tables_against(mut self, base: &Path) -> Self {
        self.reference_table = self.reference_table.map(|p| base.join(p));
        self.pattern_table = self.pattern_table.map(|p| base.join(p));
        self
    }

    /// Pin table paths to the current directory so the config reads the
    /// same tables wherever it is saved.
    pub fn with_absolute_tables(mut self) -> eyre::Result<Self> {
        self.reference_table = self.reference_table.map(std::path::absolute).transpose()?;
        self.pattern_table = self.pattern_table.map(std::path::absolute).transpose()?;
        Ok(self)
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("labdx").join("config.json"))
}

/// Load the config at `explicit`, or the default location if that exists,
/// or fall back to built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> eyre::Result<LabdxConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_config_path() {
        Ok(path) if path.exists() => load_config(&path),
        _ => {
            tracing::debug!("no config file, using built-in defaults");
            Ok(LabdxConfig::default())
        }
    }
}

pub fn load_config(path: &Path) -> eyre::Result<LabdxConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Migrations operate on the raw document.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: LabdxConfig = serde_json::from_value(migrated)?;
    let config = config.resolve_tables_against(path.parent().unwrap_or_else(|| Path::new(".")));

    tracing::debug!(
        path = %path.display(),
        reference_table = ?config.reference_table,
        pattern_table = ?config.pattern_table,
        "config loaded"
    );
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update labdx."
        ));
    }

    // v0 → v1: add default_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("default_format")
            .or_insert(serde_json::Value::String("json".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added default_format)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &LabdxConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write-then-rename.
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
