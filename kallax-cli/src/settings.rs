//! Application settings (data file location).
//!
//! One settings file at `~/.config/kallax/settings.toml` so every
//! invocation agrees on where the shelf lives, whatever directory it
//! runs from.

use std::io;
use std::path::{Path, PathBuf};

/// Data file used when neither the CLI nor the settings name one.
pub const DEFAULT_DATA_FILE: &str = "collections.yml";

/// Canonical path to the settings file: `~/.config/kallax/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("kallax").join("settings.toml")
}

/// Resolve the data file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `data.file` in `settings.toml`
/// 3. `collections.yml` in the current working directory
pub fn resolve_data_file(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_file() {
        return p;
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Read `data.file` from `settings.toml`, if set.
fn load_data_file() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let file = doc.get("data")?.get("file")?.as_str()?;
    if file.is_empty() {
        None
    } else {
        Some(PathBuf::from(file))
    }
}

/// Save (or clear) the data file path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated settings in the
/// file are preserved.
pub fn save_data_file(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [data] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let data = table
        .entry("data")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let data_table = data
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[data] is not a table"))?;

    match path {
        Some(p) => {
            data_table.insert(
                "file".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            data_table.remove("file");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
