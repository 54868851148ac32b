use crate::error::{Result, RosterError};
use crate::types::config::RosterConfig;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".roster/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/roster/config.toml";

/// One TOML file in the merge stack. Later layers override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConfigLayer {
    label: &'static str,
    path: PathBuf,
}

/// Loads the configuration for the data directory `data_dir`.
///
/// Returns `None` when the data directory has no `roster.toml`; the global
/// and local files only refine a data directory that opted in.
pub fn load_config(data_dir: &Path) -> Result<Option<RosterConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(data_dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    data_dir: &Path,
    global_path: Option<&Path>,
) -> Result<Option<RosterConfig>> {
    let layers = config_layers(data_dir, global_path);
    let mut merged = Value::Table(Map::new());
    let mut has_data_dir_file = false;

    for layer in &layers {
        let Some(value) = read_layer(layer)? else {
            continue;
        };
        has_data_dir_file |= layer.label == "data";
        tracing::debug!(layer = layer.label, path = %layer.path.display(), "config layer applied");
        merge_toml(&mut merged, value);
    }

    if !has_data_dir_file {
        return Ok(None);
    }

    let cfg: RosterConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RosterError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn config_layers(data_dir: &Path, global_path: Option<&Path>) -> Vec<ConfigLayer> {
    let mut layers = Vec::with_capacity(3);
    if let Some(path) = global_path {
        layers.push(ConfigLayer {
            label: "global",
            path: path.to_path_buf(),
        });
    }
    layers.push(ConfigLayer {
        label: "data",
        path: data_dir.join(DEFAULT_CONFIG_FILE),
    });
    layers.push(ConfigLayer {
        label: "local",
        path: data_dir.join(DEFAULT_LOCAL_FILE),
    });
    layers
}

/// Parses one layer, or `None` when its file does not exist.
fn read_layer(layer: &ConfigLayer) -> Result<Option<Value>> {
    let content = match std::fs::read_to_string(&layer.path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    toml::from_str(&content).map(Some).map_err(|e| {
        RosterError::ConfigParse(format!("{} config {}: {}", layer.label, layer.path.display(), e))
    })
}

/// Tables merge key by key; any other value in `overlay` replaces the base.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
