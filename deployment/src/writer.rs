use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::errors::WriteError;

pub const NODE_CONFIG_FILE: &str = "nodeConfig.json";
pub const SETUP_SCRIPT_CONFIG_FILE: &str = "orbitSetupScriptConfig.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub node_config: PathBuf,
    pub setup_script_config: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            node_config: dir.join(NODE_CONFIG_FILE),
            setup_script_config: dir.join(SETUP_SCRIPT_CONFIG_FILE),
        }
    }
}

/// Writes `value` as pretty-printed JSON, replacing any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), WriteError> {
    let json_string = serde_json::to_string_pretty(value)
        .map_err(|source| WriteError::Serialize { path: path.to_path_buf(), source })?;

    let io_err = |source| WriteError::Io { path: path.to_path_buf(), source };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(json_string.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}
