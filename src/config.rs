use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::ensure_project_root,
    error::{GenerateError, Result},
};

pub const CONFIG_FILE_NAME: &str = ".gopotrc.json";

/// Project configuration read from `.gopotrc.json` in the project root.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

pub fn default_extensions() -> Vec<String> {
    ["tscn", "tres"].map(String::from).to_vec()
}

pub fn default_fields() -> Vec<String> {
    [
        "text",
        "hint_text",
        "tooltip",
        "hint_tooltip",
        "placeholder",
        "hint_placeholder",
        "label",
        "hint_label",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            fields: default_fields(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values and compile the `ignores` patterns.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self, path: &Path) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|e| {
                    GenerateError::config(
                        path,
                        format!("invalid glob pattern in 'ignores': \"{}\": {}", pattern, e),
                    )
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Config::default())
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Compiled `config.ignores`.
    pub ignores: Vec<Pattern>,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load `.gopotrc.json` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<ConfigLoadResult> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            ignores: Vec::new(),
            from_file: false,
        });
    }

    let content =
        fs::read_to_string(&path).map_err(|source| GenerateError::file_read(&path, source))?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| GenerateError::config(&path, format!("failed to parse: {}", e)))?;
    let ignores = config.validate(&path)?;

    Ok(ConfigLoadResult {
        config,
        ignores,
        from_file: true,
    })
}

/// Values supplied on the command line. Empty lists defer to the
/// configuration file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub extensions: Vec<String>,
    pub fields: Vec<String>,
    pub verbose: bool,
}

/// Immutable settings for one generation run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Lower-cased extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Field names, tried in order on each line.
    pub fields: Vec<String>,
    pub ignores: Vec<Pattern>,
    pub verbose: bool,
}

impl ScanConfig {
    /// Settings built from defaults only.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            extensions: default_extensions(),
            fields: default_fields(),
            ignores: Vec::new(),
            verbose: false,
        }
    }

    /// Merge command-line overrides over the project's configuration file.
    ///
    /// The project root is validated before the configuration file is read.
    /// Returns the settings and whether a configuration file was found.
    pub fn resolve(
        root: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        overrides: Overrides,
    ) -> Result<(Self, bool)> {
        let root = root.into();
        ensure_project_root(&root)?;

        let ConfigLoadResult {
            config,
            ignores,
            from_file,
        } = load_config(&root)?;
        let config_path = root.join(CONFIG_FILE_NAME);

        let extensions = if overrides.extensions.is_empty() {
            config.extensions
        } else {
            overrides.extensions
        };
        let fields = if overrides.fields.is_empty() {
            config.fields
        } else {
            overrides.fields
        };

        if extensions.is_empty() {
            return Err(GenerateError::config(
                config_path,
                "'extensions' must not be empty",
            ));
        }
        if fields.is_empty() {
            return Err(GenerateError::config(
                config_path,
                "'fields' must not be empty",
            ));
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(GenerateError::config(
                config_path,
                "field names must not be empty",
            ));
        }

        let scan_config = Self {
            root,
            output: output.into(),
            extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
            fields,
            ignores,
            verbose: overrides.verbose,
        };
        Ok((scan_config, from_file))
    }
}

/// Lower-case an extension and drop a leading dot (`.TSCN` -> `tscn`).
fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}
