use comment_hider_engine::ColumnUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid python glob {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },
}

fn default_true() -> bool {
    true
}

fn default_python_globs() -> Vec<String> {
    ["*.py", "*.pyi", "*.pyw"].map(String::from).to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub column_unit: ColumnUnit,
    #[serde(default = "default_true")]
    pub hide_line_comments: bool,
    #[serde(default = "default_true")]
    pub hide_block_comments: bool,
    /// Hide comments as soon as a file is opened.
    #[serde(default)]
    pub start_hidden: bool,
    /// File-name globs treated as Python source.
    #[serde(default = "default_python_globs")]
    pub python_globs: Vec<String>,
    /// File opened when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,
}

/// Compiled `python_globs`, matched against file names only.
#[derive(Debug, Clone)]
pub struct PythonMatcher {
    patterns: Vec<glob::Pattern>,
}

impl PythonMatcher {
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.patterns.iter().any(|p| p.matches(name)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_unit: ColumnUnit::default(),
            hide_line_comments: true,
            hide_block_comments: true,
            start_hidden: false,
            python_globs: default_python_globs(),
            default_file: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the default file path
        config.default_file = config
            .default_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/comment-hider");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Compiles `python_globs` once for repeated matching.
    pub fn python_matcher(&self) -> Result<PythonMatcher, ConfigError> {
        let patterns = self
            .python_globs
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidGlob {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(PythonMatcher { patterns })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/comment-hider/config.toml"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_fields_parse() {
        let config_content = r#"
column_unit = "char"
hide_line_comments = false
start_hidden = true
python_globs = ["*.py", "SConstruct"]
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.column_unit, ColumnUnit::Char);
        assert!(!config.hide_line_comments);
        assert!(config.hide_block_comments);
        assert!(config.start_hidden);
        assert_eq!(config.python_globs, vec!["*.py", "SConstruct"]);
        assert_eq!(config.default_file, None);
    }

    #[test]
    fn test_unknown_column_unit_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "column_unit = \"words\"\n").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_python_globs_match_file_name() {
        let config = Config {
            python_globs: vec!["*.py".into(), "SConstruct".into()],
            ..Config::default()
        };

        let matcher = config.python_matcher().unwrap();

        assert!(matcher.matches(Path::new("/src/app/main.py")));
        assert!(matcher.matches(Path::new("build/SConstruct")));
        assert!(!matcher.matches(Path::new("README.md")));
    }

    #[test]
    fn test_invalid_glob_is_reported() {
        let config = Config {
            python_globs: vec!["[".into()],
            ..Config::default()
        };

        let result = config.python_matcher();
        assert!(matches!(result, Err(ConfigError::InvalidGlob { .. })));
    }

    #[test]
    fn test_python_matcher_ignores_directories() {
        let matcher = Config::default().python_matcher().unwrap();

        assert!(matcher.matches(Path::new("pkg/stubs.pyi")));
        assert!(!matcher.matches(Path::new("venv.py/README")));
        assert!(!matcher.matches(Path::new("/")));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path.py");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path.py"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            column_unit: ColumnUnit::Byte,
            start_hidden: true,
            default_file: Some(PathBuf::from("/tmp/app.py")),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_default_file_env_var_is_expanded() {
        unsafe {
            env::set_var("COMMENT_HIDER_ROOT", "/custom/src");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "default_file = \"$COMMENT_HIDER_ROOT/main.py\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.default_file, Some(PathBuf::from("/custom/src/main.py")));

        unsafe {
            env::remove_var("COMMENT_HIDER_ROOT");
        }
    }
}
