//! Multi-tier TOML configuration for MintMind.
//!
//! Reads configuration from multiple sources with precedence:
//! CLI flags > env vars > global config file > defaults

use mintmind_core::{DEFAULT_MAX_SUGGESTIONS, Limits};
use mintmind_types::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The default file the document is saved to before compiling.
pub const DEFAULT_OUTPUT: &str = "program.c";

/// The default C compiler.
pub const DEFAULT_COMPILER: &str = "gcc";

/// The default name of the compiled program.
pub const DEFAULT_BINARY: &str = "program";

/// The default syntect theme for highlighting.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Resolved configuration for an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub limits: Limits,
    pub max_suggestions: usize,
    pub highlight: bool,
    pub theme: String,
    pub output: PathBuf,
    pub compiler: String,
    pub binary: PathBuf,
    /// Tokens added to the built-in vocabulary at startup.
    pub extra_vocabulary: Vec<String>,
    pub config_dir: PathBuf,
}

/// Settings that can be read from a TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub vocabulary: VocabularySettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorSettings {
    pub line_capacity: Option<usize>,
    pub max_lines: Option<usize>,
    pub max_suggestions: Option<usize>,
    pub highlight: Option<bool>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSettings {
    pub output: Option<PathBuf>,
    pub compiler: Option<String>,
    pub binary: Option<PathBuf>,
}

/// Additional completion tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularySettings {
    #[serde(default)]
    pub extra: Vec<String>,
}

/// CLI overrides that take highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub compiler: Option<String>,
    pub no_highlight: bool,
}

impl EditorConfig {
    /// Load configuration from all sources, applying precedence rules.
    ///
    /// Precedence (highest to lowest):
    /// 1. CLI flags
    /// 2. Environment variables (`MINTMIND_CC`)
    /// 3. Global config (~/.mintmind/config.toml)
    /// 4. Defaults
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let config_dir = config_dir();
        let settings = load_settings_file(&config_dir.join("config.toml"));
        let env_compiler = std::env::var("MINTMIND_CC").ok();
        Self::resolve(settings, config_dir, env_compiler, overrides)
    }

    /// Merge already-read sources into a validated configuration.
    pub fn resolve(
        settings: SettingsFile,
        config_dir: PathBuf,
        env_compiler: Option<String>,
        overrides: CliOverrides,
    ) -> Result<Self, ConfigError> {
        let editor = settings.editor;
        let defaults = Limits::default();

        let limits = Limits {
            line_capacity: positive(
                "editor.line_capacity",
                editor.line_capacity.unwrap_or(defaults.line_capacity),
            )?,
            max_lines: positive(
                "editor.max_lines",
                editor.max_lines.unwrap_or(defaults.max_lines),
            )?,
        };
        let max_suggestions = positive(
            "editor.max_suggestions",
            editor.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS),
        )?;

        // Resolve compiler: CLI > env > config file
        let compiler = overrides
            .compiler
            .or(env_compiler)
            .or(settings.build.compiler)
            .unwrap_or_else(|| DEFAULT_COMPILER.to_string());
        if compiler.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "build.compiler".into(),
                message: "must not be empty".into(),
            });
        }

        let output = overrides
            .output
            .or(settings.build.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let binary = settings
            .build
            .binary
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY));

        let highlight = !overrides.no_highlight && editor.highlight.unwrap_or(true);
        let theme = editor.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());

        Ok(EditorConfig {
            limits,
            max_suggestions,
            highlight,
            theme,
            output,
            compiler,
            binary,
            extra_vocabulary: settings.vocabulary.extra,
            config_dir,
        })
    }
}

fn positive(key: &str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.into(),
            message: "must be greater than zero".into(),
        });
    }
    Ok(value)
}

/// Get the MintMind config directory path (~/.mintmind/).
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MINTMIND_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mintmind")
}

/// Load and parse a TOML settings file, returning defaults on any error.
pub fn load_settings_file(path: &Path) -> SettingsFile {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            SettingsFile::default()
        }),
        Err(_) => SettingsFile::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(settings: SettingsFile) -> Result<EditorConfig, ConfigError> {
        EditorConfig::resolve(
            settings,
            PathBuf::from("/tmp/mintmind"),
            None,
            CliOverrides::default(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = resolve(SettingsFile::default()).unwrap();
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.limits.line_capacity, 511);
        assert_eq!(config.limits.max_lines, 99);
        assert_eq!(config.max_suggestions, 15);
        assert!(config.highlight);
        assert_eq!(config.theme, DEFAULT_THEME);
        assert_eq!(config.output, PathBuf::from("program.c"));
        assert_eq!(config.compiler, "gcc");
        assert_eq!(config.binary, PathBuf::from("program"));
        assert!(config.extra_vocabulary.is_empty());
    }

    #[test]
    fn test_settings_toml_parse() {
        let toml_str = r#"
[editor]
line_capacity = 120
max_suggestions = 8
highlight = false

[build]
compiler = "clang"
output = "main.c"

[vocabulary]
extra = ["uint8_t", "uint32_t"]
"#;
        let settings: SettingsFile = toml::from_str(toml_str).unwrap();
        let config = resolve(settings).unwrap();
        assert_eq!(config.limits.line_capacity, 120);
        assert_eq!(config.limits.max_lines, 99);
        assert_eq!(config.max_suggestions, 8);
        assert!(!config.highlight);
        assert_eq!(config.compiler, "clang");
        assert_eq!(config.output, PathBuf::from("main.c"));
        assert_eq!(config.extra_vocabulary, vec!["uint8_t", "uint32_t"]);
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let mut settings = SettingsFile::default();
        settings.build.compiler = Some("tcc".into());

        let from_env = EditorConfig::resolve(
            settings.clone(),
            PathBuf::new(),
            Some("clang".into()),
            CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(from_env.compiler, "clang");

        let from_cli = EditorConfig::resolve(
            settings,
            PathBuf::new(),
            Some("clang".into()),
            CliOverrides {
                compiler: Some("cc".into()),
                output: Some("out.c".into()),
                no_highlight: true,
            },
        )
        .unwrap();
        assert_eq!(from_cli.compiler, "cc");
        assert_eq!(from_cli.output, PathBuf::from("out.c"));
        assert!(!from_cli.highlight);
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let mut settings = SettingsFile::default();
        settings.editor.max_lines = Some(0);
        let err = resolve(settings).unwrap_err();
        assert!(err.to_string().contains("editor.max_lines"));

        let mut settings = SettingsFile::default();
        settings.editor.max_suggestions = Some(0);
        assert!(resolve(settings).is_err());
    }

    #[test]
    fn test_empty_compiler_is_rejected() {
        let mut settings = SettingsFile::default();
        settings.build.compiler = Some("  ".into());
        let err = resolve(settings).unwrap_err();
        assert!(err.to_string().contains("build.compiler"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_file(&dir.path().join("config.toml"));
        assert!(settings.editor.line_capacity.is_none());
        assert!(settings.vocabulary.extra.is_empty());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor\nline_capacity = ").unwrap();
        let settings = load_settings_file(&path);
        assert!(settings.editor.line_capacity.is_none());
    }

    #[test]
    fn test_settings_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\nmax_lines = 40\n").unwrap();
        let settings = load_settings_file(&path);
        assert_eq!(settings.editor.max_lines, Some(40));
    }
}
