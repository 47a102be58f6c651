//! Configuration loading for the CLI.
//!
//! Loading happens in two steps. [`ConfigSource::discover`] decides which
//! file, if any, holds the configuration; [`load_config`] reads it, applies
//! the `--domain` selection from the command line and checks the selected
//! domains against the catalog before anything is assembled.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info, warn};
use thiserror::Error;

use landscape::{LandscapeError, config::AppConfig, domains::DOMAIN_NAMES};

use crate::Args;

/// Path of the per-project configuration, relative to the working directory.
const LOCAL_CONFIG: &str = "landscape/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for LandscapeError {
    fn from(err: ConfigError) -> Self {
        LandscapeError::Config(err.to_string())
    }
}

/// Where the configuration of a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config`; it must exist.
    Explicit(PathBuf),
    /// `landscape/config.toml` below the working directory.
    Local(PathBuf),
    /// `config.toml` in the platform configuration directory.
    System(PathBuf),
    /// No file; built-in defaults.
    Default,
}

impl ConfigSource {
    /// Picks the configuration source for a run.
    ///
    /// An explicit path always wins, even when it does not exist.
    pub fn discover(explicit_path: Option<&Path>) -> Self {
        if let Some(path) = explicit_path {
            return Self::Explicit(path.to_path_buf());
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return Self::Local(local);
        }

        match ProjectDirs::from("uk.gov.justice", "hmpps", "landscape") {
            Some(dirs) => {
                let system = dirs.config_dir().join("config.toml");
                if system.exists() {
                    return Self::System(system);
                }
                debug!(path = system.display().to_string(); "System configuration file not found");
            }
            None => debug!("Could not determine platform-specific config directory"),
        }

        Self::Default
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => Some(path),
            Self::Default => None,
        }
    }

    /// Reads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] for an explicit path that does
    /// not exist and [`ConfigError::Parse`] for malformed TOML.
    pub fn read(&self) -> Result<AppConfig, LandscapeError> {
        let Some(path) = self.path() else {
            return Ok(AppConfig::default());
        };
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.message().to_string(),
            }
            .into()
        })
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(_) => f.write_str("explicit"),
            Self::Local(_) => f.write_str("local"),
            Self::System(_) => f.write_str("system"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Loads the configuration for a run and applies the command line on top.
///
/// Domains given with `--domain` replace the configured selection. The
/// resulting selection must only name catalog domains, each at most once.
///
/// # Errors
///
/// Returns [`LandscapeError::Config`] when the file is missing or malformed,
/// or when the domain selection fails validation.
pub fn load_config(args: &Args) -> Result<AppConfig, LandscapeError> {
    let source = ConfigSource::discover(args.config.as_deref().map(Path::new));
    info!(
        source:% = source,
        path:? = source.path();
        "Loading configuration"
    );

    let mut config = source.read()?;
    if !args.domains.is_empty() {
        if !config.domains().is_empty() {
            warn!(
                configured:? = config.domains(),
                selected:? = args.domains;
                "Command line domains replace the configured selection"
            );
        }
        config = config.with_domains(args.domains.clone());
    }

    validate_domains(config.domains())?;
    Ok(config)
}

/// Checks a domain selection against the catalog.
fn validate_domains(domains: &[String]) -> Result<(), ConfigError> {
    for (index, name) in domains.iter().enumerate() {
        if !DOMAIN_NAMES.contains(&name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown domain `{name}`, known domains are: {}",
                DOMAIN_NAMES.join(", ")
            )));
        }
        if domains[..index].contains(name) {
            return Err(ConfigError::Validation(format!(
                "domain `{name}` is selected more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(domains: &[&str], config: Option<&Path>) -> Args {
        Args {
            domains: domains.iter().map(|d| d.to_string()).collect(),
            output: "workspace.json".to_string(),
            config: config.map(|p| p.to_string_lossy().to_string()),
            list_domains: false,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_explicit_path_wins_even_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let source = ConfigSource::discover(Some(missing.as_path()));
        assert_eq!(source, ConfigSource::Explicit(missing.clone()));
        assert_eq!(source.to_string(), "explicit");

        let err = source.read().unwrap_err();
        assert!(matches!(err, LandscapeError::Config(msg) if msg.contains("Missing configuration file")));
    }

    #[test]
    fn test_default_source_reads_defaults() {
        let config = ConfigSource::Default.read().unwrap();
        assert_eq!(config.workspace().name(), "HMPPS");
        assert!(config.domains().is_empty());
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "domains = [\"prison\"]\n[workspace]\nname = \"Prisons\"\n").unwrap();

        let config = load_config(&args(&[], Some(path.as_path()))).unwrap();
        assert_eq!(config.workspace().name(), "Prisons");
        assert_eq!(config.domains(), &["prison".to_string()]);
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "domains = [").unwrap();

        let err = load_config(&args(&[], Some(path.as_path()))).unwrap_err();
        assert!(matches!(
            err,
            LandscapeError::Config(msg)
                if msg.starts_with("Failed to parse TOML") && msg.contains("config.toml")
        ));
    }

    #[test]
    fn test_command_line_domains_replace_configured_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "domains = [\"prison\"]\n").unwrap();

        let config = load_config(&args(&["probation"], Some(path.as_path()))).unwrap();
        assert_eq!(config.domains(), &["probation".to_string()]);
    }

    #[test]
    fn test_unknown_command_line_domain_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let err = load_config(&args(&["prison", "courts"], Some(path.as_path()))).unwrap_err();
        assert!(matches!(
            err,
            LandscapeError::Config(msg)
                if msg.contains("unknown domain `courts`") && msg.contains("prison, probation")
        ));
    }

    #[test]
    fn test_unknown_configured_domain_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "domains = [\"courts\"]\n").unwrap();

        let err = load_config(&args(&[], Some(path.as_path()))).unwrap_err();
        assert!(matches!(err, LandscapeError::Config(msg) if msg.starts_with("Validation error")));
    }

    #[test]
    fn test_repeated_domain_is_rejected() {
        let err = validate_domains(&["prison".to_string(), "prison".to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: domain `prison` is selected more than once"
        );
    }

    #[test]
    fn test_catalog_domains_pass_validation() {
        let all: Vec<String> = DOMAIN_NAMES.iter().map(|d| d.to_string()).collect();
        assert!(validate_domains(&all).is_ok());
        assert!(validate_domains(&[]).is_ok());
    }
}
