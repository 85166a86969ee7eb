//! Scenario loading from files, inline text and environment overrides.

use super::Scenario;
use crate::error::{HubError, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Text formats a scenario can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ScenarioFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `HubError::LoadError` if the extension is missing or not one of
    /// `.yaml`, `.yml`, `.toml` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                HubError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(HubError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            ))),
        }
    }

    fn file_format(self) -> FileFormat {
        match self {
            Self::Yaml => FileFormat::Yaml,
            Self::Toml => FileFormat::Toml,
            Self::Json => FileFormat::Json,
        }
    }
}

enum Source {
    Path(PathBuf),
    Inline(String, ScenarioFormat),
}

/// Builds a [`Scenario`] from one or more sources.
///
/// Sources are merged in the order they are added; later sources override
/// earlier ones, and environment overrides are applied last.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_hub::scenario::ScenarioLoader;
///
/// # fn example() -> signal_hub::error::Result<()> {
/// // HUB_NAME=nightly overrides the `name` key
/// let scenario = ScenarioLoader::new()
///     .with_file("scenarios/original.yaml")
///     .with_env_overrides("HUB", "__")
///     .load()?;
///
/// let report = scenario.run()?;
/// println!("{:?}", report.observers);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ScenarioLoader {
    sources: Vec<Source>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
}

impl ScenarioLoader {
    /// Create a loader with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scenario file. The format is detected from its extension.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::Path(path.into()));
        self
    }

    /// Add scenario text in the given format.
    pub fn with_str(mut self, content: impl Into<String>, format: ScenarioFormat) -> Self {
        self.sources.push(Source::Inline(content.into(), format));
        self
    }

    /// Apply environment variable overrides.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "HUB")
    /// * `separator` - Separator for nested keys (e.g., "__")
    ///
    /// `HUB_NAME=nightly` sets `name`. The list fields `signals`, `balls`,
    /// `objects` and `remove_objects` take comma-separated values, so
    /// `HUB_SIGNALS=DEC,INC` replaces the signal list. Use a separator other
    /// than `_` when overriding `remove_objects`.
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Number of sources added, environment overrides included.
    pub fn source_count(&self) -> usize {
        self.sources.len() + usize::from(self.env_prefix.is_some())
    }

    /// Merge all sources, deserialize and validate the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No sources were added
    /// - A file is missing or has an unsupported extension
    /// - A source cannot be parsed
    /// - Deserialization fails
    /// - Validation fails (feature `validation`)
    pub fn load(self) -> Result<Scenario> {
        if self.source_count() == 0 {
            return Err(HubError::LoadError(
                "No scenario sources specified".to_string(),
            ));
        }

        let mut builder = Config::builder();

        for source in &self.sources {
            builder = match source {
                Source::Path(path) => {
                    let format = ScenarioFormat::from_path(path)?;
                    if !path.exists() {
                        return Err(HubError::LoadError(format!(
                            "Scenario file not found: {}",
                            path.display()
                        )));
                    }
                    builder.add_source(
                        File::from(path.as_path())
                            .format(format.file_format())
                            .required(true),
                    )
                }
                Source::Inline(content, format) => {
                    builder.add_source(File::from_str(content, format.file_format()))
                }
            };
        }

        if let (Some(prefix), Some(separator)) = (&self.env_prefix, &self.env_separator) {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(separator)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("signals")
                    .with_list_parse_key("balls")
                    .with_list_parse_key("objects")
                    .with_list_parse_key("remove_objects"),
            );
        }

        let config = builder
            .build()
            .map_err(|e| HubError::LoadError(format!("Failed to build scenario: {}", e)))?;

        let scenario = config.try_deserialize::<Scenario>().map_err(|e| {
            HubError::DeserializationError(format!("Failed to deserialize scenario: {}", e))
        })?;

        #[cfg(feature = "validation")]
        {
            use super::Validate;
            scenario.validate()?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            name = %scenario.name,
            observers = scenario.observers.len(),
            signals = scenario.signals.len(),
            "scenario loaded"
        );

        Ok(scenario)
    }
}
