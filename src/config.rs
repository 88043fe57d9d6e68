//! Generator configuration (`capgen.yaml`).
//!
//! Every key is optional. Relative file paths are resolved against the
//! directory holding the configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::GenerateError;
use crate::naming::FORBIDDEN_IDENTS;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "capgen.yaml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "CAPGEN_CONFIG";

/// Full generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Requirement registry document.
    pub requirements: PathBuf,
    /// Task registry document.
    pub tasks: PathBuf,
    /// Where generated units are written.
    pub output: OutputPaths,
    /// Module paths the generated code refers to.
    pub paths: ModulePaths,
}

/// Files the three generated units are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputPaths {
    /// Capability contracts and scheduling-function types.
    pub contracts: PathBuf,
    /// Task types and constructors.
    pub tasks: PathBuf,
    /// Baseline tests.
    pub tests: PathBuf,
}

/// Rust module paths used inside the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModulePaths {
    /// Capability library: holders, getter/setter/validator traits, loaders, `Task`.
    pub types: String,
    /// Module the contracts unit is mounted as.
    pub contracts: String,
    /// Module providing `new_scheduler`.
    pub schedule: String,
    /// Module providing the fault accumulator constructor `new`.
    pub fault: String,
    /// Module the tasks unit is mounted as.
    pub tasks: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            requirements: PathBuf::from("requirements.json"),
            tasks: PathBuf::from("tasks.json"),
            output: OutputPaths::default(),
            paths: ModulePaths::default(),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            contracts: PathBuf::from("requirements.rs"),
            tasks: PathBuf::from("generated.rs"),
            tests: PathBuf::from("generated_tests.rs"),
        }
    }
}

impl Default for ModulePaths {
    fn default() -> Self {
        Self {
            types: "crate::types".to_string(),
            contracts: "crate::types".to_string(),
            schedule: "crate::schedule".to_string(),
            fault: "crate::fault".to_string(),
            tasks: "crate::task".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Resolves and loads the configuration.
    ///
    /// Lookup order: `explicit`, then the `CAPGEN_CONFIG` environment
    /// variable, then `capgen.yaml` in the working directory. An explicitly
    /// named file must exist; a missing default file means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a module
    /// path is not a valid Rust path.
    pub fn load(ctx: &ServiceContext, explicit: Option<&Path>) -> Result<Self, GenerateError> {
        let named = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var(CONFIG_ENV).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
        });
        match named {
            Some(path) => Self::from_file(ctx, &path),
            None if ctx.fs.exists(Path::new(DEFAULT_CONFIG_FILE)) => {
                Self::from_file(ctx, Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads a configuration file and resolves its relative paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a module
    /// path is not a valid Rust path.
    pub fn from_file(ctx: &ServiceContext, path: &Path) -> Result<Self, GenerateError> {
        let text = ctx
            .fs
            .read_to_string(path)
            .map_err(|source| GenerateError::Read { path: path.to_path_buf(), source })?;
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&text)
                .map_err(|e| GenerateError::Config(format!("{}: {e}", path.display())))?
        };
        config.paths.validate()?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Overrides the registry locations given on the command line.
    #[must_use]
    pub fn with_registries(mut self, requirements: Option<PathBuf>, tasks: Option<PathBuf>) -> Self {
        if let Some(path) = requirements {
            self.requirements = path;
        }
        if let Some(path) = tasks {
            self.tasks = path;
        }
        self
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| if path.is_absolute() { path } else { base.join(path) };
        Self {
            requirements: resolve(self.requirements),
            tasks: resolve(self.tasks),
            output: OutputPaths {
                contracts: resolve(self.output.contracts),
                tasks: resolve(self.output.tasks),
                tests: resolve(self.output.tests),
            },
            paths: self.paths,
        }
    }
}

impl ModulePaths {
    /// Checks every entry is a `::`-separated Rust path.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`] naming the first invalid entry.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for (key, value) in [
            ("types", &self.types),
            ("contracts", &self.contracts),
            ("schedule", &self.schedule),
            ("fault", &self.fault),
            ("tasks", &self.tasks),
        ] {
            if !is_module_path(value) {
                return Err(GenerateError::Config(format!(
                    "paths.{key} `{value}` is not a Rust module path"
                )));
            }
        }
        Ok(())
    }
}

fn is_module_path(path: &str) -> bool {
    path.split("::").enumerate().all(|(i, segment)| {
        let mut chars = segment.chars();
        let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        // `crate`, `self` and `super` are only meaningful as leading segments.
        well_formed && (i == 0 || !FORBIDDEN_IDENTS.contains(&segment) || segment == "super")
    })
}
