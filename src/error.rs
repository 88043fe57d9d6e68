//! Error type shared by the generation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error produced by a [`FileSystem`](crate::ports::FileSystem) port.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure that aborts a generation run.
///
/// There is no partial-success mode: the first error stops the pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A document, artifact or config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying port error.
        source: PortError,
    },

    /// A document or artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying port error.
        source: PortError,
    },

    /// A document is not valid JSON/YAML or does not have the expected shape.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// Offending document.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A registry could not be turned back into its canonical text.
    #[error("failed to serialize {}: {message}", path.display())]
    Serialize {
        /// Document being serialized.
        path: PathBuf,
        /// Serializer message.
        message: String,
    },

    /// A registry parsed but breaks a naming rule.
    #[error("invalid registry {}: {message}", path.display())]
    Invalid {
        /// Offending document.
        path: PathBuf,
        /// Which entry and which rule.
        message: String,
    },

    /// Template compilation or rendering failed.
    #[error("template error: {}", render_chain(.0))]
    Template(#[from] tera::Error),

    /// The configuration file is unusable.
    #[error("invalid config: {0}")]
    Config(String),

    /// Check mode found files that a normal run would rewrite.
    #[error("out of date: {}", join_paths(.0))]
    Stale(Vec<PathBuf>),
}

/// Tera keeps the useful part of a rendering failure in the source chain.
fn render_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
