//! Requirement and task registries.
//!
//! Both registries are documents mapping a unique name to an entry. The
//! name is not stored inside the entry; the loader stamps it from the key.

pub mod loader;
mod names;
mod normalize;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub use loader::{load, LoadMode, LoadOutcome};
pub use normalize::{merge, sort_dedup};

/// Capabilities every generated task holds regardless of its declarations.
pub const BASE_CAPABILITIES: &[&str] = &["Fault", "Id", "Pool", "Scheduler"];

/// A named bundle of capabilities a scheduler needs a task to expose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementSpec {
    /// Registry key.
    #[serde(skip)]
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Capability names needed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

/// A named unit of work and the capabilities it reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSpec {
    /// Registry key.
    #[serde(skip)]
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Capability names consumed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<String>,
    /// Capability names produced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
    /// Requirements this task satisfies, sorted by name. Never persisted.
    #[serde(skip)]
    pub satisfied_requirements: Vec<String>,
}

impl TaskSpec {
    /// The capability surface seen by the matcher: `input ∪ output`.
    #[must_use]
    pub fn capability(&self) -> BTreeSet<&str> {
        self.input.iter().chain(&self.output).map(String::as_str).collect()
    }

    /// Capabilities the task holds, each once, sorted.
    #[must_use]
    pub fn held_capabilities(&self) -> Vec<String> {
        merge(&self.input, &self.output)
    }
}

/// Both registries of a run, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registries {
    /// Requirement registry.
    pub requirements: BTreeMap<String, RequirementSpec>,
    /// Task registry.
    pub tasks: BTreeMap<String, TaskSpec>,
}

/// Serialization format of a registry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON, pretty-printed with two-space indentation.
    Json,
    /// YAML.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension; anything but `.yaml`/`.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str) -> Result<UniqueMap<T>, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }

    fn render<T: Serialize>(self, entries: &BTreeMap<String, T>) -> Result<String, String> {
        match self {
            Self::Json => serde_json::to_string_pretty(entries)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(entries).map_err(|e| e.to_string()),
        }
    }
}

/// Name-keyed map that rejects repeated keys instead of keeping the last one.
struct UniqueMap<T>(BTreeMap<String, T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for UniqueMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UniqueMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for UniqueMapVisitor<T> {
            type Value = UniqueMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from unique names to entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some(name) = map.next_key::<String>()? {
                    if entries.contains_key(&name) {
                        return Err(de::Error::custom(format!("duplicate name `{name}`")));
                    }
                    let entry = map.next_value()?;
                    entries.insert(name, entry);
                }
                Ok(UniqueMap(entries))
            }
        }

        deserializer.deserialize_map(UniqueMapVisitor(PhantomData))
    }
}
