//! Loading and dumping YAML definition files.
//!
//! Malformed YAML is reported as [`Error::Parse`]; well-formed YAML that
//! does not match the definition schema is reported as [`Error::Schema`].
//! Both are fatal to a run. Serialization and deserialization round-trip:
//! `from_yaml(to_yaml(x))` reproduces `x` for any loadable instance.

use crate::error::{Error, Result};
use crate::model::{Document, Project};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// A domain type that can be loaded from and dumped to a definition file.
pub trait Definition: DeserializeOwned + Serialize {
    /// Kind name used in diagnostics.
    const KIND: &'static str;

    /// Check required-field presence after deserialization.
    fn validate(&self) -> Result<()>;
}

impl Definition for Project {
    const KIND: &'static str = "project";

    fn validate(&self) -> Result<()> {
        Project::validate(self)
    }
}

impl Definition for Document {
    const KIND: &'static str = "document";

    fn validate(&self) -> Result<()> {
        Document::validate(self)
    }
}

/// Deserialize a definition from a reader.
///
/// The input is parsed to a YAML value first so that syntax errors and
/// schema violations surface as distinct error variants.
pub fn from_yaml<T: Definition>(reader: impl Read) -> Result<T> {
    let value: serde_yaml::Value =
        serde_yaml::from_reader(reader).map_err(|e| Error::Parse(e.to_string()))?;
    let instance: T = serde_yaml::from_value(value)
        .map_err(|e| Error::Schema(format!("{}: {}", T::KIND, e)))?;
    instance.validate()?;
    Ok(instance)
}

/// Serialize a definition to YAML.
pub fn to_yaml<T: Definition>(instance: &T) -> Result<String> {
    serde_yaml::to_string(instance).map_err(|e| Error::Schema(format!("{}: {}", T::KIND, e)))
}

/// Load a project definition from a reader.
pub fn load_project(reader: impl Read) -> Result<Project> {
    from_yaml(reader)
}

/// Load a document definition from a reader.
pub fn load_document(reader: impl Read) -> Result<Document> {
    from_yaml(reader)
}

/// Load a project definition file, naming the file in any error.
pub fn load_project_file<P: AsRef<Path>>(path: P) -> Result<Project> {
    load_file(path.as_ref())
}

/// Load a document definition file, naming the file in any error.
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    load_file(path.as_ref())
}

fn load_file<T: Definition>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;
    from_yaml(BufReader::new(file)).map_err(|e| e.with_path(path))
}
