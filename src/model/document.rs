//! Document-level types.

use super::Project;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One specific report, associated with exactly one [`Project`].
///
/// Constructed once per run (from a YAML definition file or via
/// [`Document::sample`]), configured once with
/// [`Document::configure_from_project`], then read-only during rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Report title.
    pub title: String,

    /// Report version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Report date. Defaults to the project end date when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Classification marking. Defaults to the project classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    /// Report language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Report body sections, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,

    /// Name of the owning project, recorded by `configure_from_project`.
    ///
    /// This is a non-owning association: project fields themselves are read
    /// from the [`Project`] half of the render context, never copied here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl Document {
    /// Produce a fully-populated, internally consistent sample document.
    ///
    /// The result is valid input to the loader's serializer and round-trips
    /// through deserialization unchanged.
    pub fn sample() -> Self {
        Self {
            title: "Security Assessment Report".to_string(),
            version: Some("1.0".to_string()),
            date: None,
            classification: None,
            language: Some("en".to_string()),
            sections: vec![
                Section::new(
                    "Executive Summary",
                    "The assessment identified three findings of moderate severity.",
                ),
                Section::new(
                    "Scope",
                    "The public webshop and its administrative interface.",
                ),
            ],
            project_name: None,
        }
    }

    /// Record the association with `project` and derive unset defaults
    /// (`date` from the project end date, `classification` from the project
    /// classification).
    ///
    /// Must be called exactly once, after both the project and the document
    /// exist and before rendering. Idempotency is not part of the contract.
    pub fn configure_from_project(&mut self, project: &Project) {
        self.project_name = Some(project.name.clone());
        if self.date.is_none() {
            self.date = project.end_date;
        }
        if self.classification.is_none() {
            self.classification = project.classification.clone();
        }
    }

    /// Check required-field presence.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::MissingField("document.title".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document '{}'", self.title)?;
        if let Some(ref version) = self.version {
            write!(f, " v{}", version)?;
        }
        if let Some(date) = self.date {
            write!(f, " ({})", date)?;
        }
        if let Some(ref project_name) = self.project_name {
            write!(f, " for project '{}'", project_name)?;
        }
        write!(f, ", {} section(s)", self.sections.len())
    }
}

/// A titled block of report body text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading.
    pub heading: String,

    /// Section body markup.
    pub body: String,
}

impl Section {
    /// Create a section.
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}
