//! Project-level types.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The engagement a report is produced for.
///
/// A project is constructed once per run, either deserialized from a YAML
/// definition file or synthesized by [`Project::sample`], and is read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,

    /// Client the engagement is performed for.
    pub client: String,

    /// Internal engagement reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Engagement start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Engagement end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Classification applied to documents that do not set their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    /// People working on the engagement.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
}

impl Project {
    /// Produce a fully-populated, internally consistent sample project.
    ///
    /// The result is valid input to the loader's serializer and round-trips
    /// through deserialization unchanged.
    pub fn sample() -> Self {
        Self {
            name: "Acme Webshop Assessment".to_string(),
            client: "Acme Corporation".to_string(),
            reference: Some("ACME-2026-001".to_string()),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 27),
            classification: Some("Confidential".to_string()),
            authors: vec![
                Author::new("Jordan Reyes").with_email("jordan@example.com"),
                Author::new("Sam Okafor").with_role("Reviewer"),
            ],
        }
    }

    /// Check required-field presence.
    ///
    /// Serde already rejects definitions where `name` or `client` is absent;
    /// this additionally rejects fields that are present but empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("project.name".to_string()));
        }
        if self.client.trim().is_empty() {
            return Err(Error::MissingField("project.client".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project '{}' for {}", self.name, self.client)?;
        if let Some(ref reference) = self.reference {
            write!(f, " [{}]", reference)?;
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            write!(f, ", {} to {}", start, end)?;
        }
        if !self.authors.is_empty() {
            let names: Vec<&str> = self.authors.iter().map(|a| a.name.as_str()).collect();
            write!(f, ", by {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// A person credited on the engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Full name.
    pub name: String,

    /// Contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Role on the engagement (author, reviewer, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Author {
    /// Create an author with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            role: None,
        }
    }

    /// Set the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
