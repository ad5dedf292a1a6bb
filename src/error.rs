//! Error types for the docsmith library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docsmith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing and converting a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The definition file is not well-formed YAML.
    #[error("YAML parse error: {0}")]
    Parse(String),

    /// The definition file is valid YAML but does not match the schema.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A required field is absent or empty after construction.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// No template with the given name exists in any search location.
    #[error("Template '{name}' not found in locations: {}", format_locations(.locations))]
    TemplateNotFound {
        /// The template name that was requested.
        name: String,
        /// Every location that was searched, in order.
        locations: Vec<PathBuf>,
    },

    /// The template engine rejected the template or the render context.
    #[error("Render error: {0}")]
    Render(String),

    /// An external converter process failed or could not be started.
    #[error("Converter '{tool}' failed: {reason}")]
    ConverterFailed {
        /// Name of the external tool.
        tool: String,
        /// Exit status or spawn failure description.
        reason: String,
    },

    /// The HTML artifact contains no tables to extract.
    #[error("No tables found in {}", .0.display())]
    NoTablesFound(PathBuf),

    /// Error writing the spreadsheet output.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

fn format_locations(locations: &[PathBuf]) -> String {
    locations
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Attach a file path to loader errors so diagnostics name the input.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            Error::Parse(msg) => Error::Parse(format!("{}: {}", path.display(), msg)),
            Error::Schema(msg) => Error::Schema(format!("{}: {}", path.display(), msg)),
            Error::MissingField(msg) => {
                Error::MissingField(format!("{} (in {})", msg, path.display()))
            }
            other => other,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Spreadsheet(err.to_string())
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(err: handlebars::RenderError) -> Self {
        Error::Render(err.to_string())
    }
}
