//! # docsmith
//!
//! Report composition library: binds a project and a document definition to
//! a text template and fans the rendered AsciiDoc artifact out to PDF,
//! HTML, DOCX and XLSX.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsmith::{pipeline, ConvertOptions};
//! use std::path::PathBuf;
//!
//! fn main() -> docsmith::Result<()> {
//!     let options = ConvertOptions::new().with_output_dir(".");
//!
//!     let report = pipeline::configure_template(&[PathBuf::from("templates")], "report.adoc")?
//!         .load_domain("project.yaml".as_ref(), "document.yaml".as_ref())?
//!         .render(&options)?
//!         .convert(&options)
//!         .report;
//!
//!     println!("{} of {} steps succeeded", report.succeeded(), report.outcomes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Declarative inputs**: project and document definitions in YAML,
//!   with loader round-trip (`load(dump(x)) == x`)
//! - **Ordered template search paths**: first match wins, missing templates
//!   fail fast with the full search list
//! - **Fault-tolerant fan-out**: every converter step is attempted; the
//!   aggregate [`ConversionReport`] says which succeeded and why the rest
//!   failed
//! - **Sample generation**: bootstrap a new project without input files via
//!   [`Project::sample`] and [`Document::sample`]

pub mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod template;

// Re-export commonly used types
pub use convert::{
    convert_all, ConversionReport, ConvertOptions, Step, StepOutcome, ARTIFACT_STEM,
};
pub use error::{Error, Result};
pub use loader::Definition;
pub use model::{Author, Document, Project, RenderContext, Section};
pub use pipeline::{configure_template, Converted, DomainConfigured, Rendered, TemplateConfigured};
pub use template::{Template, TemplateEngine};

use std::path::{Path, PathBuf};

/// Run the full `render` action: resolve, load, render, convert.
///
/// Convenience wrapper over the [`pipeline`] transitions.
pub fn run_render(
    locations: &[PathBuf],
    template: &str,
    project_path: &Path,
    document_path: &Path,
    options: &ConvertOptions,
) -> Result<Converted> {
    Ok(configure_template(locations, template)?
        .load_domain(project_path, document_path)?
        .render(options)?
        .convert(options))
}

/// Run the full `sample` action with synthesized domain data.
///
/// Returns the preview text alongside the finished run so callers can print
/// the sample instances for inspection.
pub fn run_sample(
    locations: &[PathBuf],
    template: &str,
    options: &ConvertOptions,
) -> Result<(String, Converted)> {
    let domain = configure_template(locations, template)?.sample_domain();
    let preview = domain.preview()?;
    let converted = domain.render(options)?.convert(options);
    Ok((preview, converted))
}
