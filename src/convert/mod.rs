//! Fan-out conversion of the rendered artifact into the final formats.
//!
//! The rendered AsciiDoc artifact is converted by four independent steps:
//! PDF and HTML via external `asciidoctor` tools, DOCX via `pandoc` over
//! the HTML output, and XLSX by extracting every HTML table into one
//! worksheet. Every step is attempted; failures are collected per step in
//! a [`ConversionReport`] instead of aborting the fan-out, so one broken
//! converter never destroys the outputs of the others.

mod process;
mod spreadsheet;
mod tables;

pub use spreadsheet::write_spreadsheet;
pub use tables::{concat_rows, extract_tables, Row, Table};

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Stem of the intermediate artifact and every derived output file.
pub const ARTIFACT_STEM: &str = "render";

/// Options for the fan-out conversion.
///
/// Tool names are overridable so tests can substitute stub commands.
/// Concurrent runs sharing one output directory are not supported: the
/// intermediate artifact name is fixed, so they would overwrite each other.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory the artifact and every output file land in.
    pub output_dir: PathBuf,

    /// Reference/style document passed to the DOCX converter.
    pub reference_doc: Option<PathBuf>,

    /// AsciiDoc to PDF tool.
    pub pdf_tool: String,

    /// AsciiDoc to HTML tool.
    pub html_tool: String,

    /// HTML to DOCX tool.
    pub docx_tool: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            reference_doc: None,
            pdf_tool: "asciidoctor-pdf".to_string(),
            html_tool: "asciidoctor".to_string(),
            docx_tool: "pandoc".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the DOCX reference/style document.
    pub fn with_reference_doc(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_doc = Some(path.into());
        self
    }

    /// Override the AsciiDoc to PDF tool.
    pub fn with_pdf_tool(mut self, tool: impl Into<String>) -> Self {
        self.pdf_tool = tool.into();
        self
    }

    /// Override the AsciiDoc to HTML tool.
    pub fn with_html_tool(mut self, tool: impl Into<String>) -> Self {
        self.html_tool = tool.into();
        self
    }

    /// Override the HTML to DOCX tool.
    pub fn with_docx_tool(mut self, tool: impl Into<String>) -> Self {
        self.docx_tool = tool.into();
        self
    }

    /// Path of the intermediate AsciiDoc artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.output_path("adoc")
    }

    /// Path of a derived output with the given extension.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", ARTIFACT_STEM, extension))
    }
}

/// One fan-out step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// AsciiDoc to PDF.
    Pdf,
    /// AsciiDoc to HTML.
    Html,
    /// HTML to DOCX.
    Docx,
    /// HTML tables to XLSX.
    Spreadsheet,
}

impl Step {
    /// Every step, in execution order. DOCX and XLSX consume the HTML
    /// output, so HTML runs before them.
    pub const ALL: [Step; 4] = [Step::Pdf, Step::Html, Step::Docx, Step::Spreadsheet];

    /// Human-readable step name for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Pdf => "PDF",
            Step::Html => "HTML",
            Step::Docx => "DOCX",
            Step::Spreadsheet => "XLSX",
        }
    }
}

/// Outcome of a single fan-out step.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The step produced its output file.
    Succeeded {
        /// The step that ran.
        step: Step,
        /// The produced file.
        output: PathBuf,
    },
    /// The step failed; prior outputs are untouched.
    Failed {
        /// The step that ran.
        step: Step,
        /// Why it failed.
        reason: String,
    },
}

impl StepOutcome {
    /// The step this outcome belongs to.
    pub fn step(&self) -> Step {
        match self {
            StepOutcome::Succeeded { step, .. } | StepOutcome::Failed { step, .. } => *step,
        }
    }

    /// Whether the step succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded { .. })
    }
}

/// Aggregate result of the fan-out: one outcome per step, in order.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// Per-step outcomes in execution order.
    pub outcomes: Vec<StepOutcome>,
}

impl ConversionReport {
    /// Number of steps that succeeded.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of steps that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every step failed.
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.succeeded() == 0
    }

    /// Paths of every produced output, in step order.
    pub fn outputs(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                StepOutcome::Succeeded { output, .. } => Some(output.as_path()),
                StepOutcome::Failed { .. } => None,
            })
            .collect()
    }

    fn record(&mut self, step: Step, result: Result<PathBuf>) {
        let outcome = match result {
            Ok(output) => {
                log::info!("{} step produced {}", step.label(), output.display());
                StepOutcome::Succeeded { step, output }
            }
            Err(err) => {
                log::warn!("{} step failed: {}", step.label(), err);
                StepOutcome::Failed {
                    step,
                    reason: err.to_string(),
                }
            }
        };
        self.outcomes.push(outcome);
    }
}

/// Run every fan-out step over the persisted artifact.
///
/// Each step re-reads its input from disk and is attempted regardless of
/// earlier failures. Output names derive from the artifact stem; re-running
/// overwrites prior outputs.
pub fn convert_all(options: &ConvertOptions) -> ConversionReport {
    let mut report = ConversionReport::default();
    for step in Step::ALL {
        report.record(step, run_step(step, options));
    }
    report
}

fn run_step(step: Step, options: &ConvertOptions) -> Result<PathBuf> {
    let artifact = options.artifact_path();
    match step {
        Step::Pdf => {
            let output = options.output_path("pdf");
            process::run_tool(
                &options.pdf_tool,
                &[artifact.as_os_str().to_os_string()],
                &options.output_dir,
            )?;
            Ok(output)
        }
        Step::Html => {
            let output = options.output_path("html");
            process::run_tool(
                &options.html_tool,
                &[artifact.as_os_str().to_os_string()],
                &options.output_dir,
            )?;
            Ok(output)
        }
        Step::Docx => {
            let html = options.output_path("html");
            let output = options.output_path("docx");
            let mut args: Vec<OsString> = Vec::new();
            if let Some(ref reference) = options.reference_doc {
                args.push("--reference-doc".into());
                args.push(reference.as_os_str().to_os_string());
            }
            args.push(html.as_os_str().to_os_string());
            args.push("-o".into());
            args.push(output.as_os_str().to_os_string());
            process::run_tool(&options.docx_tool, &args, &options.output_dir)?;
            Ok(output)
        }
        Step::Spreadsheet => {
            let html_path = options.output_path("html");
            let html = fs::read_to_string(&html_path)?;
            let tables = extract_tables(&html)?;
            if tables.is_empty() {
                return Err(Error::NoTablesFound(html_path));
            }
            let rows = concat_rows(&tables);
            let output = options.output_path("xlsx");
            write_spreadsheet(&rows, &output)?;
            Ok(output)
        }
    }
}
