//! The composition pipeline, as a typed state machine.
//!
//! A run moves through `TemplateConfigured → DomainConfigured → Rendered →
//! Converted`. Each transition consumes the previous state and returns the
//! next, so stages cannot be skipped or repeated and each transition is
//! independently testable. The `sample` and `render` actions differ only in
//! how `DomainConfigured` is reached: synthesized domain data versus data
//! loaded from definition files. Both converge on the same render and
//! fan-out stages.

use crate::convert::{convert_all, ConversionReport, ConvertOptions};
use crate::error::Result;
use crate::loader;
use crate::model::{Document, Project, RenderContext};
use crate::template::{Template, TemplateEngine};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the named template against the ordered search locations.
///
/// This is the first transition; it fails fast with
/// [`crate::Error::TemplateNotFound`] before any domain data is touched.
pub fn configure_template(locations: &[PathBuf], name: &str) -> Result<TemplateConfigured> {
    let engine = TemplateEngine::new();
    let template = engine.resolve(locations, name)?;
    Ok(TemplateConfigured { engine, template })
}

/// A run with a resolved template, awaiting domain data.
#[derive(Debug)]
pub struct TemplateConfigured {
    engine: TemplateEngine,
    template: Template,
}

impl TemplateConfigured {
    /// The resolved template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Load the project and document from definition files (`render`
    /// action). Loader errors are fatal to the run.
    pub fn load_domain(
        self,
        project_path: &Path,
        document_path: &Path,
    ) -> Result<DomainConfigured> {
        let project = loader::load_project_file(project_path)?;
        let document = loader::load_document_file(document_path)?;
        log::info!("loaded {} and {}", project_path.display(), document_path.display());
        Ok(self.configure_domain(project, document))
    }

    /// Synthesize the project and document (`sample` action).
    pub fn sample_domain(self) -> DomainConfigured {
        self.configure_domain(Project::sample(), Document::sample())
    }

    // Both actions converge here; this is the single place
    // `configure_from_project` is called.
    fn configure_domain(self, project: Project, mut document: Document) -> DomainConfigured {
        document.configure_from_project(&project);
        DomainConfigured {
            engine: self.engine,
            template: self.template,
            project,
            document,
        }
    }
}

/// A run with both domain objects constructed and associated.
#[derive(Debug)]
pub struct DomainConfigured {
    engine: TemplateEngine,
    template: Template,
    project: Project,
    document: Document,
}

impl DomainConfigured {
    /// The configured project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The configured document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Human-readable preview of both instances, including the document's
    /// serialized YAML form. The `sample` action prints this for
    /// inspection.
    pub fn preview(&self) -> Result<String> {
        let yaml = loader::to_yaml(&self.document)?;
        Ok(format!(
            "{}\n{}\n - as yaml - \n{}",
            self.project, self.document, yaml
        ))
    }

    /// Render the template against the composed context and persist the
    /// artifact to the intermediate location derived from `options`.
    pub fn render(self, options: &ConvertOptions) -> Result<Rendered> {
        let context = RenderContext::new(&self.document, &self.project);
        let artifact = self.engine.render(&self.template, &context)?;

        fs::create_dir_all(&options.output_dir)?;
        let path = options.artifact_path();
        fs::write(&path, &artifact)?;
        log::info!("rendered '{}' to {}", self.template.name, path.display());

        Ok(Rendered {
            artifact_path: path,
        })
    }
}

/// A run whose artifact has been rendered and persisted.
pub struct Rendered {
    artifact_path: PathBuf,
}

impl Rendered {
    /// Path of the persisted AsciiDoc artifact.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Run the fan-out conversion. `options` must be the same value the
    /// artifact was rendered with, so the converters find it.
    ///
    /// Never fails as a whole: per-step failures are collected in the
    /// report.
    pub fn convert(self, options: &ConvertOptions) -> Converted {
        let report = convert_all(options);
        Converted {
            artifact_path: self.artifact_path,
            report,
        }
    }
}

/// A finished run.
#[derive(Debug)]
pub struct Converted {
    /// Path of the intermediate artifact.
    pub artifact_path: PathBuf,

    /// Per-step conversion outcomes.
    pub report: ConversionReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn template_dir(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("report.adoc"), content).unwrap();
        dir
    }

    #[test]
    fn test_configure_template_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let err = configure_template(&[dir.path().to_path_buf()], "missing.adoc").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_sample_domain_is_configured() {
        let dir = template_dir("{{ doc.title }}");
        let state = configure_template(&[dir.path().to_path_buf()], "report.adoc")
            .unwrap()
            .sample_domain();
        assert_eq!(
            state.document().project_name.as_deref(),
            Some(state.project().name.as_str())
        );
    }

    #[test]
    fn test_preview_includes_yaml_form() {
        let dir = template_dir("{{ doc.title }}");
        let state = configure_template(&[dir.path().to_path_buf()], "report.adoc")
            .unwrap()
            .sample_domain();
        let preview = state.preview().unwrap();
        assert!(preview.contains("Security Assessment Report"));
        assert!(preview.contains(" - as yaml - "));
        assert!(preview.contains("title: Security Assessment Report"));
    }

    #[test]
    fn test_load_domain_reports_offending_file() {
        let templates = template_dir("{{ doc.title }}");
        let defs = tempfile::tempdir().unwrap();
        let project_path = defs.path().join("project.yaml");
        let document_path = defs.path().join("document.yaml");
        fs::write(&project_path, "name: Acme\nclient: Acme Corp\n").unwrap();
        fs::write(&document_path, "not: [valid\n").unwrap();

        let err = configure_template(&[templates.path().to_path_buf()], "report.adoc")
            .unwrap()
            .load_domain(&project_path, &document_path)
            .unwrap_err();
        assert!(err.to_string().contains("document.yaml"));
    }

    #[test]
    fn test_render_persists_artifact() {
        let templates = template_dir("{{ project.name }}: {{ doc.title }}");
        let out = tempfile::tempdir().unwrap();
        let options = ConvertOptions::new().with_output_dir(out.path());

        let rendered = configure_template(&[templates.path().to_path_buf()], "report.adoc")
            .unwrap()
            .sample_domain()
            .render(&options)
            .unwrap();

        let content = fs::read_to_string(rendered.artifact_path()).unwrap();
        assert_eq!(
            content,
            "Acme Webshop Assessment: Security Assessment Report"
        );
    }

    #[test]
    fn test_render_then_load_scenario() {
        let templates = template_dir("{{ project.name }}: {{ doc.title }}");
        let defs = tempfile::tempdir().unwrap();
        let project_path = defs.path().join("project.yaml");
        let document_path = defs.path().join("document.yaml");
        fs::write(&project_path, "name: Acme\nclient: Acme Corp\n").unwrap();
        fs::write(&document_path, "title: Report\n").unwrap();

        let out = tempfile::tempdir().unwrap();
        let options = ConvertOptions::new().with_output_dir(out.path());

        let rendered = configure_template(&[templates.path().to_path_buf()], "report.adoc")
            .unwrap()
            .load_domain(&project_path, &document_path)
            .unwrap()
            .render(&options)
            .unwrap();

        let content = fs::read_to_string(rendered.artifact_path()).unwrap();
        assert_eq!(content, "Acme: Report");
    }
}
