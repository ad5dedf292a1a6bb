//! The render context passed to the template engine.

use super::{Document, Project};
use serde::Serialize;

/// Ephemeral mapping of the symbolic names `doc` and `project` to the
/// domain instances a template is rendered against.
///
/// Built fresh for each render call and never persisted. Both halves are
/// borrowed, so the project stays the single source of truth for fields the
/// document derives defaults from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderContext<'a> {
    /// The document, exposed to templates as `doc`.
    pub doc: &'a Document,

    /// The project, exposed to templates as `project`.
    pub project: &'a Project,
}

impl<'a> RenderContext<'a> {
    /// Build a context from a configured document and its project.
    pub fn new(doc: &'a Document, project: &'a Project) -> Self {
        Self { doc, project }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_borrows_identity() {
        let project = Project::sample();
        let mut doc = Document::sample();
        doc.configure_from_project(&project);

        let context = RenderContext::new(&doc, &project);
        assert!(std::ptr::eq(context.project, &project));
        assert!(std::ptr::eq(context.doc, &doc));
    }

    #[test]
    fn test_context_serializes_symbolic_names() {
        let project = Project::sample();
        let mut doc = Document::sample();
        doc.configure_from_project(&project);

        let value = serde_json::to_value(RenderContext::new(&doc, &project)).unwrap();
        assert_eq!(value["project"]["name"], "Acme Webshop Assessment");
        assert_eq!(value["doc"]["title"], "Security Assessment Report");
    }
}
