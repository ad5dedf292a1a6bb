//! Template resolution and rendering.
//!
//! Templates are plain text files resolved by name against an ordered list
//! of search locations (first match wins) and rendered with Handlebars.
//! Resolution happens up front so a missing template fails the run before
//! any domain data is loaded.

use crate::error::{Error, Result};
use crate::model::RenderContext;
use handlebars::Handlebars;
use std::fs;
use std::path::PathBuf;

/// A resolved template: its name, origin path and source text.
#[derive(Debug, Clone)]
pub struct Template {
    /// The name the template was requested under.
    pub name: String,

    /// The file the template was resolved from.
    pub path: PathBuf,

    /// Template source text.
    pub source: String,
}

/// Stateless wrapper around the Handlebars engine.
///
/// HTML escaping is disabled: the output is AsciiDoc markup, not HTML, and
/// domain values must land in it verbatim.
#[derive(Debug)]
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with escaping disabled.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Locate `name` across `locations`, in order; the first location that
    /// contains a file with that name wins.
    ///
    /// Fails with [`Error::TemplateNotFound`] carrying the attempted name
    /// and the full search list when no location matches.
    pub fn resolve(&self, locations: &[PathBuf], name: &str) -> Result<Template> {
        for location in locations {
            let candidate = location.join(name);
            if candidate.is_file() {
                log::debug!("resolved template '{}' at {}", name, candidate.display());
                let source = fs::read_to_string(&candidate)?;
                return Ok(Template {
                    name: name.to_string(),
                    path: candidate,
                    source,
                });
            }
        }
        Err(Error::TemplateNotFound {
            name: name.to_string(),
            locations: locations.to_vec(),
        })
    }

    /// Render `template` against `context`.
    ///
    /// Pure function of its inputs; persisting the result is the caller's
    /// job. Helper side effects, if a template registers any, are the
    /// template author's responsibility.
    pub fn render(&self, template: &Template, context: &RenderContext<'_>) -> Result<String> {
        self.registry
            .render_template(&template.source, context)
            .map_err(Into::into)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: resolve then render in one call.
pub fn render_named(
    locations: &[PathBuf],
    name: &str,
    context: &RenderContext<'_>,
) -> Result<String> {
    let engine = TemplateEngine::new();
    let template = engine.resolve(locations, name)?;
    engine.render(&template, context)
}
