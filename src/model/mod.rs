//! Domain model: the project and document definitions that feed a render.

mod context;
mod document;
mod project;

pub use context::RenderContext;
pub use document::{Document, Section};
pub use project::{Author, Project};
