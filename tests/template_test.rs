//! Integration tests for template resolution and rendering.

use docsmith::{Document, Error, Project, RenderContext, TemplateEngine};
use std::fs;
use std::path::PathBuf;

fn dir_with(name: &str, content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(name), content).unwrap();
    dir
}

#[test]
fn resolution_prefers_earlier_locations() {
    let a = dir_with("T", "content of A");
    let b = dir_with("T", "content of B");
    let locations = vec![a.path().to_path_buf(), b.path().to_path_buf()];

    let engine = TemplateEngine::new();
    let template = engine.resolve(&locations, "T").unwrap();
    assert_eq!(template.source, "content of A");
}

#[test]
fn missing_template_error_names_template_and_locations() {
    let a = tempfile::tempdir().unwrap();
    let engine = TemplateEngine::new();
    let err = engine
        .resolve(&[a.path().to_path_buf()], "T")
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains('T'));
    assert!(msg.contains(&a.path().display().to_string()));
    assert!(matches!(err, Error::TemplateNotFound { .. }));
}

#[test]
fn resolution_ignores_directories_with_matching_names() {
    let a = tempfile::tempdir().unwrap();
    fs::create_dir(a.path().join("T")).unwrap();
    let b = dir_with("T", "real template");
    let locations = vec![a.path().to_path_buf(), b.path().to_path_buf()];

    let engine = TemplateEngine::new();
    let template = engine.resolve(&locations, "T").unwrap();
    assert_eq!(template.source, "real template");
}

#[test]
fn templates_can_iterate_sections() {
    let dir = dir_with(
        "sections.adoc",
        "= {{ doc.title }}\n{{#each doc.sections}}== {{ heading }}\n{{ body }}\n{{/each}}",
    );

    let project = Project::sample();
    let mut doc = Document::sample();
    doc.configure_from_project(&project);

    let engine = TemplateEngine::new();
    let template = engine
        .resolve(&[dir.path().to_path_buf()], "sections.adoc")
        .unwrap();
    let out = engine
        .render(&template, &RenderContext::new(&doc, &project))
        .unwrap();

    assert!(out.contains("= Security Assessment Report"));
    assert!(out.contains("== Executive Summary"));
    assert!(out.contains("== Scope"));
}

#[test]
fn empty_location_list_reports_not_found() {
    let engine = TemplateEngine::new();
    let err = engine.resolve(&Vec::<PathBuf>::new(), "T").unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { .. }));
}
