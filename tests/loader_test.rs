//! Integration tests for definition loading and dumping.

use docsmith::loader;
use docsmith::{Document, Error, Project};

#[test]
fn sample_project_round_trips() {
    let project = Project::sample();
    let yaml = loader::to_yaml(&project).unwrap();
    let loaded = loader::load_project(yaml.as_bytes()).unwrap();
    assert_eq!(loaded, project);
}

#[test]
fn sample_document_round_trips() {
    let doc = Document::sample();
    let yaml = loader::to_yaml(&doc).unwrap();
    let loaded = loader::load_document(yaml.as_bytes()).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn configured_document_round_trips() {
    // The derived association and defaults survive serialization too.
    let project = Project::sample();
    let mut doc = Document::sample();
    doc.configure_from_project(&project);

    let yaml = loader::to_yaml(&doc).unwrap();
    let loaded = loader::load_document(yaml.as_bytes()).unwrap();
    assert_eq!(loaded, doc);
    assert_eq!(loaded.project_name.as_deref(), Some(project.name.as_str()));
}

#[test]
fn minimal_definitions_load() {
    let project = loader::load_project("name: Acme\nclient: Acme Corp\n".as_bytes()).unwrap();
    assert_eq!(project.name, "Acme");

    let doc = loader::load_document("title: Report\n".as_bytes()).unwrap();
    assert_eq!(doc.title, "Report");
    assert!(doc.sections.is_empty());
}

#[test]
fn parse_and_schema_errors_are_distinct() {
    let parse = loader::load_project("name: [broken\n".as_bytes()).unwrap_err();
    assert!(matches!(parse, Error::Parse(_)));

    let schema = loader::load_project("name: Acme\n".as_bytes()).unwrap_err();
    assert!(matches!(schema, Error::Schema(_)));

    let mistyped = loader::load_project("name: Acme\nclient: [a, b]\n".as_bytes()).unwrap_err();
    assert!(matches!(mistyped, Error::Schema(_)));
}

#[test]
fn full_definition_with_sections_and_authors() {
    let project_yaml = "\
name: Globex Review
client: Globex
reference: GLX-7
start_date: 2026-01-12
end_date: 2026-02-06
authors:
  - name: Kim Lee
    email: kim@example.com
  - name: Ana Duarte
    role: Reviewer
";
    let project = loader::load_project(project_yaml.as_bytes()).unwrap();
    assert_eq!(project.authors.len(), 2);
    assert_eq!(project.authors[1].role.as_deref(), Some("Reviewer"));

    let document_yaml = "\
title: Globex Findings
version: '0.3'
sections:
  - heading: Summary
    body: All clear.
  - heading: Details
    body: See appendix.
";
    let doc = loader::load_document(document_yaml.as_bytes()).unwrap();
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].heading, "Summary");
}
