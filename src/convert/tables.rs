//! HTML table extraction for the spreadsheet step.
//!
//! Walks the DOM of the rendered HTML artifact and collects every `<table>`
//! element into a row/cell grid, in document order. Cell text is the
//! concatenated text content with whitespace collapsed.

use crate::error::{Error, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// One table row: the text of each cell, left to right.
pub type Row = Vec<String>;

/// A single extracted HTML table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Rows in source order, header rows included.
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of rows, header rows included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Extract every `<table>` from an HTML document, in source order.
///
/// Rows of a nested table are flattened into the enclosing table, matching
/// how a flat row concatenation treats them. Returns an empty vector when
/// the document has no tables; the caller decides whether that is an error.
pub fn extract_tables(html: &str) -> Result<Vec<Table>> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::Parse(e.to_string()))?;

    let mut tables = Vec::new();
    collect_tables(&dom.document, &mut tables);
    Ok(tables)
}

/// Concatenate the rows of all tables in source order into one grid.
pub fn concat_rows(tables: &[Table]) -> Vec<Row> {
    tables.iter().flat_map(|t| t.rows.iter().cloned()).collect()
}

fn collect_tables(handle: &Handle, tables: &mut Vec<Table>) {
    if element_name(handle) == Some("table") {
        let mut table = Table::default();
        collect_rows(handle, &mut table);
        tables.push(table);
        return;
    }
    for child in handle.children.borrow().iter() {
        collect_tables(child, tables);
    }
}

fn collect_rows(handle: &Handle, table: &mut Table) {
    if element_name(handle) == Some("tr") {
        let mut row = Row::new();
        collect_cells(handle, &mut row);
        table.rows.push(row);
        return;
    }
    for child in handle.children.borrow().iter() {
        collect_rows(child, table);
    }
}

fn collect_cells(handle: &Handle, row: &mut Row) {
    match element_name(handle) {
        Some("td") | Some("th") => {
            row.push(text_content(handle));
            return;
        }
        _ => {}
    }
    for child in handle.children.borrow().iter() {
        collect_cells(child, row);
    }
}

fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Concatenated text of a node's descendants with whitespace collapsed.
fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    push_text(handle, &mut text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(handle: &Handle, text: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        text.push_str(&contents.borrow());
        text.push(' ');
    }
    for child in handle.children.borrow().iter() {
        push_text(child, text);
    }
}
