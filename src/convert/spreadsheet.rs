//! XLSX output for extracted table rows.

use crate::convert::Row;
use crate::error::Result;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write rows to a single-worksheet XLSX file, one spreadsheet row per
/// extracted table row, preserving order. Overwrites any existing file.
pub fn write_spreadsheet(rows: &[Row], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, cell.as_str())?;
        }
    }

    workbook.save(path)?;
    log::debug!("wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let rows = vec![
            vec!["Name".to_string(), "Severity".to_string()],
            vec!["XSS".to_string(), "High".to_string()],
        ];
        write_spreadsheet(&rows, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_rows_still_produce_a_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_spreadsheet(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        std::fs::write(&path, "stale").unwrap();
        write_spreadsheet(&[vec!["a".to_string()]], &path).unwrap();
        let content = std::fs::read(&path).unwrap();
        assert_ne!(content, b"stale");
    }
}
