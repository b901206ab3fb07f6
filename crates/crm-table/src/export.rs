//! CSV export of the current table view.

use serde::Serialize;
use tracing::debug;

use crate::cell::CellValue;
use crate::column::Column;
use crate::row::TableRow;

pub const CSV_MIME_TYPE: &str = "text/csv";

/// A ready-to-download CSV document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Serialize `rows` with one column per definition, headers first.
///
/// Cells hold raw values, not rendered ones. Text containing a comma is
/// wrapped in double quotes; quotes and newlines inside values are written
/// as-is.
pub fn export_csv<R: TableRow>(rows: &[&R], columns: &[Column<R>], base_name: &str) -> CsvExport {
    let header = columns
        .iter()
        .map(|c| c.header.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let body = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| csv_field(&row.cell(&c.key)))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");

    debug!(rows = rows.len(), columns = columns.len(), "CSV export built");

    CsvExport {
        filename: format!("{base_name}.csv"),
        mime_type: CSV_MIME_TYPE,
        content: format!("{header}\n{body}"),
    }
}

fn csv_field(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) if s.contains(',') => format!("\"{s}\""),
        other => other.display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Company {
        name: &'static str,
        employees: Option<i32>,
        notes: Option<&'static str>,
    }

    impl TableRow for Company {
        fn row_id(&self) -> String {
            self.name.to_string()
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.into(),
                "employees" => self.employees.into(),
                "notes" => self.notes.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn columns() -> Vec<Column<Company>> {
        vec![
            Column::new("name", "Name").render(|v, _| v.display().to_uppercase()),
            Column::new("employees", "Employees"),
            Column::new("notes", "Notes"),
        ]
    }

    #[test]
    fn test_export_quotes_commas_and_keeps_raw_values() {
        let rows = [
            Company {
                name: "Acme, Inc.",
                employees: Some(120),
                notes: None,
            },
            Company {
                name: "Globex",
                employees: None,
                notes: Some("says \"hi\""),
            },
        ];
        let refs: Vec<&Company> = rows.iter().collect();
        let csv = export_csv(&refs, &columns(), "companies");

        assert_eq!(csv.filename, "companies.csv");
        assert_eq!(csv.mime_type, "text/csv");
        assert_eq!(
            csv.content,
            "Name,Employees,Notes\n\"Acme, Inc.\",120,\nGlobex,,says \"hi\""
        );
    }

    #[test]
    fn test_every_line_has_header_width_without_commas() {
        let rows = [Company {
            name: "Initech",
            employees: Some(5),
            notes: Some("n/a"),
        }];
        let refs: Vec<&Company> = rows.iter().collect();
        let csv = export_csv(&refs, &columns(), "x");
        for line in csv.content.lines() {
            assert_eq!(line.split(',').count(), 3);
        }
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = export_csv::<Company>(&[], &columns(), "empty");
        assert_eq!(csv.content, "Name,Employees,Notes\n");
    }
}
