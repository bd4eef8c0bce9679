//! Plain-text rendering of cost tables.
use std::fmt::Display;

use ed_core::CostTable;

/// Render `table` with the symbols of `a` labelling the rows and those of `b` the columns.
///
/// The first row and column belong to the empty prefix and get a blank label.
pub fn format_table<T: Display>(a: &[T], b: &[T], table: &CostTable) -> String {
    debug_assert_eq!(table.rows(), a.len() + 1);
    debug_assert_eq!(table.cols(), b.len() + 1);

    let label = |s: Option<&T>| s.map_or(String::new(), |s| s.to_string());
    let col_labels: Vec<String> = std::iter::once(None)
        .chain(b.iter().map(Some))
        .map(label)
        .collect();
    let row_labels: Vec<String> = std::iter::once(None)
        .chain(a.iter().map(Some))
        .map(label)
        .collect();

    let label_width = row_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = table
        .iter_rows()
        .flatten()
        .map(|c| c.to_string().len())
        .chain(col_labels.iter().map(|l| l.chars().count()))
        .max()
        .unwrap_or(1);

    let mut out = format!("{:label_width$}", "");
    for l in &col_labels {
        out += &format!(" {l:>width$}");
    }
    out.push('\n');
    for (l, row) in row_labels.iter().zip(table.iter_rows()) {
        out += &format!("{l:>label_width$}");
        for c in row {
            out += &format!(" {c:>width$}");
        }
        out.push('\n');
    }
    out
}
