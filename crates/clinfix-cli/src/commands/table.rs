//! Terminal tables for batch summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clinfix::BatchResult;

/// Build the per-file summary table with a totals row.
pub fn summary_table(batch: &BatchResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Domain"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Missing"),
        header_cell("Invalid"),
        header_cell("OOR"),
        header_cell("Structural"),
        header_cell("Queries"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 2..9 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_rows = 0;
    let mut total_queries = 0;
    for (file, row) in batch.files.iter().zip(&batch.summary) {
        total_rows += row.rows;
        total_queries += row.queries_generated;
        table.add_row(vec![
            Cell::new(&row.file),
            match file.domain {
                Some(domain) => Cell::new(domain.code()),
                None => dim_cell("Unknown"),
            },
            Cell::new(row.rows),
            Cell::new(row.columns),
            count_cell(row.missing_issues, Color::Yellow),
            count_cell(row.invalid_issues, Color::Yellow),
            count_cell(row.oor_issues, Color::Red),
            count_cell(row.structural_issues, Color::Red),
            count_cell(row.queries_generated, Color::Magenta),
        ]);
    }

    if batch.files.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan).add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(total_rows).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            count_cell(total_queries, Color::Magenta).add_attribute(Attribute::Bold),
        ]);
    }

    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinfix::{Clinfix, Dataset};

    #[test]
    fn test_summary_table_rows() {
        let batch = Clinfix::new().process(vec![
            Dataset::from_text("AE.csv", &["USUBJID"], &[vec!["S1"]]),
            Dataset::from_text("notes.csv", &["X"], &[vec!["1"]]),
        ]);
        let rendered = summary_table(&batch).to_string();

        assert!(rendered.contains("AE.csv"));
        assert!(rendered.contains("Unknown"));
        assert!(rendered.contains("TOTAL"));
    }
}
