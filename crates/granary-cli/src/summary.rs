//! DataFrame summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use polars::prelude::DataFrame;

/// Render a per-column summary of a DataFrame.
pub fn render_summary(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Dtype"),
        header_cell("Nulls"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for col in df.get_columns() {
        table.add_row(vec![
            Cell::new(col.name().as_str()),
            Cell::new(col.dtype().to_string()),
            Cell::new(col.null_count()),
        ]);
    }
    table.add_row(vec![
        Cell::new("ROWS")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(df.height()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Print the summary table to stdout.
pub fn print_summary(df: &DataFrame) {
    println!("{}", render_summary(df));
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_render_summary_lists_columns_and_rows() {
        let frame = df!(
            "id" => [1i64, 2, 3],
            "name" => ["alpha", "beta", "gamma"],
        )
        .unwrap();

        let rendered = render_summary(&frame).to_string();
        assert!(rendered.contains("id"));
        assert!(rendered.contains("name"));
        assert!(rendered.contains("ROWS"));
        assert!(rendered.contains('3'));
    }

    #[test]
    fn test_render_summary_empty_frame() {
        let frame = DataFrame::empty();
        let rendered = render_summary(&frame).to_string();
        assert!(rendered.contains("ROWS"));
        assert!(rendered.contains('0'));
    }
}
