//! Summary tables printed after an import.

use catalog_index::ImportReport;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Overall counters of one run.
pub fn summary_table(source: &str, report: &ImportReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Feed"), header_cell(source)]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Records parsed"),
        Cell::new(report.records_parsed),
    ]);
    table.add_row(vec![
        Cell::new("Documents indexed")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.records_indexed).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Records discarded"),
        count_cell(report.records_discarded(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Fields dropped"),
        count_cell(report.fields_dropped.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Sink errors"),
        count_cell(report.sink_errors.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        dim_cell(format!("{} ms", report.elapsed.as_millis())),
    ]);
    table
}

/// Discards grouped by reason, dropped fields and sink failures.
/// `None` when the run was clean.
pub fn issue_table(report: &ImportReport) -> Option<Table> {
    if report.discarded.is_empty()
        && report.fields_dropped.is_empty()
        && report.sink_errors.is_empty()
    {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Detail"),
        header_cell("Count"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for (reason, count) in report.discard_counts() {
        table.add_row(vec![
            Cell::new("discarded").fg(Color::Yellow),
            Cell::new(reason),
            Cell::new(count),
        ]);
    }
    for issue in &report.fields_dropped {
        table.add_row(vec![
            Cell::new("field dropped").fg(Color::Yellow),
            Cell::new(issue.to_string()),
            dim_cell(1),
        ]);
    }
    for failure in &report.sink_errors {
        table.add_row(vec![
            Cell::new(format!("{} failed", failure.stage))
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(&failure.message),
            dim_cell(1),
        ]);
    }
    Some(table)
}

/// Style for plain listings such as `catalog fields`.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
