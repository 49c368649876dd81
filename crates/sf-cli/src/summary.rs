use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sf_core::{CardStats, ReviewDate, SessionSummary};

use crate::types::CheckReport;

/// Text printed by `sf check`.
pub fn render_check(report: &CheckReport) -> String {
    let mut out = format!("{}: {} cards", report.path.display(), report.cards);
    if report.errors.is_empty() {
        return out;
    }
    let _ = write!(out, "\n{} errors:", report.errors.len());
    for block in &report.errors {
        let _ = write!(out, "\n---\n{block}");
    }
    out
}

pub fn due_table(today: ReviewDate, due: &[CardStats]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Card"),
        header_cell("Question"),
        header_cell("Due"),
        header_cell("Interval"),
    ]);
    apply_table_style(&mut table);
    for stats in due {
        let due_cell = if stats.due() == today {
            Cell::new(stats.due()).fg(Color::Yellow)
        } else {
            Cell::new(stats.due())
        };
        table.add_row(vec![
            Cell::new(stats.card_id().short()).add_attribute(Attribute::Dim),
            Cell::new(stats.card().front()),
            due_cell,
            Cell::new(format!("{}d", stats.interval())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn print_due(today: ReviewDate, due: &[CardStats]) {
    println!("Due as of {today}: {} cards", due.len());
    if !due.is_empty() {
        println!("{}", due_table(today, due));
    }
}

pub fn print_session(summary: &SessionSummary) {
    let reviewed = summary.correct + summary.incorrect;
    println!(
        "Reviewed {reviewed} cards: {} right, {} wrong",
        summary.correct, summary.incorrect
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
