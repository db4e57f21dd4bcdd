use std::cmp::Ordering;

use console::{measure_text_width, pad_str, style, Alignment, Style};

use fiscus_core::{Month, StyleKey, TableTally, TransactionRow, YearParity};

use crate::args::{SortColumn, SortDir};

const HEADERS: [&str; 5] = ["date", "amount", "type", "reference", "statement"];
const ALIGNMENTS: [Alignment; 5] = [
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Left,
    Alignment::Left,
];

/// Renders one finished table and its summary line to stdout.
pub fn print_table(name: &str, seen: u64, tally: &TableTally, sort: SortColumn, dir: SortDir) {
    let rows = sorted_rows(tally.rows(), sort, dir);
    for line in table_lines(name, &rows) {
        println!("{line}");
    }
    println!("{}", summary_line(seen, tally));
}

/// The boxed table as unprinted lines: a bold underlined name, a header
/// row, then one line per transaction styled by its month and year
/// parity.
pub fn table_lines(name: &str, rows: &[&TransactionRow]) -> Vec<String> {
    let widths = column_widths(rows);
    let mut lines = vec![
        style(name).bold().underlined().to_string(),
        rule(&widths, '┌', '┬', '┐'),
        header_line(&widths),
        rule(&widths, '├', '┼', '┤'),
    ];
    for row in rows {
        lines.push(row_line(row, &widths));
    }
    lines.push(rule(&widths, '└', '┴', '┘'));
    lines
}

pub fn summary_line(seen: u64, tally: &TableTally) -> String {
    format!(
        "Out of the {} transactions that were parsed, there were {} transactions that amounted to a total of {} GBP.",
        style(seen).bold().underlined().blue(),
        style(tally.total_rows()).bold().underlined().green(),
        style(tally.rounded_total()).bold().underlined().red(),
    )
}

pub fn sorted_rows(
    rows: &[TransactionRow],
    column: SortColumn,
    dir: SortDir,
) -> Vec<&TransactionRow> {
    let mut sorted: Vec<&TransactionRow> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
    sorted
}

// Unparsed dates and amounts sort before everything else.
fn compare(a: &TransactionRow, b: &TransactionRow, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Date => a.date.day().cmp(&b.date.day()),
        SortColumn::Amount => a.amount.value().cmp(&b.amount.value()),
        SortColumn::Type => a.kind.cmp(&b.kind),
        SortColumn::Reference => a.reference.cmp(&b.reference),
        SortColumn::Statement => a.statement.cmp(&b.statement),
    }
}

fn cells(row: &TransactionRow) -> [&str; 5] {
    [
        row.date.raw(),
        row.amount.raw(),
        &row.kind,
        &row.reference,
        &row.statement,
    ]
}

fn column_widths(rows: &[&TransactionRow]) -> [usize; 5] {
    let mut widths = HEADERS.map(measure_text_width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(measure_text_width(cell));
        }
    }
    widths
}

fn rule(widths: &[usize; 5], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push(right);
    line
}

fn header_line(widths: &[usize; 5]) -> String {
    let mut line = String::from("│");
    for ((header, width), alignment) in HEADERS.into_iter().zip(widths).zip(ALIGNMENTS) {
        let padded = pad_str(header, *width, alignment, None);
        line.push(' ');
        line.push_str(&style(padded.as_ref()).bold().to_string());
        line.push_str(" │");
    }
    line
}

fn row_line(row: &TransactionRow, widths: &[usize; 5]) -> String {
    let row_style = StyleKey::of(&row.date)
        .map(month_style)
        .unwrap_or_else(Style::new);
    let mut line = String::from("│");
    for ((cell, width), alignment) in cells(row).into_iter().zip(widths).zip(ALIGNMENTS) {
        let padded = pad_str(cell, *width, alignment, None);
        line.push(' ');
        line.push_str(&row_style.apply_to(padded.as_ref()).to_string());
        line.push_str(" │");
    }
    line
}

fn month_style(key: StyleKey) -> Style {
    let base = Style::new().color256(month_color(key.month));
    match key.parity {
        YearParity::Even => base,
        YearParity::Odd => base.bold().italic().underlined(),
    }
}

// Nearest xterm-256 entries to the wallet month palette.
fn month_color(month: Month) -> u8 {
    match month {
        Month::Jan => 247,
        Month::Feb => 68,
        Month::Mar => 19,
        Month::Apr => 218,
        Month::May => 149,
        Month::Jun => 35,
        Month::Jul => 72,
        Month::Aug => 186,
        Month::Sep => 209,
        Month::Oct => 130,
        Month::Nov => 68,
        Month::Dec => 19,
    }
}
