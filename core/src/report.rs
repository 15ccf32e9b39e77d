//! Pipe-delimited table rendering for the metric reports, and parsing them back.
//!
//! Layout (left and right borders, no top or bottom border):
//!
//! ```text
//! | Token | doc1    | doc2    |
//! |-------|---------|---------|
//! | x     | 0.50000 | 1.00000 |
//! ```
//!
//! A `|` inside a token or header is written as `\|`.

use crate::error::{Error, Result};
use crate::index::MetricTable;
use std::io::{self, Write};

pub const TOKEN_HEADER: &str = "Token";

/// Fixed-point with five decimals. Negative zero prints as zero.
pub fn format_value(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.5}")
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Write `table` with rows sorted by token. Header is `Token` followed by the table headers.
pub fn render_table<W: Write>(w: &mut W, table: &MetricTable) -> io::Result<()> {
    let sorted = table.sorted_tokens();
    let tokens: Vec<String> = sorted.iter().map(|t| escape(t)).collect();
    let headers: Vec<String> = table.headers.iter().map(|h| escape(h)).collect();
    let cells: Vec<Vec<String>> = sorted
        .iter()
        .map(|t| table.rows[*t].iter().map(|v| format_value(*v)).collect())
        .collect();

    let mut widths = Vec::with_capacity(headers.len() + 1);
    widths.push(
        tokens.iter().map(|t| t.chars().count()).chain([TOKEN_HEADER.len()]).max().unwrap_or(0),
    );
    for (col, header) in headers.iter().enumerate() {
        let cell_width = cells.iter().filter_map(|row| row.get(col)).map(String::len).max().unwrap_or(0);
        widths.push(header.chars().count().max(cell_width));
    }

    let mut line = String::new();
    for (header, width) in [TOKEN_HEADER].into_iter().chain(headers.iter().map(String::as_str)).zip(&widths) {
        line.push_str(&format!("| {:<width$} ", header, width = *width));
    }
    writeln!(w, "{line}|")?;

    line.clear();
    for width in &widths {
        line.push('|');
        line.push_str(&"-".repeat(width + 2));
    }
    writeln!(w, "{line}|")?;

    for (token, row) in tokens.iter().zip(&cells) {
        line.clear();
        line.push_str(&format!("| {:<width$} ", token, width = widths[0]));
        for (cell, width) in row.iter().zip(&widths[1..]) {
            line.push_str(&format!("| {:>width$} ", cell, width = *width));
        }
        writeln!(w, "{line}|")?;
    }
    Ok(())
}

/// Cells between the border pipes, with `\|` unescaped.
fn split_cells(line: &str) -> Vec<String> {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                cell.push('|');
            }
            '|' => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.starts_with('|') && line.contains('-') && line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

/// Parse the last table block in `text`. Earlier blocks (from append mode) are ignored.
pub fn parse_table(text: &str) -> Result<MetricTable> {
    let lines: Vec<&str> = text.lines().collect();
    let sep = lines
        .iter()
        .rposition(|l| is_separator(l))
        .filter(|&i| i > 0)
        .ok_or_else(|| Error::DataConsistency("report has no table header".into()))?;

    let header = split_cells(lines[sep - 1]);
    if header.first().map(String::as_str) != Some(TOKEN_HEADER) {
        return Err(Error::DataConsistency(format!("report header must start with {TOKEN_HEADER:?}")));
    }
    let mut table = MetricTable::new(header[1..].to_vec());

    for line in lines[sep + 1..].iter().filter(|l| !l.trim().is_empty()) {
        let cells = split_cells(line);
        if cells.len() != table.column_count() + 1 {
            return Err(Error::DataConsistency(format!(
                "report row {line:?} has {} cells, expected {}",
                cells.len(),
                table.column_count() + 1
            )));
        }
        let values = cells[1..]
            .iter()
            .map(|c| {
                c.parse::<f64>()
                    .map_err(|e| Error::DataConsistency(format!("bad value {c:?} in row {line:?}: {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        if table.rows.insert(cells[0].clone(), values).is_some() {
            return Err(Error::DataConsistency(format!("token {:?} repeated in report", cells[0])));
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(table: &MetricTable) -> String {
        let mut buf = Vec::new();
        render_table(&mut buf, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> MetricTable {
        let mut t = MetricTable::new(vec!["doc1".into(), "doc2".into()]);
        t.rows.insert("y".into(), vec![0.5, 0.0]);
        t.rows.insert("x".into(), vec![0.5, 1.0]);
        t
    }

    #[test]
    fn renders_sorted_bordered_rows() {
        let out = render_to_string(&sample());
        let expected = "\
| Token | doc1    | doc2    |
|-------|---------|---------|
| x     | 0.50000 | 1.00000 |
| y     | 0.50000 | 0.00000 |
";
        assert_eq!(out, expected);
    }

    #[test]
    fn formats_five_decimals_fixed_point() {
        assert_eq!(format_value(2.0 / 3.0), "0.66667");
        assert_eq!(format_value(1e-7), "0.00000");
        assert_eq!(format_value(12345.0), "12345.00000");
        assert_eq!(format_value(-0.0), "0.00000");
    }

    #[test]
    fn widens_columns_for_long_tokens() {
        let mut t = MetricTable::new(vec!["idf".into()]);
        t.rows.insert("supercalifragilistic".into(), vec![0.69314718]);
        let out = render_to_string(&t);
        assert!(out.starts_with("| Token                | idf     |\n"));
        assert!(out.contains("| supercalifragilistic | 0.69315 |"));
    }

    #[test]
    fn parses_last_block() {
        let mut text = render_to_string(&sample());
        let mut second = MetricTable::new(vec!["doc1".into()]);
        second.rows.insert("z".into(), vec![0.25]);
        text.push_str(&render_to_string(&second));

        let parsed = parse_table(&text).unwrap();
        assert_eq!(parsed, second);
    }

    #[test]
    fn parse_round_trips_rendered_values() {
        let parsed = parse_table(&render_to_string(&sample())).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn pipes_in_tokens_survive_a_round_trip() {
        let mut t = MetricTable::new(vec!["a|b".into()]);
        t.rows.insert("x|y".into(), vec![0.5]);
        t.rows.insert("trail\\".into(), vec![0.25]);
        let out = render_to_string(&t);
        assert!(out.contains("| x\\|y "));
        assert_eq!(parse_table(&out).unwrap(), t);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let text = "| Token | a | b |\n|---|---|---|\n| x | 0.1 |\n";
        assert!(matches!(parse_table(text), Err(Error::DataConsistency(_))));
    }

    #[test]
    fn parse_rejects_missing_header() {
        assert!(parse_table("").is_err());
        assert!(parse_table("| x | 0.1 |\n").is_err());
    }
}
