//! Extraction of cancellation rows from the wiki page's HTML.
//!
//! The page is MediaWiki output and the announcement table is the first
//! `<table>` on it. Parsing scans tag blocks directly rather than going
//! through an HTML parser; matching is ASCII case-insensitive and
//! assumes the wiki's flat markup (no nested tables, no unclosed
//! cells).

use chrono::{Datelike, NaiveDate};

use crate::types::Cancellation;

/// Parses the cancellations table out of `html` and returns the rows
/// dated in the same ISO week as `week_of`, in table order.
///
/// The table's first row is a header and its last row a footer; both are
/// dropped. Each remaining row needs at least five cells, read as
/// `[date, name, country, region, reason]` with the middle two ignored.
/// Rows with fewer cells or a first cell that is not a `YYYY-MM-DD` date
/// are skipped.
#[must_use]
pub fn parse_cancellations(html: &str, week_of: NaiveDate) -> Vec<Cancellation> {
    let Some(table) = first_table(html) else {
        return Vec::new();
    };

    let mut rows = table_rows(table);
    if rows.is_empty() {
        return Vec::new();
    }
    rows.remove(0);
    rows.pop();

    rows.iter()
        .filter_map(|cells| row_to_cancellation(cells))
        .filter(|c| c.date.iso_week() == week_of.iso_week())
        .collect()
}

fn row_to_cancellation(cells: &[String]) -> Option<Cancellation> {
    if cells.len() < 5 {
        return None;
    }
    let date = NaiveDate::parse_from_str(&cells[0], "%Y-%m-%d").ok()?;
    Some(Cancellation {
        name: cells[1].clone(),
        reason: cells[4].clone(),
        date,
    })
}

/// Returns the first `<table>...</table>` block, tags included.
fn first_table(html: &str) -> Option<&str> {
    let lower = html.to_ascii_lowercase();
    let (start, end) = next_block(&lower, "<table", "</table>", 0)?;
    Some(&html[start..end])
}

/// Collects every `<tr>` in the table as a list of cleaned cell texts.
fn table_rows(table_html: &str) -> Vec<Vec<String>> {
    let lower = table_html.to_ascii_lowercase();
    let mut rows = Vec::new();
    let mut cursor = 0;
    while let Some((start, end)) = next_block(&lower, "<tr", "</tr>", cursor) {
        let row_html = inner_after_open_tag(&table_html[start..end]);
        rows.push(row_cells(row_html));
        cursor = end;
    }
    rows
}

/// Collects `<td>` and `<th>` cell texts from one row, in document order.
fn row_cells(row_html: &str) -> Vec<String> {
    let lower = row_html.to_ascii_lowercase();
    let mut cells = Vec::new();
    let mut cursor = 0;
    loop {
        let td = next_block(&lower, "<td", "</td>", cursor);
        let th = next_block(&lower, "<th", "</th>", cursor);
        let block = match (td, th) {
            (Some(a), Some(b)) => {
                if a.0 <= b.0 {
                    a
                } else {
                    b
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        let inner = inner_after_open_tag(&row_html[block.0..block.1]);
        cells.push(cell_text(inner));
        cursor = block.1;
    }
    cells
}

/// Finds the next complete `<open ...> ... </close>` block at or after
/// `from`, returning its start and end byte offsets. `lower` must be the
/// ASCII-lowercased copy of the string being indexed; offsets line up
/// because ASCII lowering preserves byte length.
fn next_block(lower: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let start = lower.get(from..)?.find(open)? + from;
    let open_end = lower[start..].find('>')? + start + 1;
    let close_rel = lower[open_end..].find(close)?;
    Some((start, open_end + close_rel + close.len()))
}

/// Given a complete block like `<td ...>INNER</td>`, returns INNER,
/// which may still contain nested tags.
fn inner_after_open_tag(block: &str) -> &str {
    let Some(open_end) = block.find('>') else {
        return "";
    };
    let Some(close_start) = block.rfind('<') else {
        return "";
    };
    if close_start <= open_end {
        return "";
    }
    &block[open_end + 1..close_start]
}

/// Strips nested tags, decodes the entities the wiki emits, and
/// collapses whitespace runs.
fn cell_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&");
    collapse_ws(&decoded)
}

fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
