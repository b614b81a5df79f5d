//! Plain text tables.

use itertools::Itertools;

/// Lay out a table as lines of aligned columns.
///
/// Columns where every body cell is a number are right-aligned on the
/// decimal point, everything else is left-aligned. Widths count chars, not
/// bytes, so unit symbols like `μm` line up.
pub fn align(header: &[&str], rows: &[Vec<&str>]) -> Vec<String> {
    fn is_numeric(s: &str) -> bool {
        let s = s.trim();

        // Missing data marker, allowed in numeric columns.
        if s == "-" {
            return true;
        }

        s.parse::<f64>().is_ok()
    }

    /// How much of a number sits left of its alignment point.
    fn left_extension(num: &str) -> usize {
        if let Some(e) = num.find('e') {
            e // Try to align by exponent marker first,
        } else if let Some(e) = num.find('.') {
            e // then by the decimal point,
        } else {
            num.len() // otherwise just right-align the whole thing.
        }
    }

    fn width(s: &str) -> usize {
        s.chars().count()
    }

    let columns = rows
        .iter()
        .map(|r| r.len())
        .chain(Some(header.len()))
        .max()
        .unwrap_or(0);

    // (is-numeric, total-width, right-extent) per column.
    let mut layout = Vec::with_capacity(columns);
    for i in 0..columns {
        let cells = move || rows.iter().filter_map(move |r| r.get(i).copied());
        let header_width = header.get(i).map_or(0, |h| width(h));

        let numeric = cells().next().is_some() && cells().all(is_numeric);
        if numeric {
            let left = cells().map(left_extension).max().unwrap_or(0);
            let right = cells()
                .map(|c| c.len() - left_extension(c))
                .max()
                .unwrap_or(0);
            layout.push((true, (left + right).max(header_width), right));
        } else {
            let w = cells().map(width).max().unwrap_or(0).max(header_width);
            layout.push((false, w, 0));
        }
    }

    let render = |row: &[&str], is_header: bool| -> String {
        row.iter()
            .zip(&layout)
            .map(|(&cell, &(numeric, total, right))| {
                let pad_left = match (numeric, is_header) {
                    (true, true) => total - width(cell),
                    (true, false) => total - right - left_extension(cell),
                    (false, _) => 0,
                };
                let pad_right = total - pad_left - width(cell);
                format!("{}{cell}{}", " ".repeat(pad_left), " ".repeat(pad_right))
            })
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !header.is_empty() {
        lines.push(render(header, true));
    }
    for row in rows {
        lines.push(render(&row[..], false));
    }
    lines
}
