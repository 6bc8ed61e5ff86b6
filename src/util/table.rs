//! Plain-text layout for the report commands: a column-wise name grid and
//! an aligned table with per-column justification.

use itertools::Itertools;

/// Spaces added after the widest name in a grid cell.
const GRID_GAP: usize = 4;
const TABLE_SEP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl Align {
    /// Parse a justification string such as `"LLLLRL"`; anything but `R`
    /// is left-justified.
    pub fn parse_all(codes: &str) -> Vec<Align> {
        codes
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'R' => Align::Right,
                _ => Align::Left,
            })
            .collect()
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(cell: &str, w: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{cell:<w$}"),
        Align::Right => format!("{cell:>w$}"),
    }
}

fn clip(cell: &str, w: usize) -> String {
    if width(cell) <= w {
        cell.to_string()
    } else {
        cell.chars().take(w).collect()
    }
}

/// Lay `items` out in at most `cols` columns, filling column by column.
/// Every cell is padded to the widest item plus a fixed gap.
pub fn list_columns(items: &[String], cols: usize) -> String {
    if items.is_empty() || cols == 0 {
        return String::new();
    }
    let cols = cols.min(items.len());
    let rows = items.len().div_ceil(cols);
    let cell = items.iter().map(|s| width(s)).max().unwrap_or(0) + GRID_GAP;

    (0..rows)
        .map(|r| {
            items
                .iter()
                .skip(r)
                .step_by(rows)
                .map(|s| pad(s, cell, Align::Left))
                .join("")
                .trim_end()
                .to_string()
        })
        .join("\n")
}

/// Render `rows` (first row is the header) as an aligned table. Columns are
/// as wide as their widest cell, capped at `max_col_width`; longer cells
/// are clipped. A dashed rule follows the header.
pub fn render_table(rows: &[Vec<String>], aligns: &[Align], max_col_width: usize) -> String {
    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if ncols == 0 {
        return String::new();
    }
    let widths: Vec<usize> = (0..ncols)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| width(s))
                .max()
                .unwrap_or(0)
                .min(max_col_width)
        })
        .collect();

    let line = |row: &[String]| {
        (0..ncols)
            .map(|c| {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                let align = aligns.get(c).copied().unwrap_or(Align::Left);
                pad(&clip(cell, widths[c]), widths[c], align)
            })
            .join(TABLE_SEP)
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 1);
    let mut it = rows.iter();
    if let Some(header) = it.next() {
        out.push(line(header.as_slice()));
        out.push(widths.iter().map(|w| "-".repeat(*w)).join(TABLE_SEP));
    }
    out.extend(it.map(|r| line(r.as_slice())));
    out.join("\n")
}

pub fn bold_underline(text: &str) -> String {
    format!("\x1b[1m\x1b[4m{text}\x1b[0m")
}

/// Three-line banner used above name grids.
pub fn banner(title: &str, rule_len: usize) -> String {
    let rule = "-".repeat(rule_len);
    format!("{rule}\n{title}\n{rule}")
}
