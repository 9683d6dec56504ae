//! Depth table rendering: JSON rows and a plain text table.

use halfdepth::DepthTable;
use serde::Serialize;
use std::fmt::Write as _;

/// One serialized row of a depth table.
#[derive(Debug, Serialize, PartialEq)]
pub struct DepthRow {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub diamond: usize,
    pub atan: usize,
}

pub fn rows(table: &DepthTable) -> Vec<DepthRow> {
    table
        .iter()
        .map(|e| DepthRow {
            index: e.index,
            x: e.point.x,
            y: e.point.y,
            diamond: e.record.diamond,
            atan: e.record.atan,
        })
        .collect()
}

/// Fixed-width text table, one line per point, lowest depth first.
pub fn render_text(table: &DepthTable) -> String {
    let mut rows = rows(table);
    rows.sort_by_key(|r| (r.diamond.min(r.atan), r.index));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>12} {:>12} {:>8} {:>8}",
        "#", "x", "y", "Diamond", "ATan"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:>5} {:>12} {:>12} {:>8} {:>8}",
            r.index, r.x, r.y, r.diamond, r.atan
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use halfdepth::{build_table, points_from_pairs, DepthCfg};

    #[test]
    fn text_table_lists_lowest_depth_first() {
        let pts = points_from_pairs(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (-1.0, 0.0),
            (0.0, -1.0),
        ]);
        let table = build_table(&pts, DepthCfg::default());
        let text = render_text(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Diamond"));
        // center (depth 3) sorts before the arms (depth 4)
        assert!(lines[1].trim_start().starts_with('0'));
        assert!(lines[1].trim_end().ends_with('3'));
    }

    #[test]
    fn rows_serialize_with_named_scores() {
        let pts = points_from_pairs(&[(1.0, 1.0), (1.0, 1.0)]);
        let table = build_table(&pts, DepthCfg::default());
        let json = serde_json::to_value(rows(&table)).unwrap();
        assert_eq!(json[1]["index"], 1);
        assert_eq!(json[1]["diamond"], 0);
        assert_eq!(json[1]["atan"], 0);
        assert_eq!(json[0]["x"], 1.0);
    }
}
