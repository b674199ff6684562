use serde::Serialize;
use std::fmt;

use super::align::Alignment;
use super::column::ColumnSymbol;
use super::gaps::gap_bounds;
use super::split::Segment;
use crate::residue::Catalog;

/// 一个片段格式化后的 token 序列，例如 `["x(2,4)", "[KR]", "G(3)"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MotifPattern(pub Vec<String>);

impl MotifPattern {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl fmt::Display for MotifPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("-"))
    }
}

pub fn format_segment(segment: &Segment, aln: &Alignment, catalog: &Catalog) -> MotifPattern {
    let tokens = segment
        .runs
        .iter()
        .map(|run| match (run.len, &run.symbol) {
            (1, sym) => sym.token(),
            (_, ColumnSymbol::WildcardWithGap) => {
                let (lo, hi) = gap_bounds(aln, run.start, run.end, catalog);
                format!("x({},{})", lo, hi)
            }
            (n, sym) => format!("{}({})", sym, n),
        })
        .collect();
    MotifPattern(tokens)
}

pub fn format_segments(segments: &[Segment], aln: &Alignment, catalog: &Catalog) -> Vec<MotifPattern> {
    segments
        .iter()
        .map(|s| format_segment(s, aln, catalog))
        .collect()
}
