use super::align::Alignment;
use crate::residue::Catalog;

/// 统计闭区间 `[start, end]` 内每条序列的非空位残基数，返回 `(min - 1, max)`。
///
/// 下界减一沿用既有输出格式（例如全部序列均有 3 个残基时输出 `x(2,3)`），
/// 可能是一个差一错误，但改动会改变输出。下界不低于 0；没有序列时返回 `(0, 0)`。
pub fn gap_bounds(aln: &Alignment, start: usize, end: usize, catalog: &Catalog) -> (usize, usize) {
    let span = end - start + 1;
    let counts = aln.entries.iter().map(|e| {
        let gaps = e.seq[start..=end].iter().filter(|&&b| catalog.is_gap(b)).count();
        span - gaps
    });

    let mut min: Option<usize> = None;
    let mut max = 0usize;
    for n in counts {
        min = Some(min.map_or(n, |m| m.min(n)));
        max = max.max(n);
    }
    (min.map_or(0, |m| m.saturating_sub(1)), max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::align::Entry;

    #[test]
    fn bounds_over_gapped_region() {
        let aln = Alignment::new(vec![
            Entry::new("a", "AKLM-W"),
            Entry::new("b", "A--M-W"),
            Entry::new("c", "A.-.-W"),
        ]);
        let cat = Catalog::standard();
        // 列 1..=3：非空位计数 3, 1, 0
        assert_eq!(gap_bounds(&aln, 1, 3, cat), (0, 3));
        // 列 1..=1：1, 0, 0
        assert_eq!(gap_bounds(&aln, 1, 1, cat), (0, 1));
    }

    #[test]
    fn lower_bound_is_reduced_by_one() {
        let aln = Alignment::new(vec![
            Entry::new("a", "KLMN"),
            Entry::new("b", "K-MN"),
            Entry::new("c", "KLMN"),
        ]);
        assert_eq!(gap_bounds(&aln, 0, 3, Catalog::standard()), (2, 4));
    }

    #[test]
    fn unknown_letters_count_as_gaps() {
        let aln = Alignment::new(vec![Entry::new("a", "AXXA"), Entry::new("b", "AKKA")]);
        assert_eq!(gap_bounds(&aln, 1, 2, Catalog::standard()), (0, 2));
    }

    #[test]
    fn no_entries() {
        let aln = Alignment { entries: Vec::new(), width: 3 };
        assert_eq!(gap_bounds(&aln, 0, 2, Catalog::standard()), (0, 0));
    }
}
