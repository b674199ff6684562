use super::column::ColumnSymbol;

/// 连续同类列合并后的片段，区间 `[start, end]` 为闭区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub symbol: ColumnSymbol,
    pub len: usize,
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn token(&self) -> String {
        self.symbol.token()
    }

    /// 首尾裁剪的对象：纯空位列或不含空位的通配列
    fn is_trimmable(&self) -> bool {
        matches!(self.symbol, ColumnSymbol::GapCollapse | ColumnSymbol::Wildcard)
    }
}

/// 游程编码：相邻列符号相同（或同为通配）时合并。
/// 合并后的符号取该段第一列的符号；返回的区间恰好连续覆盖 `[0, symbols.len())`。
pub fn group_runs(symbols: &[ColumnSymbol]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (i, sym) in symbols.iter().enumerate() {
        match runs.last_mut() {
            Some(last) if last.symbol.merges_with(sym) => {
                last.len += 1;
                last.end = i;
            }
            _ => runs.push(Run { symbol: sym.clone(), len: 1, start: i, end: i }),
        }
    }
    runs
}

/// 去掉首尾的 `-` / `x` 片段（各至多一个）。`x0` 保留。
pub fn trim_edges(mut runs: Vec<Run>) -> Vec<Run> {
    if runs.first().is_some_and(Run::is_trimmable) {
        runs.remove(0);
    }
    if runs.last().is_some_and(Run::is_trimmable) {
        runs.pop();
    }
    runs
}
