use anyhow::{bail, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::align::Alignment;
use crate::residue::{Catalog, BLOSUM62_ACCEPT};

/// 判断列内不同残基是否仍算 "保守" 的等价规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConservationModel {
    /// 理化分类相同即等价
    #[default]
    Classification,
    /// BLOSUM62 得分不低于 [`BLOSUM62_ACCEPT`] 即等价
    Blosum62,
}

impl FromStr for ConservationModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classification" | "1" => Ok(ConservationModel::Classification),
            "blosum62" | "2" => Ok(ConservationModel::Blosum62),
            other => bail!("unknown conservation model '{}'", other),
        }
    }
}

impl fmt::Display for ConservationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConservationModel::Classification => f.write_str("classification"),
            ConservationModel::Blosum62 => f.write_str("blosum62"),
        }
    }
}

/// 单列的分类结果
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSymbol {
    /// 完全保守的残基（`0` 表示 "无残基"）
    Literal(u8),
    /// 等价残基集合，按字节排序去重
    ClassSet(Vec<u8>),
    Wildcard,
    WildcardWithGap,
    /// 整列均为空位
    GapCollapse,
}

impl ColumnSymbol {
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, ColumnSymbol::Wildcard | ColumnSymbol::WildcardWithGap)
    }

    /// `x` 与 `x0` 在分组时可以互相合并
    pub fn merges_with(&self, other: &ColumnSymbol) -> bool {
        self == other || (self.is_wildcard() && other.is_wildcard())
    }

    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ColumnSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSymbol::Literal(b) => write!(f, "{}", *b as char),
            ColumnSymbol::ClassSet(set) => write!(f, "[{}]", String::from_utf8_lossy(set)),
            ColumnSymbol::Wildcard => f.write_str("x"),
            ColumnSymbol::WildcardWithGap => f.write_str("x0"),
            ColumnSymbol::GapCollapse => f.write_str("-"),
        }
    }
}

/// 出现次数最多的元素；并列时取扫描中最先达到该次数的元素
pub fn most_frequent(chars: &[u8]) -> Option<u8> {
    let mut counts = [0usize; 256];
    let mut best: Option<u8> = None;
    let mut best_count = 0usize;
    for &c in chars {
        counts[c as usize] += 1;
        if counts[c as usize] > best_count {
            best_count = counts[c as usize];
            best = Some(c);
        }
    }
    best
}

/// 对一列字符进行分类。
///
/// 字符先规范化（大写，空位与未知字母统一为 `-`），之后：
/// 1. 全列相同：空位 → [`ColumnSymbol::GapCollapse`]，否则 [`ColumnSymbol::Literal`]；
/// 2. 所有字符与众数字符在给定模型下等价 → [`ColumnSymbol::ClassSet`]；
/// 3. 否则含空位 → `x0`，不含 → `x`。
pub fn classify_column(chars: &[u8], model: ConservationModel, catalog: &Catalog) -> ColumnSymbol {
    let chars: Vec<u8> = chars.iter().map(|&c| catalog.canonical(c)).collect();
    let dominant = match most_frequent(&chars) {
        Some(d) => d,
        None => return ColumnSymbol::GapCollapse,
    };

    let full_conservation = chars.iter().all(|&c| c == chars[0]);
    if full_conservation {
        return if catalog.is_gap(dominant) {
            ColumnSymbol::GapCollapse
        } else {
            ColumnSymbol::Literal(dominant)
        };
    }

    let conserved = match model {
        ConservationModel::Classification => {
            let class = catalog.classification(dominant);
            chars.iter().all(|&c| catalog.classification(c) == class)
        }
        ConservationModel::Blosum62 => chars
            .iter()
            .all(|&c| catalog.substitution_accepts(c, dominant, BLOSUM62_ACCEPT)),
    };

    if conserved {
        let mut set = chars;
        set.sort_unstable();
        set.dedup();
        ColumnSymbol::ClassSet(set)
    } else if chars.iter().any(|&c| catalog.is_gap(c)) {
        ColumnSymbol::WildcardWithGap
    } else {
        ColumnSymbol::Wildcard
    }
}

/// 逐列分类整个比对
pub fn classify_columns(aln: &Alignment, model: ConservationModel, catalog: &Catalog) -> Vec<ColumnSymbol> {
    (0..aln.width)
        .map(|i| classify_column(&aln.column(i), model, catalog))
        .collect()
}

/// 与 [`classify_columns`] 结果相同，列间无依赖，使用 rayon 并行
pub fn classify_columns_par(aln: &Alignment, model: ConservationModel, catalog: &Catalog) -> Vec<ColumnSymbol> {
    (0..aln.width)
        .into_par_iter()
        .map(|i| classify_column(&aln.column(i), model, catalog))
        .collect()
}
