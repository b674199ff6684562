use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use super::blosum;

/// 氨基酸理化分类（八类），空位与 "无残基" 归为 `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Hydrophobic,
    Aromatic,
    PolarUncharged,
    PositivelyCharged,
    NegativelyCharged,
    Cysteines,
    Glycines,
    Prolines,
    None,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::Hydrophobic => "hydrophobic",
            Classification::Aromatic => "aromatic",
            Classification::PolarUncharged => "polar, uncharged",
            Classification::PositivelyCharged => "positively charged",
            Classification::NegativelyCharged => "negatively charged",
            Classification::Cysteines => "cysteines",
            Classification::Glycines => "glycines",
            Classification::Prolines => "prolines",
            Classification::None => "none",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 残基：20 种标准氨基酸、"无残基" 标记（`0`）或空位（`.` / `-`）。
///
/// 标准氨基酸的声明顺序即 BLOSUM62 的行列顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Residue {
    A,
    R,
    N,
    D,
    C,
    Q,
    E,
    G,
    H,
    I,
    L,
    K,
    M,
    F,
    P,
    S,
    T,
    W,
    Y,
    V,
    NoResidue,
    Gap,
}

impl Residue {
    pub const STANDARD: [Residue; 20] = [
        Residue::A,
        Residue::R,
        Residue::N,
        Residue::D,
        Residue::C,
        Residue::Q,
        Residue::E,
        Residue::G,
        Residue::H,
        Residue::I,
        Residue::L,
        Residue::K,
        Residue::M,
        Residue::F,
        Residue::P,
        Residue::S,
        Residue::T,
        Residue::W,
        Residue::Y,
        Residue::V,
    ];

    /// 单字母解析；未知字母一律视为空位
    pub fn from_byte(b: u8) -> Residue {
        match b.to_ascii_uppercase() {
            b'A' => Residue::A,
            b'R' => Residue::R,
            b'N' => Residue::N,
            b'D' => Residue::D,
            b'C' => Residue::C,
            b'Q' => Residue::Q,
            b'E' => Residue::E,
            b'G' => Residue::G,
            b'H' => Residue::H,
            b'I' => Residue::I,
            b'L' => Residue::L,
            b'K' => Residue::K,
            b'M' => Residue::M,
            b'F' => Residue::F,
            b'P' => Residue::P,
            b'S' => Residue::S,
            b'T' => Residue::T,
            b'W' => Residue::W,
            b'Y' => Residue::Y,
            b'V' => Residue::V,
            b'0' => Residue::NoResidue,
            _ => Residue::Gap,
        }
    }

    /// 规范单字母；两种空位写法统一为 `-`
    pub fn symbol(self) -> u8 {
        match self {
            Residue::NoResidue => b'0',
            Residue::Gap => b'-',
            r => STANDARD_SYMBOLS[r as usize],
        }
    }

    #[inline]
    pub fn is_gap(self) -> bool {
        self == Residue::Gap
    }

    pub(crate) fn matrix_index(self) -> Option<usize> {
        match self {
            Residue::NoResidue | Residue::Gap => None,
            r => Some(r as usize),
        }
    }
}

const STANDARD_SYMBOLS: &[u8; 20] = b"ARNDCQEGHILKMFPSTWYV";

/// 参考表中的一条氨基酸记录
#[derive(Debug, Clone, Serialize)]
pub struct AminoAcid {
    pub residue: Residue,
    pub name: &'static str,
    pub code3: &'static str,
    pub classification: Classification,
}

impl AminoAcid {
    const fn new(residue: Residue, name: &'static str, code3: &'static str, classification: Classification) -> Self {
        Self { residue, name, code3, classification }
    }

    pub fn describe(&self) -> String {
        format!(
            "Name: {} | Symbol: {} | Code: {} | Classification: {}",
            self.name,
            self.residue.symbol() as char,
            self.code3,
            self.classification
        )
    }
}

/// 进程级只读参考表：氨基酸目录 + BLOSUM62。
///
/// 通过 [`Catalog::standard`] 获取唯一实例，以引用方式传入各个阶段。
#[derive(Debug)]
pub struct Catalog {
    /// 按 `Residue as usize` 索引
    entries: Vec<AminoAcid>,
}

static STANDARD: Lazy<Catalog> = Lazy::new(Catalog::build);

impl Catalog {
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    fn build() -> Self {
        use Classification::*;
        let entries = vec![
            AminoAcid::new(Residue::A, "Alanine", "Ala", Hydrophobic),
            AminoAcid::new(Residue::R, "Arginine", "Arg", PositivelyCharged),
            AminoAcid::new(Residue::N, "Asparagine", "Asn", PolarUncharged),
            AminoAcid::new(Residue::D, "Aspartate", "Asp", NegativelyCharged),
            AminoAcid::new(Residue::C, "Cysteine", "Cys", Cysteines),
            AminoAcid::new(Residue::Q, "Glutamine", "Gln", PolarUncharged),
            AminoAcid::new(Residue::E, "Glutamate", "Glu", NegativelyCharged),
            AminoAcid::new(Residue::G, "Glycine", "Gly", Glycines),
            AminoAcid::new(Residue::H, "Histidine", "His", Aromatic),
            AminoAcid::new(Residue::I, "Isoleucine", "Ile", Hydrophobic),
            AminoAcid::new(Residue::L, "Leucine", "Leu", Hydrophobic),
            AminoAcid::new(Residue::K, "Lysine", "Lys", PositivelyCharged),
            AminoAcid::new(Residue::M, "Methionine", "Met", Hydrophobic),
            AminoAcid::new(Residue::F, "Phenylalanine", "Phe", Hydrophobic),
            AminoAcid::new(Residue::P, "Proline", "Pro", Prolines),
            AminoAcid::new(Residue::S, "Serine", "Ser", PolarUncharged),
            AminoAcid::new(Residue::T, "Threonine", "Thr", PolarUncharged),
            AminoAcid::new(Residue::W, "Tryptophan", "Trp", Hydrophobic),
            AminoAcid::new(Residue::Y, "Tyrosine", "Tyr", Aromatic),
            AminoAcid::new(Residue::V, "Valine", "Val", Hydrophobic),
            AminoAcid::new(Residue::NoResidue, "None", "0", Classification::None),
            AminoAcid::new(Residue::Gap, "Gap", "-", Classification::None),
        ];
        Self { entries }
    }

    pub fn lookup(&self, b: u8) -> &AminoAcid {
        &self.entries[Residue::from_byte(b) as usize]
    }

    /// 20 种标准氨基酸（不含占位记录）
    pub fn amino_acids(&self) -> &[AminoAcid] {
        &self.entries[..Residue::STANDARD.len()]
    }

    #[inline]
    pub fn classification(&self, b: u8) -> Classification {
        self.lookup(b).classification
    }

    #[inline]
    pub fn is_gap(&self, b: u8) -> bool {
        self.lookup(b).residue.is_gap()
    }

    /// 规范化单字母：大写，空位与未知字母统一为 `-`
    #[inline]
    pub fn canonical(&self, b: u8) -> u8 {
        self.lookup(b).residue.symbol()
    }

    pub fn substitution_score(&self, a: u8, b: u8) -> Option<i32> {
        blosum::score(self.lookup(a).residue, self.lookup(b).residue)
    }

    /// 得分不低于 `threshold` 时接受替换；无得分（空位）一律拒绝
    pub fn substitution_accepts(&self, a: u8, b: u8, threshold: i32) -> bool {
        matches!(self.substitution_score(a, b), Some(s) if s >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_indexes_match_residues() {
        let cat = Catalog::standard();
        for (i, aa) in cat.entries.iter().enumerate() {
            assert_eq!(aa.residue as usize, i, "{} out of place", aa.name);
        }
        assert_eq!(cat.amino_acids().len(), 20);
    }

    #[test]
    fn gap_spellings_and_unknown_letters() {
        let cat = Catalog::standard();
        assert!(cat.is_gap(b'.'));
        assert!(cat.is_gap(b'-'));
        assert!(cat.is_gap(b'X'));
        assert!(cat.is_gap(b'B'));
        assert!(!cat.is_gap(b'0'));
        assert_eq!(cat.canonical(b'.'), b'-');
        assert_eq!(cat.canonical(b'k'), b'K');
        assert_eq!(cat.canonical(b'0'), b'0');
        assert_eq!(cat.classification(b'X'), Classification::None);
    }

    #[test]
    fn classifications() {
        let cat = Catalog::standard();
        assert_eq!(cat.classification(b'K'), Classification::PositivelyCharged);
        assert_eq!(cat.classification(b'R'), Classification::PositivelyCharged);
        assert_eq!(cat.classification(b'Y'), Classification::Aromatic);
        assert_eq!(cat.classification(b'G'), Classification::Glycines);
        assert_ne!(cat.classification(b'D'), cat.classification(b'K'));
    }

    #[test]
    fn substitution_acceptance() {
        let cat = Catalog::standard();
        assert!(cat.substitution_accepts(b'K', b'R', blosum::BLOSUM62_ACCEPT));
        assert!(!cat.substitution_accepts(b'K', b'D', blosum::BLOSUM62_ACCEPT));
        assert!(!cat.substitution_accepts(b'-', b'-', blosum::BLOSUM62_ACCEPT));
        assert_eq!(cat.substitution_score(b'a', b'A'), Some(4));
    }

    #[test]
    fn describe_line() {
        let cat = Catalog::standard();
        let line = cat.lookup(b'K').describe();
        assert_eq!(line, "Name: Lysine | Symbol: K | Code: Lys | Classification: positively charged");
    }
}
