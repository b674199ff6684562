use super::amino::Residue;

/// 保守性判定使用的固定接受阈值：得分 ≥ 1 视为可替换。
pub const BLOSUM62_ACCEPT: i32 = 1;

const DIM: usize = 20;

/// BLOSUM62（NCBI），行列顺序与 [`Residue::matrix_index`] 一致：
/// A R N D C Q E G H I L K M F P S T W Y V
#[rustfmt::skip]
const BLOSUM62: [i8; DIM * DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, // V
];

/// 查询两个残基的 BLOSUM62 得分；空位与 "无残基" 没有得分。
pub fn score(a: Residue, b: Residue) -> Option<i32> {
    let i = a.matrix_index()?;
    let j = b.matrix_index()?;
    Some(BLOSUM62[i * DIM + j] as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_symmetric() {
        for i in 0..DIM {
            for j in 0..DIM {
                assert_eq!(BLOSUM62[i * DIM + j], BLOSUM62[j * DIM + i], "asymmetry at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn known_scores() {
        assert_eq!(score(Residue::W, Residue::W), Some(11));
        assert_eq!(score(Residue::K, Residue::R), Some(2));
        assert_eq!(score(Residue::D, Residue::E), Some(2));
        assert_eq!(score(Residue::A, Residue::W), Some(-3));
        assert_eq!(score(Residue::Gap, Residue::A), None);
        assert_eq!(score(Residue::A, Residue::NoResidue), None);
    }

    #[test]
    fn diagonal_always_accepted() {
        for r in Residue::STANDARD {
            let s = score(r, r).unwrap();
            assert!(s >= BLOSUM62_ACCEPT);
        }
    }
}
