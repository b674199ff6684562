use serde::{Serialize, Serializer};

/// 补齐时使用的空位字符
pub const PAD: u8 = b'.';

/// 一条输入序列（FASTA 记录）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "sequence", serialize_with = "as_text")]
    pub seq: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), seq: seq.into() }
    }
}

fn as_text<S: Serializer>(seq: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(seq))
}

/// 矩形比对：所有序列等长，长度为 `width`
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    pub entries: Vec<Entry>,
    pub width: usize,
}

impl Alignment {
    /// 用 [`PAD`] 把所有序列补齐到最长序列的长度
    pub fn new(mut entries: Vec<Entry>) -> Self {
        let width = pad_entries(&mut entries);
        Self { entries, width }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() || self.width == 0
    }

    /// 第 `i` 列所有序列的字符（按输入顺序）
    pub fn column(&self, i: usize) -> Vec<u8> {
        self.entries.iter().map(|e| e.seq[i]).collect()
    }
}

/// 原地补齐，返回公共宽度；只追加，不截断，重复调用无副作用
pub fn pad_entries(entries: &mut [Entry]) -> usize {
    let width = entries.iter().map(|e| e.seq.len()).max().unwrap_or(0);
    for e in entries.iter_mut() {
        if e.seq.len() < width {
            e.seq.resize(width, PAD);
        }
    }
    width
}
