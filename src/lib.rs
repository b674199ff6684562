//! # prosite-rs
//!
//! 从蛋白质多序列比对推导 PROSITE 风格的签名模式。
//!
//! 本 crate 提供以下功能：
//!
//! - **补齐**：将不等长序列用空位补齐为矩形比对
//! - **列分类**：按理化分类或 BLOSUM62 判定每列为保守、等价保守或可变
//! - **游程合并**：合并相邻的同类列，并裁剪首尾的空位 / 通配片段
//! - **阈值切分**：在长通配片段处切分出多个独立签名
//! - **格式化**：输出 `x(2,4)-[KR]-G(3)` 形式的 token
//!
//! ## 快速示例
//!
//! ```rust
//! use prosite_rs::motif::{self, Entry, SignatureOpt};
//! use prosite_rs::residue::Catalog;
//!
//! let entries = vec![
//!     Entry::new("p1", "AKAA"),
//!     Entry::new("p2", "ARAA"),
//!     Entry::new("p3", "AKAA"),
//! ];
//! let patterns = motif::find_signatures(entries, &SignatureOpt::default(), Catalog::standard()).unwrap();
//! assert_eq!(patterns[0].to_string(), "A-[KR]-A(2)");
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 解析
//! - [`residue`] — 氨基酸参考表与 BLOSUM62
//! - [`motif`] — 签名推导流水线

pub mod io;
pub mod motif;
pub mod residue;
