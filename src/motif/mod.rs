//! 从蛋白质多序列比对推导 PROSITE 风格签名。
//!
//! 流水线：补齐 → 逐列分类 → 游程合并 → 首尾裁剪 → 按通配阈值切分 → 格式化。

pub mod align;
pub mod column;
pub mod format;
pub mod gaps;
pub mod group;
pub mod split;

use anyhow::{anyhow, bail, Result};
use serde::Serialize;

use crate::io::fasta;
use crate::residue::Catalog;

pub use align::{pad_entries, Alignment, Entry};
pub use column::{classify_column, classify_columns, classify_columns_par, ColumnSymbol, ConservationModel};
pub use format::{format_segment, format_segments, MotifPattern};
pub use gaps::gap_bounds;
pub use group::{group_runs, trim_edges, Run};
pub use split::{split_segments, Segment};

/// 签名推导参数
#[derive(Debug, Clone, Copy)]
pub struct SignatureOpt {
    pub model: ConservationModel,
    /// 长度不小于该值的通配 run 作为片段分隔符，须 ≥ 1
    pub x_threshold: usize,
    /// >1 时列分类在一个该大小的独立 rayon 线程池中并行
    pub threads: usize,
}

impl Default for SignatureOpt {
    fn default() -> Self {
        Self {
            model: ConservationModel::Classification,
            x_threshold: 20,
            threads: 1,
        }
    }
}

impl SignatureOpt {
    pub fn validate(&self) -> Result<()> {
        if self.x_threshold < 1 {
            bail!("invalid argument: x-threshold must be at least 1 (got {})", self.x_threshold);
        }
        Ok(())
    }
}

/// 完整结果：解析出的序列（未补齐）与每个片段的签名
#[derive(Debug, Clone, Serialize)]
pub struct SignatureReport {
    pub model: ConservationModel,
    pub x_threshold: usize,
    pub entries: Vec<Entry>,
    pub signatures: Vec<MotifPattern>,
}

impl SignatureReport {
    /// 每个片段以 `-` 连接的可读字符串
    pub fn patterns(&self) -> Vec<String> {
        self.signatures.iter().map(ToString::to_string).collect()
    }
}

/// 校验参数后对输入序列运行整条流水线
pub fn find_signatures(entries: Vec<Entry>, opt: &SignatureOpt, catalog: &Catalog) -> Result<Vec<MotifPattern>> {
    opt.validate()?;
    let aln = Alignment::new(entries);
    signatures_for_alignment(&aln, opt, catalog)
}

/// 流水线主体，要求 `aln` 已补齐且 `opt` 已校验
pub fn signatures_for_alignment(aln: &Alignment, opt: &SignatureOpt, catalog: &Catalog) -> Result<Vec<MotifPattern>> {
    if aln.is_empty() {
        log::debug!("empty alignment, no signatures");
        return Ok(Vec::new());
    }
    log::debug!(
        "alignment: {} entries, width {}, model {}",
        aln.entries.len(),
        aln.width,
        opt.model
    );

    let columns = if opt.threads > 1 {
        column_pool(opt.threads)?.install(|| classify_columns_par(aln, opt.model, catalog))
    } else {
        classify_columns(aln, opt.model, catalog)
    };

    let runs = group_runs(&columns);
    log::debug!("{} columns grouped into {} runs", columns.len(), runs.len());
    for r in &runs {
        log::trace!("run {} x{} [{}, {}]", r.token(), r.len, r.start, r.end);
    }

    let runs = trim_edges(runs);
    let segments = split_segments(&runs, opt.x_threshold);
    log::debug!(
        "{} runs after trimming, {} segments at x-threshold {}",
        runs.len(),
        segments.len(),
        opt.x_threshold
    );

    Ok(format_segments(&segments, aln, catalog))
}

fn column_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow!("cannot start thread pool: {}", e))
}

/// 解析 FASTA 文本并生成签名报告
pub fn process_fasta(text: &str, opt: &SignatureOpt, catalog: &Catalog) -> Result<SignatureReport> {
    let entries = fasta::parse_fasta(text)?;
    let signatures = find_signatures(entries.clone(), opt, catalog)?;
    Ok(SignatureReport {
        model: opt.model,
        x_threshold: opt.x_threshold,
        entries,
        signatures,
    })
}
