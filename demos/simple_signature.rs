//! 演示如何在 library 模式下使用 prosite-rs 推导签名。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_signature
//! ```

use prosite_rs::motif::{self, ConservationModel, SignatureOpt};
use prosite_rs::residue::Catalog;

const FASTA: &str = "\
>sp|P1|zinc_finger_a
CPECGKSFSQSSNLQKHQRTH
>sp|P2|zinc_finger_b
CPVCGKAFRQSSALIKHQRIH
>sp|P3|zinc_finger_c
CKECGKAFSRSSHLIRHQ
";

fn main() -> anyhow::Result<()> {
    let cat = Catalog::standard();

    for model in [ConservationModel::Classification, ConservationModel::Blosum62] {
        let opt = SignatureOpt { model, x_threshold: 3, ..SignatureOpt::default() };
        let report = motif::process_fasta(FASTA, &opt, cat)?;

        println!("模型: {} (x-threshold={})", model, opt.x_threshold);
        println!("序列数: {}", report.entries.len());
        for (i, pattern) in report.patterns().iter().enumerate() {
            println!("  签名{}: {}", i + 1, pattern);
        }
    }

    println!("\n完成！");
    Ok(())
}
