use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prosite_rs::motif::{self, Alignment, ConservationModel, Entry, SignatureOpt};
use prosite_rs::residue::Catalog;

fn make_alignment(n_entries: usize, len: usize) -> Alignment {
    let alphabet = b"ACDEFGHIKLMNPQRSTVWY-";
    let mut x: u32 = 42;
    let entries = (0..n_entries)
        .map(|i| {
            let seq: Vec<u8> = (0..len)
                .map(|j| {
                    x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    // 每隔 7 列放一个保守残基
                    if j % 7 == 0 { b'G' } else { alphabet[(x >> 16) as usize % alphabet.len()] }
                })
                .collect();
            Entry::new(format!("seq{}", i), seq)
        })
        .collect();
    Alignment::new(entries)
}

fn bench_classify_columns(c: &mut Criterion) {
    let aln = make_alignment(64, 2_000);
    let cat = Catalog::standard();

    c.bench_function("classify_columns_64x2000", |b| {
        b.iter(|| {
            black_box(motif::classify_columns(black_box(&aln), ConservationModel::Classification, cat));
        })
    });
    c.bench_function("classify_columns_par_64x2000", |b| {
        b.iter(|| {
            black_box(motif::classify_columns_par(black_box(&aln), ConservationModel::Blosum62, cat));
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let aln = make_alignment(32, 1_000);
    let cat = Catalog::standard();
    let opt = SignatureOpt { x_threshold: 5, ..SignatureOpt::default() };

    c.bench_function("signatures_32x1000", |b| {
        b.iter(|| {
            black_box(motif::signatures_for_alignment(black_box(&aln), &opt, cat));
        })
    });
}

criterion_group!(benches, bench_classify_columns, bench_full_pipeline);
criterion_main!(benches);
