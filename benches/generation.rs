//! Performance measurement for complete banner generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use bannergen::{BannerConfig, BannerPipeline, StylePreset};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures one full Flag -> Pattern -> Sigil run at the default geometry
fn bench_full_banner(c: &mut Criterion) {
    c.bench_function("full_banner_32x48", |b| {
        b.iter(|| {
            let Ok(config) = BannerConfig::preset(StylePreset::Classic, 32, 48) else {
                return;
            };
            let banner = BannerPipeline::new(config).generate();
            black_box(banner.coverage());
        });
    });
}

criterion_group!(benches, bench_full_banner);
criterion_main!(benches);
