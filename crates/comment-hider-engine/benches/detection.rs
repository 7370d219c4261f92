use comment_hider_engine::{ColumnUnit, CommentDetector};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");
    group.sample_size(10);

    let content = common::generate_python_source(200);
    for (label, unit) in [("utf16", ColumnUnit::Utf16), ("byte", ColumnUnit::Byte)] {
        let detector = CommentDetector::new(unit);
        group.bench_function(label, |b| {
            b.iter(|| {
                let spans = detector.detect(std::hint::black_box(&content));
                std::hint::black_box(spans);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detection);
criterion_main!(benches);
