use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazetrace::{generate, GeneratorKind};

const WIDTH: usize = 60;
const HEIGHT: usize = 40;

fn bench_generator(c: &mut Criterion, name: &str, kind: GeneratorKind) {
    c.bench_function(name, |b| {
        b.iter(|| {
            generate(
                black_box(kind),
                black_box(WIDTH),
                black_box(HEIGHT),
                Some(7),
            )
            .unwrap()
        })
    });
}

pub fn depth_first(c: &mut Criterion) {
    bench_generator(c, "depth_first_60x40", GeneratorKind::DepthFirst);
}

pub fn binary_tree(c: &mut Criterion) {
    bench_generator(c, "binary_tree_60x40", GeneratorKind::BinaryTree);
}

pub fn kruskal(c: &mut Criterion) {
    bench_generator(c, "kruskal_60x40", GeneratorKind::Kruskal);
}

pub fn prim(c: &mut Criterion) {
    bench_generator(c, "prim_60x40", GeneratorKind::Prim);
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = depth_first, binary_tree, kruskal, prim}
criterion_main!(benches);
