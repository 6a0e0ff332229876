use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use normsim::evaluate::*;
use normsim::plot::{PlotSettings, RenderRequest};
use normsim::query::*;

pub fn bench_evaluate(c: &mut Criterion) {
    use rand::prelude::*;
    use rand_distr::StandardNormal;
    use rand_xoshiro::Xoroshiro128Plus;

    let rng = Xoroshiro128Plus::seed_from_u64(12344);
    let xs: Vec<f64> = rng.sample_iter(StandardNormal).take(10000).collect();
    let params = DistributionParameters::new(0.0, 1.0).unwrap();

    c.bench_function("evaluate tail queries", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(evaluate(&params, &Query::LessOrEqual(black_box(x))));
            }
        })
    });
}

pub fn bench_render_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("Render request");
    let params = DistributionParameters::new(5.0, 2.0).unwrap();
    let query = Query::IntervalInclusive(3.0, 8.0);

    for n in [1, 2, 5, 10] {
        let n = n * 1000;
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, n| {
            let settings = PlotSettings::new(*n, 4.0).unwrap();
            b.iter(|| RenderRequest::build(&params, &query, &settings))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_render_request);
criterion_main!(benches);
