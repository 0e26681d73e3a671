use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rc_core::Image;
use rc_corr::AngularCorrelator;
use rc_polar::PolarImage;

fn bench_correlate_128_radii(c: &mut Criterion) {
    let img = Image::from_fn(360, 128, |a, r| {
        ((a * 6) as f64).to_radians().cos() * (1.0 + r as f64 / 128.0)
    });
    let polar = PolarImage::from_image(img).expect("valid polar image");
    let mut correlator = AngularCorrelator::new(360).expect("non-empty rows");

    c.bench_function("correlate_128x360", |b| {
        b.iter(|| {
            let out = correlator.correlate(black_box(&polar)).expect("correlate");
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_correlate_128_radii);
criterion_main!(benches);
