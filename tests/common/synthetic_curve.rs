use period_detector::series::SampleSeries;
use period_detector::synth::{generate_base, BaseCurve};

/// Generates a clean box-transit curve with the given period.
pub fn transit_curve(period: f64) -> SampleSeries {
    generate_base(&BaseCurve {
        duration: 50.0,
        dt: 0.05,
        period,
        depth: 0.02,
        transit_duration: 0.5,
    })
    .expect("curve parameters must be valid")
}

/// Generates a curve with a deterministic pseudo-noise floor layered on the
/// transits, for tests that need a non-trivial score landscape.
pub fn noisy_transit_curve(period: f64, noise: f64) -> SampleSeries {
    let clean = transit_curve(period);
    let flux = clean
        .time()
        .iter()
        .zip(clean.flux())
        .map(|(&t, &f)| f + noise * (t * 12.9898).sin() * (t * 78.233).cos())
        .collect();
    SampleSeries::new(clean.time().to_vec(), flux).expect("noisy curve stays valid")
}
