use period_detector::config::load_config;
use period_detector::store::{JsonFileStore, LightCurveStore};
use period_detector::synth::{combine, generate_base};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => return Err("usage: synth_demo <config.json>".to_string()),
    };
    let synth = config
        .synth
        .as_ref()
        .ok_or("Config carries no synthetic parameters")?;

    let base = generate_base(&synth.base).map_err(|e| format!("Generation failed: {e}"))?;
    let (series, applied) =
        combine(&base, &synth.variations).map_err(|e| format!("Variation failed: {e}"))?;

    println!("Generated {} samples", series.len());
    println!("Applied variations: {applied:?}");
    println!("  base flux min: {:.6}", min(base.flux()));
    println!("  varied flux min: {:.6}", min(series.flux()));
    println!("  varied flux max: {:.6}", max(series.flux()));

    if let Some(root) = &config.output.store_root {
        let mut store = JsonFileStore::new(root);
        store
            .put_series(&config.target, &config.dataset, &series)
            .map_err(|e| format!("Failed to persist series: {e}"))?;
        println!(
            "Series persisted under {}/{}/{}",
            root.display(),
            config.target,
            config.dataset
        );
    }

    Ok(())
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
