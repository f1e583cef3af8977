use period_detector::config::{load_config, RuntimeConfig};
use period_detector::diagnostics::SearchReport;
use period_detector::series::SampleSeries;
use period_detector::store::{JsonFileStore, LightCurveStore};
use period_detector::synth::{combine, generate_base};
use period_detector::PeriodSearcher;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => {
            return Err(
                "usage: period_demo <config.json>\n\
                 The config selects the input (store key or synthetic parameters), \
                 the search bounds, and the output destinations."
                    .to_string(),
            )
        }
    };

    let series = obtain_series(&config)?;
    println!(
        "Input series: {} samples spanning {:.3} time units",
        series.len(),
        series.time_span()
    );

    let searcher = PeriodSearcher::new(config.search.clone());
    let report = searcher
        .search_with_diagnostics(&series)
        .map_err(|e| format!("Search failed: {e}"))?;

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(root) = &config.output.store_root {
        let mut store = JsonFileStore::new(root);
        store
            .put_periodogram(&config.target, &config.dataset, &report.periodogram)
            .map_err(|e| format!("Failed to persist periodogram: {e}"))?;
        println!(
            "Periodogram persisted under {}/{}/{}",
            root.display(),
            config.target,
            config.dataset
        );
    }

    Ok(())
}

/// Load the series from the store, or generate it when the config carries
/// synthetic parameters. A configured store key that resolves to nothing is
/// fatal: there is no sense in searching a curve that does not exist.
fn obtain_series(config: &RuntimeConfig) -> Result<SampleSeries, String> {
    if let Some(synth) = &config.synth {
        let base = generate_base(&synth.base).map_err(|e| format!("Generation failed: {e}"))?;
        let (series, applied) =
            combine(&base, &synth.variations).map_err(|e| format!("Variation failed: {e}"))?;
        if applied.is_empty() {
            println!("Generated base curve (no variations)");
        } else {
            println!("Generated curve with variations: {applied:?}");
        }
        return Ok(series);
    }

    let root = config
        .output
        .store_root
        .as_ref()
        .ok_or("Config has neither synthetic parameters nor a store root")?;
    let store = JsonFileStore::new(root);
    let series = store
        .get_series(&config.target, &config.dataset)
        .map_err(|e| format!("Store read failed: {e}"))?;
    series.ok_or_else(|| {
        format!(
            "No series stored under {}/{}",
            config.target, config.dataset
        )
    })
}

fn print_text_summary(report: &SearchReport) {
    let outcome = &report.outcome;
    println!("\nSearch summary");
    println!("  best_period: {:.8}", outcome.best_period);
    println!("  best_score: {:.6e}", outcome.best_score);
    println!("  final_resolution: {:.1e}", outcome.final_resolution);
    println!("  rounds: {}", outcome.rounds);
    println!("  latency_ms: {:.3}", outcome.latency_ms);

    let diag = &report.diagnostics;
    println!("\nRounds");
    for round in &diag.rounds {
        println!(
            "  R{}: [{:.6}, {:.6}] res={:.1e} grid={} window={} best={:.6} score={:.3e} ({:.3} ms)",
            round.round,
            round.interval_low,
            round.interval_high,
            round.resolution,
            round.candidates,
            round.window,
            round.best_period,
            round.best_score,
            round.elapsed_ms
        );
    }
    println!(
        "\nTimings (ms): score={:.3} smooth={:.3} total={:.3}",
        diag.score_ms, diag.smooth_ms, diag.total_latency_ms
    );
    println!(
        "Periodogram: {} points around {:.6}",
        report.periodogram.len(),
        report.periodogram.best_period
    );
}

fn write_json_file<T: serde::Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
