mod common;

use common::synthetic_curve::transit_curve;
use period_detector::{PeriodSearcher, SearchParams};

#[test]
fn champion_never_regresses_across_rounds() {
    let series = transit_curve(3.7);
    let searcher = PeriodSearcher::new(SearchParams {
        bounds: (2.0, 5.0),
        max_rounds: 6,
        initial_resolution_exponent: 2,
        ..Default::default()
    });
    let report = searcher
        .search_with_diagnostics(&series)
        .expect("search must succeed");

    // The running best across rounds is monotone non-increasing, and the
    // reported champion equals the minimum over all rounds.
    let mut running = f64::INFINITY;
    for round in &report.diagnostics.rounds {
        let next = running.min(round.best_score);
        assert!(next <= running);
        running = next;
    }
    assert_eq!(report.outcome.best_score, running);
    assert!(report
        .diagnostics
        .rounds
        .iter()
        .any(|r| r.best_period == report.outcome.best_period));
}

#[test]
fn periodogram_is_the_final_round_grid() {
    let series = transit_curve(2.6);
    let searcher = PeriodSearcher::new(SearchParams {
        bounds: (2.0, 3.0),
        max_rounds: 3,
        initial_resolution_exponent: 2,
        ..Default::default()
    });
    let report = searcher
        .search_with_diagnostics(&series)
        .expect("search must succeed");

    let last = report.diagnostics.rounds.last().unwrap();
    assert_eq!(report.periodogram.len(), last.candidates);
    assert_eq!(report.outcome.final_resolution, last.resolution);
    // Grid step of the periodogram matches the reported final resolution.
    let step = report.periodogram.periods[1] - report.periodogram.periods[0];
    assert!((step - report.outcome.final_resolution).abs() < 1e-12);
}

#[test]
fn oversized_grid_is_rejected_before_scoring() {
    let series = transit_curve(2.6);
    let searcher = PeriodSearcher::new(SearchParams {
        bounds: (0.1, 1000.0),
        initial_resolution_exponent: 6,
        max_grid_len: 100_000,
        ..Default::default()
    });
    assert!(searcher.search(&series).is_err());
}

#[test]
fn malformed_parameters_are_rejected() {
    let series = transit_curve(2.6);
    for params in [
        SearchParams {
            bounds: (3.0, 2.0),
            ..Default::default()
        },
        SearchParams {
            bounds: (0.0, 2.0),
            ..Default::default()
        },
        SearchParams {
            max_rounds: 0,
            ..Default::default()
        },
    ] {
        assert!(PeriodSearcher::new(params).search(&series).is_err());
    }
}

#[test]
fn best_period_stays_inside_the_bounds() {
    let series = transit_curve(4.3);
    let searcher = PeriodSearcher::new(SearchParams {
        bounds: (2.0, 5.0),
        max_rounds: 4,
        ..Default::default()
    });
    let (outcome, _) = searcher.search(&series).expect("search must succeed");
    assert!(outcome.best_period >= 2.0 - 1e-9 && outcome.best_period <= 5.0 + 1e-9);
}
