//! Property tests for the log-text metric extractors

use calibrar::extract::{parse_gflops, parse_stream_triad};
use proptest::prelude::*;

proptest! {
    /// Any value formatted the way the benchmark prints it is extracted back.
    #[test]
    fn gflops_round_trips_through_report_text(value in 0.0f64..100_000.0) {
        let text = format!("DGEMM n=1024 best_s=0.123456 GFLOP/s={value:.2}");
        let extracted = parse_gflops(&text).expect("formatted token must extract");
        // Compare against the 2-decimal rendering, not the raw value.
        let expected: f64 = format!("{value:.2}").parse().unwrap();
        prop_assert!((extracted - expected).abs() < 1e-9);
    }

    /// Text without the token never produces a value.
    #[test]
    fn gflops_absent_token_yields_none(text in "[a-zA-Z0-9 .\n]{0,200}") {
        prop_assume!(!text.contains("GFLOP/s="));
        prop_assert!(parse_gflops(&text).is_none());
    }

    /// A Triad line with a numeric last column is always extracted.
    #[test]
    fn triad_last_column_round_trips(value in 0.0f64..1_000_000.0) {
        let log = format!("Copy 1.0 2.0\nTriad {value:.2} 0.01 0.01 0.01\n");
        let extracted = parse_stream_triad(&log).expect("triad line must extract");
        prop_assert!((extracted - 0.01).abs() < 1e-12);

        let log = format!("Copy 1.0 2.0\nTriad {value:.2}\n");
        let extracted = parse_stream_triad(&log).expect("triad line must extract");
        let expected: f64 = format!("{value:.2}").parse().unwrap();
        prop_assert!((extracted - expected).abs() < 1e-9);
    }

    /// Logs with no Triad-leading line never produce a value.
    #[test]
    fn triad_absent_line_yields_none(lines in proptest::collection::vec("[a-su-zA-SU-Z ]{0,40}", 0..10)) {
        let log = lines.join("\n");
        prop_assert!(parse_stream_triad(&log).is_none());
    }
}
