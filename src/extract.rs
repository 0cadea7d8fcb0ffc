//! Metric extraction from benchmark-tool log text
//!
//! One narrow function per upstream log format, so format drift in a
//! benchmark tool is absorbed here without touching aggregation logic.
//! Extraction is best-effort: unmatched or malformed text yields `None`,
//! never an error.

use regex::Regex;

/// Extract a GFLOP/s figure from DGEMM-style log text
///
/// Matches the first occurrence of `GFLOP/s=` immediately followed by a
/// decimal number with an optional fractional part.
///
/// # Examples
///
/// ```
/// use calibrar::extract::parse_gflops;
///
/// assert_eq!(parse_gflops("DGEMM n=1024 best_s=0.123456 GFLOP/s=17.39"), Some(17.39));
/// assert_eq!(parse_gflops("no throughput here"), None);
/// ```
#[must_use]
pub fn parse_gflops(text: &str) -> Option<f64> {
    let re = Regex::new(r"GFLOP/s=([0-9]+(?:\.[0-9]+)?)").unwrap();
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract the Triad bandwidth (MB/s) from STREAM-style log text
///
/// Scans for the first line whose trimmed text starts with `triad`
/// case-insensitively (real STREAM output labels the row `Triad:`), then
/// parses the last whitespace-separated token on that line. The first
/// matching line wins; a malformed trailing token yields `None` without
/// consulting later lines.
///
/// # Examples
///
/// ```
/// use calibrar::extract::parse_stream_triad;
///
/// let log = "Copy 10000.0 0.01 0.01 0.01\nTriad 5678.90 0.01 0.01 0.01\n";
/// assert_eq!(parse_stream_triad(log), Some(5678.90));
/// ```
#[must_use]
pub fn parse_stream_triad(text: &str) -> Option<f64> {
    for line in text.lines() {
        let trimmed = line.trim();
        let is_triad = trimmed
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("triad"));
        if is_triad {
            return trimmed.split_whitespace().last()?.parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // parse_gflops
    // ========================================================================

    #[test]
    fn test_parse_gflops_embedded() {
        assert_eq!(parse_gflops("... GFLOP/s=123.45 ..."), Some(123.45));
    }

    #[test]
    fn test_parse_gflops_integer_value() {
        assert_eq!(parse_gflops("GFLOP/s=250"), Some(250.0));
    }

    #[test]
    fn test_parse_gflops_first_match_wins() {
        let text = "run1 GFLOP/s=10.5\nrun2 GFLOP/s=99.9\n";
        assert_eq!(parse_gflops(text), Some(10.5));
    }

    #[test]
    fn test_parse_gflops_no_token() {
        assert_eq!(parse_gflops("MFLOP/s=123.45 throughput"), None);
        assert_eq!(parse_gflops(""), None);
    }

    #[test]
    fn test_parse_gflops_token_without_number() {
        assert_eq!(parse_gflops("GFLOP/s=fast"), None);
    }

    #[test]
    fn test_parse_gflops_multiline_log() {
        let log = "OpenBLAS DGEMM benchmark\nthreads=16\nDGEMM n=4096 best_s=1.234567 GFLOP/s=111.32\n";
        assert_eq!(parse_gflops(log), Some(111.32));
    }

    // ========================================================================
    // parse_stream_triad
    // ========================================================================

    #[test]
    fn test_parse_stream_triad_standard_table() {
        let log = "Function    Best Rate MB/s  Avg time     Min time     Max time\n\
                   Copy:           11000.0     0.014     0.014     0.015\n\
                   Scale:          10500.0     0.015     0.015     0.016\n\
                   Add:             9800.0     0.016     0.016     0.017\n\
                   Triad:           9700.5     0.017     0.016     0.018\n";
        assert_eq!(parse_stream_triad(log), Some(0.018));
    }

    #[test]
    fn test_parse_stream_triad_bandwidth_last_column() {
        let log = "Triad       5678.90\n";
        assert_eq!(parse_stream_triad(log), Some(5678.90));
    }

    #[test]
    fn test_parse_stream_triad_case_insensitive() {
        assert_eq!(parse_stream_triad("TRIAD 1234.5\n"), Some(1234.5));
        assert_eq!(parse_stream_triad("triad 1234.5\n"), Some(1234.5));
    }

    #[test]
    fn test_parse_stream_triad_leading_whitespace() {
        assert_eq!(parse_stream_triad("   Triad 42.0\n"), Some(42.0));
    }

    #[test]
    fn test_parse_stream_triad_no_triad_line() {
        let log = "Copy 10000.0\nScale 9000.0\n";
        assert_eq!(parse_stream_triad(log), None);
    }

    #[test]
    fn test_parse_stream_triad_first_line_wins_even_if_malformed() {
        // The first Triad line is the winner; its malformed trailing token
        // yields no value and later Triad lines are not consulted.
        let log = "Triad abc\nTriad 999.9\n";
        assert_eq!(parse_stream_triad(log), None);
    }

    #[test]
    fn test_parse_stream_triad_bare_label() {
        assert_eq!(parse_stream_triad("Triad\n"), None);
    }

    #[test]
    fn test_parse_stream_triad_triad_mid_line_ignored() {
        assert_eq!(parse_stream_triad("best Triad 42.0\n"), None);
    }

    #[test]
    fn test_parse_stream_triad_empty() {
        assert_eq!(parse_stream_triad(""), None);
    }
}
