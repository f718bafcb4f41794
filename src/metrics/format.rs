//! Formatting helpers for durations, counts and rates.

/// Formats a duration in seconds with an appropriate unit (ns, µs, ms, s)
pub fn format_duration(secs: f64) -> String {
    if secs >= 1.0 {
        format!("{:.3}s", secs)
    } else if secs >= 1e-3 {
        format!("{:.3}ms", secs * 1e3)
    } else if secs >= 1e-6 {
        format!("{:.3}µs", secs * 1e6)
    } else {
        format!("{:.0}ns", secs * 1e9)
    }
}

/// Formats a number with appropriate suffix (K, M, B)
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000_000 {
        format!("{:.2}B", count as f64 / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.2}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        format!("{}", count)
    }
}

/// Formats a throughput of `count` operations over `secs` seconds
pub fn format_rate(count: u64, secs: f64) -> String {
    if secs <= 0.0 {
        return "n/a".to_string();
    }
    let per_sec = count as f64 / secs;
    if per_sec >= 1_000_000_000.0 {
        format!("{:.2}B/s", per_sec / 1_000_000_000.0)
    } else if per_sec >= 1_000_000.0 {
        format!("{:.2}M/s", per_sec / 1_000_000.0)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}K/s", per_sec / 1_000.0)
    } else {
        format!("{:.0}/s", per_sec)
    }
}
