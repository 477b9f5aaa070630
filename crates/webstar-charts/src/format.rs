#![forbid(unsafe_code)]

//! Compact number labels for analytics totals.

/// `1.2M` / `3.4K` style label; smaller values print as-is.
#[must_use]
pub fn format_compact(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        n.to_string()
    }
}
