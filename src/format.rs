//! Display formatting helpers.

/// Format a cumulative funding amount for display, e.g. `€75.0M`, `€1.2B`.
///
/// Exact ties round away from zero (2_500 is €3K, not €2K), matching how the
/// amounts have always been displayed.
pub fn format_funding(amount_eur: u64) -> String {
    if amount_eur >= 1_000_000_000 {
        format!("€{:.1}B", round_tenth(amount_eur as f64 / 1_000_000_000.0))
    } else if amount_eur >= 1_000_000 {
        format!("€{:.1}M", round_tenth(amount_eur as f64 / 1_000_000.0))
    } else if amount_eur >= 1_000 {
        format!("€{:.0}K", (amount_eur as f64 / 1_000.0).round())
    } else {
        format!("€{amount_eur}")
    }
}

// `{:.1}` on its own rounds ties to even; pre-rounding with f64::round keeps
// ties going away from zero.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
