//! Display formatting for sizes, limits and expirations.

use chrono::{DateTime, Utc};

use ferry_entity::{ExpirationTime, UploadCountLimit, UploadSizeLimit};

const UNLIMITED: &str = "Unlimited";

/// Format a byte count with 1024-based units, e.g. `"1.50 kB"`.
pub fn human_readable_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.2} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Format a per-file size limit.
pub fn format_size_limit(limit: UploadSizeLimit) -> String {
    match limit {
        UploadSizeLimit::Limited(bytes) => human_readable_size(bytes),
        UploadSizeLimit::Unlimited => UNLIMITED.to_string(),
    }
}

/// Format an upload count limit.
pub fn format_count_limit(limit: UploadCountLimit) -> String {
    match limit {
        UploadCountLimit::Limited(count) => count.to_string(),
        UploadCountLimit::Unlimited => UNLIMITED.to_string(),
    }
}

/// Format an expiration relative to `now`, e.g. `"2024-03-17 (7 days)"`.
pub fn format_expiration(expiration: ExpirationTime, now: DateTime<Utc>) -> String {
    match expiration {
        ExpirationTime::Never => "Never".to_string(),
        ExpirationTime::At(at) => {
            let seconds = (at - now).num_seconds();
            let days = (seconds.unsigned_abs() as f64 / 86_400.0).round();
            let suffix = if seconds < 0 { " ago" } else { "" };
            format!("{} ({days:.0} days{suffix})", at.format("%Y-%m-%d"))
        }
    }
}
