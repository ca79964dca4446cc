//! Presentation helpers for sizes, timestamps and prefix paths

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human readable size using 1024-based units, e.g. `1.5 KB`
pub fn format_size(bytes: i64) -> String {
    if bytes <= 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "-".to_string(),
    }
}

/// One navigable segment of the current prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub prefix: String,
}

/// Split `prefix` into cumulative segments: `a/b/` -> `a/`, `a/b/`
pub fn breadcrumbs(prefix: &str) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    let mut current = String::new();

    for part in prefix.split('/').filter(|p| !p.is_empty()) {
        current.push_str(part);
        current.push('/');
        crumbs.push(Breadcrumb {
            name: part.to_string(),
            prefix: current.clone(),
        });
    }

    crumbs
}

/// Prefix one level up, `Some("")` for the bucket root, `None` when already
/// at the root
pub fn parent_prefix(prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    let trimmed = prefix.strip_suffix('/').unwrap_or(prefix);
    match trimmed.rfind('/') {
        Some(idx) => Some(trimmed[..=idx].to_string()),
        None => Some(String::new()),
    }
}

/// Name of a common prefix relative to the folder being shown
pub fn folder_display_name(folder: &str, prefix: &str) -> String {
    let relative = folder.strip_prefix(prefix).unwrap_or(folder);
    relative.strip_suffix('/').unwrap_or(relative).to_string()
}

/// Name of an object key relative to the folder being shown
pub fn file_display_name(key: &str, prefix: &str) -> String {
    key.strip_prefix(prefix).unwrap_or(key).to_string()
}
