use std::path::Path;

/// Title used when none is typed: the file name without its last extension.
///
/// Only the final `.ext` is dropped, so `beach.2024.png` keeps `beach.2024`
/// and a dotfile such as `.hidden` stays whole.
pub fn title_from_file_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
