//! Formatting utilities for sizes, durations, and generation summaries.

use console::Term;
use nsindex::GeneratedIndex;
use owo_colors::{OwoColorize, Stream::Stderr, Style};
use std::time::Duration;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use nsindex_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nsindex_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Print a summary of a generated index to stderr.
pub fn print_index_summary(index: &GeneratedIndex, elapsed: Duration) {
    if super::is_quiet() {
        return;
    }
    let width = Term::stderr().size().1 as usize;
    let rule = "─".repeat(width.clamp(20, 60));
    let stats = &index.stats;
    let bullet = "▸".if_supports_color(Stderr, |t| t.blue());
    let root = format!("root: {}", index.root);

    eprintln!(
        "\n{}",
        "Index Summary".if_supports_color(Stderr, |t| t.style(Style::new().bold().underline()))
    );
    eprintln!("{}", rule);
    eprintln!(
        "  {} {}",
        bullet,
        root.if_supports_color(Stderr, |t| t.style(Style::new().bright_white().bold()))
    );
    eprintln!("  {} {} symbols", bullet, stats.symbols);
    eprintln!("  {} {} imports", bullet, stats.imports);
    eprintln!("  {} {} namespaces", bullet, stats.namespaces);
    eprintln!("  {} {} exports", bullet, stats.exports);
    eprintln!("{}", rule);

    let size = format_size(index.code.len() as u64);
    let duration = format_duration(elapsed);
    eprintln!(
        "  {} {} in {}",
        "Total:".if_supports_color(Stderr, |t| t.bold()),
        size.if_supports_color(Stderr, |t| t.green()),
        duration.if_supports_color(Stderr, |t| t.green())
    );
}
