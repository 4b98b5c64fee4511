use std::io::{self, Write};

pub fn log_line(line: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", line);
}

pub fn log_section(title: &str) {
    log_line(&format!("\n=== {} ===", title));
}

pub fn log_saved(label: &str, detail: &str) {
    log_line(&format!("  Saved: {} ({})", label, detail));
}

/// Writes the error and every cause in its source chain to stderr.
pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "ERROR: {}: {}", prefix, e);
    let mut cause = e.source();
    while let Some(c) = cause {
        let _ = writeln!(err, "  caused by: {}", c);
        cause = c.source();
    }
}

pub fn log_hint(line: &str) {
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "hint: {}", line);
}
