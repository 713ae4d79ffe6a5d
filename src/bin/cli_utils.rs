use std::fmt::Display;
use std::fmt::Write;

/// Join values with single spaces, no trailing separator.
pub fn join_spaced<T: Display>(values: &[T]) -> String {
    let mut buf = String::with_capacity(values.len() * 4);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(buf, "{}", value);
    }
    buf
}

/// Print a count line followed by the space-separated values.
pub fn print_counted<T: Display>(values: &[T]) {
    println!("{}", values.len());
    println!("{}", join_spaced(values));
}

/// Format a byte count with binary units.
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
