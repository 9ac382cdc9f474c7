/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";

/// Grey out cells that carry no usable value ("Sin registro" or blank).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == crate::utils::time::NO_RECORD {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Subtotal rows are printed bold so the weekly blocks stand out.
pub fn bold(value: &str) -> String {
    format!("{BOLD}{value}{RESET}")
}
