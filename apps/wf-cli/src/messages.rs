//! User-friendly message formatting helpers
//!
//! Functions for formatting the final result of a command run, with
//! optional detail lines.

/// Print success message with detail lines
pub fn print_success(message: &str, details: &[&str]) {
    println!("✓ {}", message);
    for detail in details {
        println!("  {}", detail);
    }
}

/// Print error message with suggestions
pub fn print_error(message: &str, suggestions: &[&str]) {
    eprintln!("✗ {}", message);
    if !suggestions.is_empty() {
        eprintln!();
        for suggestion in suggestions {
            eprintln!("  {}", suggestion);
        }
    }
}
