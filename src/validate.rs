// Input validators. Each one is a pure predicate; the calling routine
// decides what to print and stops early on rejection.

/// Accepts a non-empty string made only of decimal digits. No trimming:
/// `" 3"` is rejected just like `"3a"`.
pub fn is_numeric_id(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

/// Case-insensitive y/n answer, surrounding whitespace ignored.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Returns the trimmed text, or `None` when nothing is left.
pub fn non_empty(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
