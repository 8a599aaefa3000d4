/// Keep only the ASCII digits of the input, in order.
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of every ASCII digit in the input. Other characters are skipped.
pub fn to_digits(input: &str) -> Vec<u32> {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// True if the input is non-empty and made of a single repeated character
/// (e.g. "11111111111").
pub fn is_repeated_digit(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Render a digit value as its ASCII character. Values above 9 have no
/// single-character representation.
pub(crate) fn digit_char(value: u32) -> Option<char> {
    char::from_digit(value, 10)
}
