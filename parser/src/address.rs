//! Helpers for splitting raw address fields.

/// Splits an address of the form `hi.lo` at the first dot.
///
/// Returns the part before the dot and, when present, the part after it.
pub fn split_dotted(address: &str) -> (&str, Option<&str>) {
    match address.split_once('.') {
        Some((hi, lo)) => (hi, Some(lo)),
        None => (address, None),
    }
}

/// Separates the leading letters from the trailing digits of a compact
/// address such as `IW64` or `M103`.
///
/// Characters that are neither ASCII letters nor digits are dropped.
pub fn split_letters_digits(address: &str) -> (String, String) {
    let mut letters = String::new();
    let mut digits = String::new();
    for c in address.chars() {
        if c.is_ascii_alphabetic() {
            letters.push(c);
        } else if c.is_ascii_digit() {
            digits.push(c);
        }
    }
    (letters, digits)
}
