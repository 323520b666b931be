use std::borrow::Cow;

/// Reads a numeric literal as an `f64`.
///
/// The lexer accepts literals with a missing integer part (`.5`) or a missing
/// fractional part (`5.`). The absent side is read as `0`, so `.5` is `0.5`
/// and `5.` is `5.0`.
///
/// ## Parameters
/// - `literal`: The literal exactly as it appeared in the source.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the literal is not a decimal number.
///
/// ## Example
/// ```
/// use reckon::util::num::parse_real;
///
/// assert_eq!(parse_real(".5"), Some(0.5));
/// assert_eq!(parse_real("5."), Some(5.0));
/// assert_eq!(parse_real("12.25"), Some(12.25));
/// assert_eq!(parse_real("."), None);
/// ```
#[must_use]
pub fn parse_real(literal: &str) -> Option<f64> {
    if literal.is_empty() || literal == "." {
        return None;
    }

    let mut normalized = Cow::Borrowed(literal);
    if normalized.starts_with('.') {
        normalized = Cow::Owned(format!("0{normalized}"));
    }
    if normalized.ends_with('.') {
        normalized.to_mut().push('0');
    }

    normalized.parse().ok()
}

/// Renders an evaluation result as its canonical decimal string.
///
/// Integral values are shown without a fractional part and exponent notation
/// is never used: `2.0` renders as `2`, `2.5` as `2.5`.
///
/// ## Example
/// ```
/// use reckon::util::num::format_real;
///
/// assert_eq!(format_real(2.0), "2");
/// assert_eq!(format_real(2.5), "2.5");
/// assert_eq!(format_real(-0.25), "-0.25");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    value.to_string()
}
