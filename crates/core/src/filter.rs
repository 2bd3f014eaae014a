//! Keystroke filters for the checkout form.
//!
//! A keystroke that fails its field's predicate is cancelled before it
//! reaches the field value.

/// Whether `c` may be typed into the customer name field.
///
/// Accepts ASCII letters, the accented Latin-1 letters (`À` through `ÿ`,
/// excluding the `×` and `÷` signs that sit inside that block) and
/// whitespace.
///
/// ```
/// use kesley_cakes_core::filter::is_name_char;
///
/// assert!(is_name_char('a'));
/// assert!(is_name_char('ç'));
/// assert!(is_name_char(' '));
/// assert!(!is_name_char('7'));
/// assert!(!is_name_char('<'));
/// ```
#[must_use]
pub fn is_name_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ÿ') || c.is_whitespace()
}

/// Whether `c` may be typed into the phone or tax ID field.
#[must_use]
pub const fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}
