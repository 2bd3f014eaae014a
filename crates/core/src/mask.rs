//! Progressive input masks for Brazilian phone numbers and CPF/CNPJ.
//!
//! Every function takes whatever the field currently holds, throws away the
//! non-digits and rebuilds the display string from scratch. Feeding a mask
//! its own output gives the same output back, so they can run on every
//! keystroke.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum digits in a phone number (area code plus nine-digit mobile).
pub const PHONE_MAX_DIGITS: usize = 11;

/// Digits in a phone number without the mobile prefix.
pub const LANDLINE_DIGITS: usize = 10;

/// Digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Digits in a CNPJ.
pub const CNPJ_DIGITS: usize = 14;

/// Length of a fully masked CPF, `000.000.000-00`.
pub const CPF_MASKED_LEN: u32 = 14;

/// Length of a fully masked CNPJ, `00.000.000/0000-00`.
pub const CNPJ_MASKED_LEN: u32 = 18;

// CPF: 000.000.000-00
static CPF_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3})(\d)").expect("Invalid regex"));
static CPF_CHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3})(\d{1,2})$").expect("Invalid regex"));

// CNPJ: 00.000.000/0000-00
static CNPJ_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d)").expect("Invalid regex"));
static CNPJ_ROOT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.(\d{3})(\d)").expect("Invalid regex"));
static CNPJ_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d{3})(\d)").expect("Invalid regex"));
static CNPJ_CHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d)").expect("Invalid regex"));

/// Keep only ASCII digits.
///
/// ```
/// use kesley_cakes_core::mask::digits;
///
/// assert_eq!(digits("(11) 98765-4321"), "11987654321");
/// ```
#[must_use]
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a phone number as `(DD) NNNNN-NNNN` (mobile) or `(DD) NNNN-NNNN`.
///
/// Input beyond eleven digits is dropped. Partial input is formatted as far
/// as it goes, so the user sees the mask grow while typing.
///
/// ```
/// use kesley_cakes_core::mask::format_phone;
///
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
/// assert_eq!(format_phone("113"), "(11) 3");
/// ```
#[must_use]
pub fn format_phone(input: &str) -> String {
    let mut numbers = digits(input);
    numbers.truncate(PHONE_MAX_DIGITS);
    let len = numbers.len();
    let is_mobile = len > LANDLINE_DIGITS;

    let mut out = String::with_capacity(16);
    if len > 0 {
        out.push('(');
        out.push_str(span(&numbers, 0, 2));
    }
    if len > 2 {
        out.push_str(") ");
        let prefix_end = if is_mobile { 7 } else { 6 };
        out.push_str(span(&numbers, 2, prefix_end));
    }
    if len > 6 {
        out.push('-');
        if is_mobile {
            out.push_str(span(&numbers, 7, 11));
        } else {
            out.push_str(span(&numbers, 6, 10));
        }
    }
    out
}

/// Format a tax ID as CPF (up to eleven digits) or CNPJ (twelve to fourteen).
///
/// The pattern is applied as a sequence of substitutions over the digit
/// string, so partial input comes out partially punctuated.
///
/// ```
/// use kesley_cakes_core::mask::format_tax_id;
///
/// assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
/// assert_eq!(format_tax_id("12345678000199"), "12.345.678/0001-99");
/// ```
#[must_use]
pub fn format_tax_id(input: &str) -> String {
    let mut numbers = digits(input);

    if numbers.len() <= CPF_DIGITS {
        let s = CPF_BLOCK.replace(&numbers, "$1.$2");
        let s = CPF_BLOCK.replace(&s, "$1.$2");
        CPF_CHECK.replace(&s, "$1-$2").into_owned()
    } else {
        numbers.truncate(CNPJ_DIGITS);
        let s = CNPJ_ROOT.replace(&numbers, "$1.$2");
        let s = CNPJ_ROOT_BLOCK.replace(&s, "$1.$2.$3");
        let s = CNPJ_BRANCH.replace(&s, ".$1/$2");
        CNPJ_CHECK.replace(&s, "$1-$2").into_owned()
    }
}

/// `maxLength` for the tax ID field given how many digits it holds.
///
/// The field is capped at the CPF length while a CPF is still being typed.
/// Once eleven digits are in, the cap widens to the CNPJ length so the
/// twelfth digit can switch the mask over.
#[must_use]
pub const fn tax_id_max_length(digit_count: usize) -> u32 {
    if digit_count < CPF_DIGITS {
        CPF_MASKED_LEN
    } else {
        CNPJ_MASKED_LEN
    }
}

fn span(s: &str, start: usize, end: usize) -> &str {
    s.get(start..end.min(s.len())).unwrap_or("")
}
