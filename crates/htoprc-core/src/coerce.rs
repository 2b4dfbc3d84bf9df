//! Value coercers: raw value strings into typed fields.
//!
//! None of these can fail loudly. Integers that do not parse come back as
//! `None`; callers decide what "no value" means for their field.

/// `"1"` is true, everything else (including `""`, `"0"`, `"true"`) is false.
pub fn flag(value: &str) -> bool {
    value == "1"
}

/// Base-10 integer with an optional sign. Like C's `atoi`/JS `parseInt`, a
/// numeric prefix is enough (`"12abc"` is 12); no digits at all yields `None`.
/// Out-of-range values saturate.
pub fn integer(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Space-separated integers. Tokens that do not coerce (including the empty
/// tokens produced by repeated or edge spaces) are dropped, so `""` gives an
/// empty list.
pub fn integer_list(value: &str) -> Vec<i64> {
    value.split(' ').filter_map(integer).collect()
}

/// Space-separated names with empty tokens dropped.
pub fn name_list(value: &str) -> Vec<String> {
    value
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
