//! Punctuation for partially typed input, as applied to form fields.

use crate::domain::model::CPF_LEN;

/// Keeps only ASCII digits.
pub fn unmask(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Punctuates whatever digits are present, up to 11.
///
/// A separator is only placed once a digit follows it, so `"123"` stays
/// `"123"` and `"1234"` becomes `"123.4"`.
pub fn mask(value: &str) -> String {
    let digits: Vec<char> = value
        .chars()
        .filter(char::is_ascii_digit)
        .take(CPF_LEN)
        .collect();

    let mut out = String::with_capacity(CPF_LEN + 3);
    for (i, c) in digits.into_iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}
