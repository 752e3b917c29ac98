use thiserror::Error;

use crate::core::checksum::verifiers_unchecked;
use crate::domain::model::{Cpf, Verifiers, BASE_LEN, CPF_LEN};

/// Why a candidate string is not a valid identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("expected 11 digits, found {found}")]
    WrongDigitCount { found: usize },

    #[error("all digits are identical")]
    Degenerate,

    #[error(
        "verifier mismatch: expected {}{}, found {}{}",
        .expected.first,
        .expected.second,
        .found.first,
        .found.second
    )]
    ChecksumMismatch {
        expected: Verifiers,
        found: Verifiers,
    },
}

/// True when `candidate` holds a valid identifier. Non-digit characters are
/// ignored, so punctuated and bare forms give the same answer.
///
/// Only ASCII `0-9` count as digits; other Unicode decimal digits such as
/// Arabic-Indic numerals are treated like punctuation and dropped.
pub fn is_valid(candidate: &str) -> bool {
    check(candidate).is_ok()
}

/// Like [`is_valid`] but reports the first reason for rejection.
pub fn check(candidate: &str) -> Result<Cpf, Rejection> {
    let digits: Vec<u8> = candidate
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() != CPF_LEN {
        return Err(Rejection::WrongDigitCount {
            found: digits.len(),
        });
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(Rejection::Degenerate);
    }

    let mut base = [0u8; BASE_LEN];
    base.copy_from_slice(&digits[..BASE_LEN]);

    let expected = verifiers_unchecked(&base);
    let found = Verifiers {
        first: digits[BASE_LEN],
        second: digits[BASE_LEN + 1],
    };

    if expected != found {
        return Err(Rejection::ChecksumMismatch { expected, found });
    }

    Ok(Cpf::from_parts(base, expected))
}
