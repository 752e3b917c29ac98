//! Verifier-digit arithmetic.
//!
//! Each verifier is a weighted sum modulo 11. For an input of `n` digits the
//! weights run from `n + 1` down to `2`; a remainder below 2 gives `0`,
//! anything else gives `11 - remainder`.

use crate::domain::model::{Verifiers, BASE_LEN, CPF_LEN};
use crate::utils::error::{CpfError, Result};

fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip((2..=digits.len() as u32 + 1).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

fn ensure_digits(digits: &[u8], expected: usize) -> Result<()> {
    if digits.len() != expected {
        return Err(CpfError::InvalidLength {
            expected,
            actual: digits.len(),
        });
    }
    if let Some((position, &value)) = digits.iter().enumerate().find(|(_, &d)| d > 9) {
        return Err(CpfError::InvalidDigit { position, value });
    }
    Ok(())
}

/// Computes both verifiers for a 9-digit base.
pub fn compute_verifiers(base: &[u8]) -> Result<Verifiers> {
    ensure_digits(base, BASE_LEN)?;
    Ok(verifiers_unchecked(base))
}

/// Caller guarantees `base` is nine digits in range.
pub(crate) fn verifiers_unchecked(base: &[u8]) -> Verifiers {
    let first = check_digit(base);

    let mut extended = [0u8; BASE_LEN + 1];
    extended[..BASE_LEN].copy_from_slice(base);
    extended[BASE_LEN] = first;
    let second = check_digit(&extended);

    Verifiers { first, second }
}

/// Renders 11 digits as `DDD.DDD.DDD-DD`. No checksum validation.
pub fn format_identifier(digits: &[u8]) -> Result<String> {
    ensure_digits(digits, CPF_LEN)?;

    let numeral: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    Ok(format!(
        "{}.{}.{}-{}",
        &numeral[..3],
        &numeral[3..6],
        &numeral[6..9],
        &numeral[9..]
    ))
}
