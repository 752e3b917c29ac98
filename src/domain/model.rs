use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::validator::{self, Rejection};

pub const BASE_LEN: usize = 9;
pub const CPF_LEN: usize = 11;

/// The two check digits derived from a 9-digit base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verifiers {
    pub first: u8,
    pub second: u8,
}

/// A complete, checksum-valid identifier.
///
/// Only the generator and [`FromStr`] build one, so every value carries
/// correct verifiers. It serializes as the punctuated `DDD.DDD.DDD-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    digits: [u8; CPF_LEN],
}

impl Cpf {
    pub(crate) fn from_parts(base: [u8; BASE_LEN], verifiers: Verifiers) -> Self {
        let mut digits = [0u8; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[BASE_LEN] = verifiers.first;
        digits[BASE_LEN + 1] = verifiers.second;
        Self { digits }
    }

    pub fn digits(&self) -> &[u8; CPF_LEN] {
        &self.digits
    }

    pub fn base(&self) -> &[u8] {
        &self.digits[..BASE_LEN]
    }

    pub fn verifiers(&self) -> Verifiers {
        Verifiers {
            first: self.digits[BASE_LEN],
            second: self.digits[BASE_LEN + 1],
        }
    }

    /// Bare 11-digit numeral, no punctuation.
    pub fn plain(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.digits.iter().enumerate() {
            match i {
                3 | 6 => f.write_str(".")?,
                9 => f.write_str("-")?,
                _ => {}
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Cpf {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::check(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Cpf {
        Cpf::from_parts(
            [1, 1, 1, 4, 4, 4, 7, 7, 7],
            Verifiers { first: 3, second: 5 },
        )
    }

    #[test]
    fn test_display_and_plain() {
        let cpf = known();
        assert_eq!(cpf.to_string(), "111.444.777-35");
        assert_eq!(cpf.plain(), "11144477735");
        assert_eq!(cpf.base(), &[1, 1, 1, 4, 4, 4, 7, 7, 7]);
        assert_eq!(cpf.verifiers(), Verifiers { first: 3, second: 5 });
    }

    #[test]
    fn test_parse() {
        let cpf: Cpf = "111.444.777-35".parse().unwrap();
        assert_eq!(cpf, known());
        assert!("111.444.777-36".parse::<Cpf>().is_err());
    }

    #[test]
    fn test_serde_uses_formatted_string() {
        let json = serde_json::to_string(&known()).unwrap();
        assert_eq!(json, "\"111.444.777-35\"");

        let back: Cpf = serde_json::from_str("\"11144477735\"").unwrap();
        assert_eq!(back, known());

        assert!(serde_json::from_str::<Cpf>("\"111.111.111-11\"").is_err());
    }
}
