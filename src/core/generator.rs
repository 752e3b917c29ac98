use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;

use crate::core::checksum::compute_verifiers;
use crate::domain::model::{Cpf, BASE_LEN};
use crate::domain::ports::{DigitSource, RandomDigits};
use crate::utils::error::{CpfError, Result};

/// Draws before giving up on finding a non-degenerate base.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000;

/// Produces random valid identifiers from a [`DigitSource`].
///
/// Bases whose nine digits are all the same are discarded and redrawn. Only
/// the base is checked for that; the verifiers are appended afterwards
/// without a second look. A source that yields anything above 9 fails the
/// call with [`CpfError::InvalidDigit`].
pub struct Generator<S> {
    source: S,
    max_attempts: Option<u32>,
}

impl<S: DigitSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// `None` retries until a base is accepted.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generate_cpf(&mut self) -> Result<Cpf> {
        let mut attempts: u32 = 0;
        loop {
            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    tracing::debug!("Giving up after {} degenerate bases", attempts);
                    return Err(CpfError::ExhaustedRetries { attempts });
                }
            }
            attempts += 1;

            let base = self.draw_base();
            let verifiers = compute_verifiers(&base)?;
            if base.iter().all(|&d| d == base[0]) {
                tracing::debug!("Rejected degenerate base {:?}", base);
                continue;
            }

            let cpf = Cpf::from_parts(base, verifiers);
            tracing::trace!("Generated {}", cpf);
            return Ok(cpf);
        }
    }

    /// One formatted identifier (`DDD.DDD.DDD-DD`).
    pub fn generate(&mut self) -> Result<String> {
        self.generate_cpf().map(|cpf| cpf.to_string())
    }

    pub fn generate_many(&mut self, count: usize) -> Result<Vec<Cpf>> {
        (0..count).map(|_| self.generate_cpf()).collect()
    }

    fn draw_base(&mut self) -> [u8; BASE_LEN] {
        let mut base = [0u8; BASE_LEN];
        for slot in base.iter_mut() {
            *slot = self.source.next_digit();
        }
        base
    }
}

impl Generator<RandomDigits<StdRng>> {
    /// Deterministic output for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomDigits::new(StdRng::seed_from_u64(seed)))
    }
}

impl Generator<RandomDigits<ThreadRng>> {
    pub fn from_thread_rng() -> Self {
        Self::new(RandomDigits::new(rand::rng()))
    }
}

/// One formatted identifier from the thread-local RNG.
pub fn generate() -> Result<String> {
    Generator::from_thread_rng().generate()
}
