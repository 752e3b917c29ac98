use rand::Rng;

/// Supplies the random digits a generator draws its bases from.
pub trait DigitSource {
    /// Next digit, always in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

/// Uniform digits from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDigits<R> {
    rng: R,
}

impl<R: Rng> RandomDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.random_range(0..=9)
    }
}

impl<S: DigitSource + ?Sized> DigitSource for &mut S {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }
}
