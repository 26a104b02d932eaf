use crate::distribution::Distribution;
use crate::value::Value;

/// Probability that a roll of `dist` is strictly greater than `threshold`.
#[must_use]
pub fn chance_to_beat_number<T>(dist: &Distribution<T>, threshold: T) -> f64
where
    T: Value,
{
    let start = dist.first_above(&threshold);
    dist.probabilities()[start..].iter().sum()
}

/// Probability that an independent roll of `rolling` is strictly greater than
/// one of `target`. Ties do not count.
#[must_use]
pub fn chance_to_beat_distribution<T>(
    rolling: &Distribution<T>,
    target: &Distribution<T>,
) -> f64
where
    T: Value,
{
    target
        .iter()
        .map(|(x, p)| chance_to_beat_number(rolling, *x) * p)
        .sum()
}

/// Probability that independent rolls of `lhs` and `rhs` come up equal.
#[must_use]
pub fn chance_to_tie<T>(lhs: &Distribution<T>, rhs: &Distribution<T>) -> f64
where
    T: Value,
{
    rhs.iter().map(|(x, p)| lhs.probability(x) * p).sum()
}

impl<T> Distribution<T>
where
    T: Value,
{
    #[must_use]
    pub fn beats_number(&self, threshold: T) -> f64 {
        chance_to_beat_number(self, threshold)
    }

    #[must_use]
    pub fn beats(&self, other: &Self) -> f64 {
        chance_to_beat_distribution(self, other)
    }

    #[must_use]
    pub fn ties(&self, other: &Self) -> f64 {
        chance_to_tie(self, other)
    }
}
