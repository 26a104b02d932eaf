use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::iter::Zip;
use std::slice;

use itertools::Itertools;

use crate::value::{ComputableValue, DefaultValue, Ordered, Value};
use crate::{Count, Error, Map, Result};

pub type Iter<'a, T> = Zip<slice::Iter<'a, T>, slice::Iter<'a, f64>>;

/// Outcomes of a roll with their probabilities, sorted by outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution<T = DefaultValue>
where
    T: Value,
{
    values: Vec<T>,
    probabilities: Vec<f64>,
}

impl<T> Distribution<T>
where
    T: Value,
{
    /// Builds a distribution from `(outcome, probability)` pairs.
    ///
    /// Repeated outcomes are merged by adding their probabilities. Weights are
    /// taken as given and not normalized.
    pub fn from_probabilities<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let mut merged = BTreeMap::new();
        for (face, (value, probability)) in pairs.into_iter().enumerate() {
            if !value.is_valid() {
                return Err(Error::NonFiniteFace { die: 0, face });
            }
            if !probability.is_finite() || probability < 0.0 {
                return Err(Error::InvalidProbability { probability });
            }
            *merged.entry(Ordered(value)).or_insert(0.0) += probability;
        }

        let (values, probabilities) = merged.into_iter().map(|(k, p)| (k.0, p)).unzip();
        Ok(Self {
            values,
            probabilities,
        })
    }

    /// Normalizes occurrence counts against the number of combinations.
    pub(crate) fn from_counts(map: Map<T>, total: Count) -> Self {
        let denom = total as f64;
        let (values, probabilities) = map
            .into_iter()
            .map(|(k, c)| (k.0, c as f64 / denom))
            .unzip();
        Self {
            values,
            probabilities,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter().zip(self.probabilities.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Probability of rolling exactly `value`; zero for outcomes that cannot occur.
    #[must_use]
    pub fn probability<Q>(&self, value: Q) -> f64
    where
        Q: Borrow<T>,
    {
        let value = value.borrow();
        self.values
            .binary_search_by(|x| x.order(value))
            .map_or(0.0, |i| self.probabilities[i])
    }

    #[must_use]
    pub fn min_value(&self) -> Option<&T> {
        self.values.first()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<&T> {
        self.values.last()
    }

    #[must_use]
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Index of the first outcome strictly greater than `threshold`.
    pub(crate) fn first_above(&self, threshold: &T) -> usize {
        self.values.partition_point(|x| x.order(threshold) != Ordering::Greater)
    }

    #[must_use]
    pub fn modes(&self) -> Vec<&T> {
        self.iter()
            .max_set_by(|(_, x), (_, y)| x.total_cmp(y))
            .into_iter()
            .map(|(v, _)| v)
            .collect()
    }
}

impl<T> Distribution<T>
where
    T: ComputableValue,
{
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.iter().map(|(v, p)| v.compute() * p).sum()
    }

    #[must_use]
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.iter()
            .map(|(v, p)| (v.compute() - mean).powi(2) * p)
            .sum()
    }

    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl<'a, T> IntoIterator for &'a Distribution<T>
where
    T: Value,
{
    type Item = (&'a T, &'a f64);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
