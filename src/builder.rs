use bon::Builder;
use tracing::{debug, trace};

use crate::distribution::Distribution;
use crate::group::DiceGroup;
use crate::value::{Ordered, Value};
use crate::{Count, Error, Map, Result, DEFAULT_MAX_COMBINATIONS};

/// How the counts of every sum are obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Walk every combination of faces by its mixed-radix index.
    #[default]
    Enumerate,
    /// Fold the dice one at a time into a running table of sums.
    ///
    /// Produces the same counts as [`Strategy::Enumerate`], since faces are
    /// added in the same die order, at a cost proportional to the number of
    /// distinct partial sums instead of the number of combinations.
    Convolve,
}

/// Turns a [`DiceGroup`] into the [`Distribution`] of its sum.
///
/// ```
/// use dicedist::{DiceGroup, DistributionBuilder, Strategy};
///
/// let group = DiceGroup::new([vec![1, 2], vec![1, 2, 3, 4]]).unwrap();
/// let dist = DistributionBuilder::builder()
///     .strategy(Strategy::Convolve)
///     .build()
///     .build(&group)
///     .unwrap();
/// assert_eq!(dist.probability(2), 0.125);
/// ```
#[derive(Clone, Copy, Debug, Builder)]
pub struct DistributionBuilder {
    /// Largest number of face combinations a group may have.
    #[builder(default = DEFAULT_MAX_COMBINATIONS)]
    max_combinations: Count,
    #[builder(default)]
    strategy: Strategy,
}

/// Distribution of `group` with the default limits.
pub fn build_distribution<T>(group: &DiceGroup<T>) -> Result<Distribution<T>>
where
    T: Value,
{
    DistributionBuilder::default().build(group)
}

impl Default for DistributionBuilder {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DistributionBuilder {
    #[must_use]
    pub fn max_combinations(&self) -> Count {
        self.max_combinations
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn build<T>(&self, group: &DiceGroup<T>) -> Result<Distribution<T>>
    where
        T: Value,
    {
        if group.is_empty() {
            return Err(Error::EmptyGroup);
        }

        let suffix = group.suffix_products()?;
        let total = suffix[0];
        if total > self.max_combinations {
            return Err(Error::ComplexityLimitExceeded {
                combinations: total,
                limit: self.max_combinations,
            });
        }

        debug!(
            dice = group.len(),
            combinations = total,
            strategy = ?self.strategy,
            "building distribution"
        );

        let counts = match self.strategy {
            Strategy::Enumerate => enumerate(group, &suffix)?,
            Strategy::Convolve => convolve(group)?,
        };

        trace!(outcomes = counts.len(), "distribution built");

        Ok(Distribution::from_counts(counts, total))
    }
}

/// Counts every sum by decoding each index in `0..suffix[0]` into one face per die.
fn enumerate<T>(group: &DiceGroup<T>, suffix: &[Count]) -> Result<Map<T>>
where
    T: Value,
{
    let dice = group.dice();
    let mut map = Map::new();

    for index in 0..suffix[0] {
        let mut sum = T::zero();
        for (i, die) in dice.iter().enumerate() {
            let face = (index / suffix[i + 1]) % die.len() as Count;
            sum = sum.checked_add(die[face as usize]).ok_or(Error::Overflow)?;
        }
        *map.entry(Ordered(sum)).or_default() += 1;
    }

    Ok(map)
}

fn convolve<T>(group: &DiceGroup<T>) -> Result<Map<T>>
where
    T: Value,
{
    let mut map = Map::new();
    map.insert(Ordered(T::zero()), 1);

    for die in group {
        let mut next = Map::new();
        for (sum, count) in &map {
            for face in die {
                let total = sum.0.checked_add(*face).ok_or(Error::Overflow)?;
                *next.entry(Ordered(total)).or_default() += count;
            }
        }
        map = next;
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{d10, d4, d6, roll};
    use crate::FaceSet;

    const EPS: f64 = 1e-12;

    fn both<T: Value>(group: &DiceGroup<T>) -> (Distribution<T>, Distribution<T>) {
        let e = DistributionBuilder::builder()
            .strategy(Strategy::Enumerate)
            .build()
            .build(group)
            .unwrap();
        let c = DistributionBuilder::builder()
            .strategy(Strategy::Convolve)
            .build()
            .build(group)
            .unwrap();
        (e, c)
    }

    #[test]
    fn two_dice_of_different_sizes() {
        let group = DiceGroup::new([vec![1, 2], vec![1, 2, 3, 4]]).unwrap();
        let dist = build_distribution(&group).unwrap();
        assert_eq!(dist.values(), &[2, 3, 4, 5, 6]);
        assert_eq!(dist.probabilities(), &[0.125, 0.25, 0.25, 0.25, 0.125]);
    }

    #[test]
    fn enumeration_visits_each_combination_once() {
        let group = DiceGroup::new([vec![0, 10], vec![0, 100, 200]]).unwrap();
        let suffix = group.suffix_products().unwrap();
        let counts = enumerate(&group, &suffix).unwrap();
        let sums: Vec<_> = counts.iter().map(|(k, c)| (k.0, *c)).collect();
        assert_eq!(
            sums,
            vec![(0, 1), (10, 1), (100, 1), (110, 1), (200, 1), (210, 1)]
        );
    }

    #[test]
    fn duplicate_faces_weight_their_value() {
        let group = DiceGroup::new([vec![1, 1, 2]]).unwrap();
        let dist = build_distribution(&group).unwrap();
        assert!((dist.probability(1) - 2.0 / 3.0).abs() < EPS);
        assert!((dist.probability(2) - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn float_faces_keep_their_type() {
        let group = DiceGroup::new([vec![0.5, 1.5], vec![-0.25, 0.25]]).unwrap();
        let dist = build_distribution(&group).unwrap();
        assert_eq!(dist.values(), &[0.25, 0.75, 1.25, 1.75]);
        assert!(dist.probabilities().iter().all(|p| *p == 0.25));
    }

    #[test]
    fn strategies_agree() {
        let mut group = roll(3, &d6());
        group.push(d4());
        group.push(FaceSet::new([-3, 0, 0, 7]).unwrap());
        let (e, c) = both(&group);
        assert_eq!(e.values(), c.values());
        for (x, y) in e.probabilities().iter().zip(c.probabilities()) {
            assert!((x - y).abs() < EPS);
        }

        let floats = DiceGroup::new([vec![0.1, 0.2, 0.3], vec![1.0, 2.5], vec![0.7]]).unwrap();
        let (e, c) = both(&floats);
        assert_eq!(e, c);
    }

    #[test]
    fn empty_group_is_rejected() {
        let group = DiceGroup::<i32>::empty();
        assert_eq!(build_distribution(&group), Err(Error::EmptyGroup));
        let convolve = DistributionBuilder::builder()
            .strategy(Strategy::Convolve)
            .build();
        assert_eq!(convolve.build(&group), Err(Error::EmptyGroup));
    }

    #[test]
    fn limit_is_checked_before_enumerating() {
        let builder = DistributionBuilder::builder().max_combinations(999).build();
        let err = builder.build(&roll(3, &d10())).unwrap_err();
        assert_eq!(
            err,
            Error::ComplexityLimitExceeded {
                combinations: 1000,
                limit: 999
            }
        );
        assert!(builder.build(&roll(2, &d10())).is_ok());
    }

    #[test]
    fn overflowing_groups_fail() {
        let builder = DistributionBuilder::builder()
            .max_combinations(Count::MAX)
            .build();
        assert_eq!(builder.build(&roll(100, &d6())), Err(Error::Overflow));
    }

    #[test]
    fn face_sums_past_the_type_fail() {
        let wide = DiceGroup::new([vec![i32::MAX], vec![1]]).unwrap();
        let narrow = DiceGroup::<i8>::new([1..=100, 1..=100]).unwrap();
        let floats = DiceGroup::new([vec![f64::MAX], vec![f64::MAX]]).unwrap();
        for strategy in [Strategy::Enumerate, Strategy::Convolve] {
            let builder = DistributionBuilder::builder().strategy(strategy).build();
            assert_eq!(builder.build(&wide), Err(Error::Overflow));
            assert_eq!(builder.build(&narrow), Err(Error::Overflow));
            assert_eq!(builder.build(&floats), Err(Error::Overflow));
        }

        let edge = DiceGroup::<i8>::new([vec![100, 27], vec![0]]).unwrap();
        let dist = build_distribution(&edge).unwrap();
        assert_eq!(dist.values(), &[27, 100]);
    }

    #[test]
    fn defaults() {
        let builder = DistributionBuilder::default();
        assert_eq!(builder.max_combinations(), DEFAULT_MAX_COMBINATIONS);
        assert_eq!(builder.strategy(), Strategy::Enumerate);
    }
}
