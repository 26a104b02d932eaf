use std::slice;

use crate::die::FaceSet;
use crate::value::{DefaultValue, Value};
use crate::{Count, Error, Result};

/// Dice rolled together and summed.
#[derive(Clone, Debug, PartialEq)]
pub struct DiceGroup<T = DefaultValue>
where
    T: Value,
{
    dice: Vec<FaceSet<T>>,
}

impl<T> DiceGroup<T>
where
    T: Value,
{
    #[must_use]
    pub fn empty() -> Self {
        Self { dice: Vec::new() }
    }

    /// Builds a group from raw face lists, checking every die.
    pub fn new<I, F>(dice: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = T>,
    {
        dice.into_iter()
            .enumerate()
            .map(|(i, faces)| FaceSet::at(i, faces))
            .collect::<Result<Vec<_>>>()
            .map(|dice| Self { dice })
    }

    #[must_use]
    pub fn repeat(count: usize, die: FaceSet<T>) -> Self {
        Self {
            dice: vec![die; count],
        }
    }

    pub fn push(&mut self, die: FaceSet<T>) {
        self.dice.push(die);
    }

    pub fn extend(&mut self, other: DiceGroup<T>) {
        self.dice.extend(other.dice);
    }

    #[must_use]
    pub fn dice(&self) -> &[FaceSet<T>] {
        &self.dice
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, FaceSet<T>> {
        self.dice.iter()
    }

    /// Number of ways to pick one face from every die.
    pub fn combinations(&self) -> Result<Count> {
        self.dice
            .iter()
            .try_fold(1 as Count, |acc, x| acc.checked_mul(x.len() as Count))
            .ok_or(Error::Overflow)
    }

    /// `suffix[i]` is the product of the face counts of dice `i..`; `suffix[len]` is 1.
    pub(crate) fn suffix_products(&self) -> Result<Vec<Count>> {
        let mut suffix = vec![1 as Count; self.dice.len() + 1];
        for (i, die) in self.dice.iter().enumerate().rev() {
            suffix[i] = suffix[i + 1]
                .checked_mul(die.len() as Count)
                .ok_or(Error::Overflow)?;
        }
        Ok(suffix)
    }
}

impl<T> Default for DiceGroup<T>
where
    T: Value,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<FaceSet<T>>> for DiceGroup<T>
where
    T: Value,
{
    fn from(dice: Vec<FaceSet<T>>) -> Self {
        Self { dice }
    }
}

impl<T> FromIterator<FaceSet<T>> for DiceGroup<T>
where
    T: Value,
{
    fn from_iter<I: IntoIterator<Item = FaceSet<T>>>(iter: I) -> Self {
        Self {
            dice: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DiceGroup<T>
where
    T: Value,
{
    type Item = &'a FaceSet<T>;
    type IntoIter = slice::Iter<'a, FaceSet<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
