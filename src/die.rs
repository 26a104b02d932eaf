use std::ops::Index;
use std::slice;

use crate::value::{DefaultValue, Value};
use crate::{Error, Result};

/// The faces of a single die, each equally likely.
///
/// Never empty. Duplicate faces are kept and weight their value accordingly.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceSet<T = DefaultValue>
where
    T: Value,
{
    faces: Vec<T>,
}

impl FaceSet {
    /// A die numbered `1..=sides`.
    pub fn uniform(sides: DefaultValue) -> Result<Self> {
        Self::new(1..=sides)
    }

    pub(crate) fn uniform_unchecked(sides: DefaultValue) -> Self {
        Self {
            faces: (1..=sides).collect(),
        }
    }
}

impl<T> FaceSet<T>
where
    T: Value,
{
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::at(0, faces)
    }

    #[must_use]
    pub fn scalar(value: T) -> Self {
        Self {
            faces: vec![value],
        }
    }

    /// Builds the die found at position `die` of a group, reporting errors against it.
    pub(crate) fn at<I>(die: usize, faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(Error::EmptyFaceSet { die });
        }
        if let Some(face) = faces.iter().position(|x| !x.is_valid()) {
            return Err(Error::NonFiniteFace { die, face });
        }
        Ok(Self { faces })
    }

    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.faces.iter()
    }
}

impl<T> Index<usize> for FaceSet<T>
where
    T: Value,
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.faces[index]
    }
}

impl<'a, T> IntoIterator for &'a FaceSet<T>
where
    T: Value,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<Vec<T>> for FaceSet<T>
where
    T: Value,
{
    type Error = Error;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::new(value)
    }
}
