mod builder;
mod compare;
pub mod defs;
mod die;
mod distribution;
mod group;
mod value;

use std::collections::BTreeMap;

pub use builder::{build_distribution, DistributionBuilder, Strategy};
pub use compare::{chance_to_beat_distribution, chance_to_beat_number, chance_to_tie};
pub use die::FaceSet;
pub use distribution::Distribution;
pub use group::DiceGroup;
use thiserror::Error;
pub use value::{ComputableValue, DefaultValue, Value};

use crate::value::Ordered;

type Count = u128;
type Map<T> = BTreeMap<Ordered<T>, Count>;
pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    #[error("dice group has no dice")]
    EmptyGroup,
    #[error("die {die} has no faces")]
    EmptyFaceSet { die: usize },
    #[error("face {face} of die {die} is not a finite number")]
    NonFiniteFace { die: usize, face: usize },
    #[error("invalid probability {probability}")]
    InvalidProbability { probability: f64 },
    #[error("{combinations} combinations exceed the limit of {limit}")]
    ComplexityLimitExceeded { combinations: Count, limit: Count },
    #[error("overflow in combination count")]
    Overflow,
}

pub const DEFAULT_MAX_COMBINATIONS: Count = 1_000_000_000;
