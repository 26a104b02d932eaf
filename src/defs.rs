use once_cell::sync::Lazy;

use crate::die::FaceSet;
use crate::group::DiceGroup;

macro_rules! standard_die {
    ($name:ident, $fn:ident, $sides:expr) => {
        pub static $name: Lazy<FaceSet> = Lazy::new(|| FaceSet::uniform_unchecked($sides));

        pub fn $fn() -> FaceSet {
            $name.clone()
        }
    };
}

standard_die!(D4, d4, 4);
standard_die!(D6, d6, 6);
standard_die!(D8, d8, 8);
standard_die!(D10, d10, 10);
standard_die!(D12, d12, 12);
standard_die!(D20, d20, 20);

/// `count` copies of `die`, as in `3d6`.
pub fn roll(count: usize, die: &FaceSet) -> DiceGroup {
    DiceGroup::repeat(count, die.clone())
}
