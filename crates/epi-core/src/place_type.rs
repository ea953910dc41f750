//! Place category enum shared across the population and parameter crates.
//!
//! The category drives the per-type transmission scaling and decides whether
//! a place's occupant groups are fixed at construction (schools, workplaces)
//! or re-sampled every timestep (casual-mixing venues like outdoor spaces).

/// The kind of venue a `Place` represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PlaceType {
    PrimarySchool,
    SecondarySchool,
    Workplace,
    CareHome,
    OutdoorSpace,
}

impl PlaceType {
    pub const COUNT: usize = 5;

    pub const ALL: [PlaceType; Self::COUNT] = [
        PlaceType::PrimarySchool,
        PlaceType::SecondarySchool,
        PlaceType::Workplace,
        PlaceType::CareHome,
        PlaceType::OutdoorSpace,
    ];

    /// Index into per-type parameter arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for venues whose occupants are re-sampled each timestep rather
    /// than fixed at population construction.
    #[inline]
    pub fn is_randomised(self) -> bool {
        matches!(self, PlaceType::OutdoorSpace)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceType::PrimarySchool   => "primary_school",
            PlaceType::SecondarySchool => "secondary_school",
            PlaceType::Workplace       => "workplace",
            PlaceType::CareHome        => "care_home",
            PlaceType::OutdoorSpace    => "outdoor_space",
        }
    }
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
