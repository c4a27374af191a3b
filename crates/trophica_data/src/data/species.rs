use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behavioural role of an organism. Each role has its own tick update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Plant,
    Herbivore,
    Carnivore,
    Omnivore,
}

impl Role {
    pub fn is_animal(self) -> bool {
        !matches!(self, Role::Plant)
    }
}

/// The closed species catalog.
///
/// Declaration order is the index used by [`Diet`] and by per-species
/// counters, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Wildflowers,
    Berries,
    Aspen,
    Spruce,
    Bunny,
    Deer,
    FieldMouse,
    GroundSquirrel,
    Chipmunk,
    Fox,
    Coyote,
    BlackBear,
}

impl Species {
    pub const COUNT: usize = 12;

    pub const ALL: [Species; Species::COUNT] = [
        Species::Wildflowers,
        Species::Berries,
        Species::Aspen,
        Species::Spruce,
        Species::Bunny,
        Species::Deer,
        Species::FieldMouse,
        Species::GroundSquirrel,
        Species::Chipmunk,
        Species::Fox,
        Species::Coyote,
        Species::BlackBear,
    ];

    pub const PLANTS: [Species; 4] = [
        Species::Wildflowers,
        Species::Berries,
        Species::Aspen,
        Species::Spruce,
    ];

    pub const HERBIVORES: [Species; 5] = [
        Species::Bunny,
        Species::Deer,
        Species::FieldMouse,
        Species::GroundSquirrel,
        Species::Chipmunk,
    ];

    pub const PREDATORS: [Species; 3] = [Species::Fox, Species::Coyote, Species::BlackBear];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Wildflowers => "Wildflowers",
            Species::Berries => "Berries",
            Species::Aspen => "Aspen",
            Species::Spruce => "Spruce",
            Species::Bunny => "Bunny",
            Species::Deer => "Deer",
            Species::FieldMouse => "FieldMouse",
            Species::GroundSquirrel => "GroundSquirrel",
            Species::Chipmunk => "Chipmunk",
            Species::Fox => "Fox",
            Species::Coyote => "Coyote",
            Species::BlackBear => "BlackBear",
        }
    }

    pub fn role(self) -> Role {
        match self {
            Species::Wildflowers | Species::Berries | Species::Aspen | Species::Spruce => {
                Role::Plant
            }
            Species::Bunny
            | Species::Deer
            | Species::FieldMouse
            | Species::GroundSquirrel
            | Species::Chipmunk => Role::Herbivore,
            Species::Fox | Species::Coyote => Role::Carnivore,
            Species::BlackBear => Role::Omnivore,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not belong to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpeciesName(pub String);

impl fmt::Display for UnknownSpeciesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown species: {}", self.0)
    }
}

impl std::error::Error for UnknownSpeciesName {}

impl FromStr for Species {
    type Err = UnknownSpeciesName;

    /// Accepts the catalog name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .iter()
            .copied()
            .find(|sp| sp.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSpeciesName(wanted.to_string()))
    }
}

/// Set of species an animal accepts as food, one bit per catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Diet(u16);

impl Diet {
    pub const EMPTY: Diet = Diet(0);

    pub fn of(species: &[Species]) -> Self {
        species.iter().fold(Diet::EMPTY, |d, s| d.with(*s))
    }

    #[must_use]
    pub const fn with(self, species: Species) -> Self {
        Diet(self.0 | (1 << species as u16))
    }

    #[inline]
    pub fn contains(self, species: Species) -> bool {
        self.0 & (1 << species.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The plant-role members of this diet.
    pub fn plant_part(self) -> Diet {
        self.filter(|s| s.role() == Role::Plant)
    }

    /// The animal-role members of this diet.
    pub fn animal_part(self) -> Diet {
        self.filter(|s| s.role().is_animal())
    }

    fn filter(self, keep: impl Fn(Species) -> bool) -> Diet {
        self.iter()
            .filter(|s| keep(*s))
            .fold(Diet::EMPTY, |d, s| d.with(s))
    }

    /// Members in catalog order.
    pub fn iter(self) -> impl Iterator<Item = Species> {
        Species::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}
