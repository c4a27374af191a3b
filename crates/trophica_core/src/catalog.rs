//! Static parameter records for every species in the catalog.
//!
//! Behaviour is selected by [`Role`]; everything that differs between two
//! species of the same role lives here as data.

use trophica_data::{Diet, Role, Species};

/// Energy a consumer obtains from eating an organism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Yield {
    /// A share of the plant's current size.
    FractionOfSize(f64),
    Flat(f64),
}

impl Yield {
    pub fn value(self, current: f64) -> f64 {
        match self {
            Yield::FractionOfSize(f) => (current * f).min(current),
            Yield::Flat(v) => v,
        }
    }
}

/// How a predator's kill probability is computed once prey is encountered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HuntSuccess {
    /// `min(0.9, 0.4 + 0.3 * attacker/prey)`.
    EnergyRatio,
    /// Fixed odds, lower against one hard-to-catch species.
    ByPrey { hard: Species, hard_rate: f64, easy_rate: f64 },
    /// Energy ratio with a penalty against small, agile prey.
    AgileSmallPrey { small_below: f64 },
}

impl HuntSuccess {
    /// Kill probability for an attacker with `attacker_energy` against `prey`.
    pub fn probability(self, attacker_energy: f64, prey: Species, prey_energy: f64) -> f64 {
        let ratio = attacker_energy / prey_energy.max(f64::EPSILON);
        match self {
            HuntSuccess::EnergyRatio => (0.4 + ratio * 0.3).min(0.9),
            HuntSuccess::ByPrey {
                hard,
                hard_rate,
                easy_rate,
            } => {
                if prey == hard {
                    hard_rate
                } else {
                    easy_rate
                }
            }
            HuntSuccess::AgileSmallPrey { small_below } => {
                if prey_energy < small_below {
                    (0.2 + ratio * 0.2).min(0.6)
                } else {
                    (0.3 + ratio * 0.3).min(0.9)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantProfile {
    pub max_size: f64,
    pub growth_rate: f64,
    /// Size gained per unit of sunlight.
    pub photosynthesis: f64,
    pub regeneration_rate: f64,
    /// Regeneration multiplier applied below half of max size.
    pub heavy_damage_boost: Option<f64>,
    pub reproduction_age: u32,
    pub reproduction_threshold: f64,
    pub dispersal_radius: f64,
    pub seedling_size: f64,
    pub yield_when_eaten: Yield,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimalProfile {
    pub max_energy: f64,
    pub metabolic_cost: f64,
    pub reproduction_age: u32,
    pub reproduction_cost: f64,
    pub reproduction_threshold: f64,
    pub offspring_energy: f64,
    pub yield_when_eaten: f64,
    pub diet: Diet,
    pub hunt_success: HuntSuccess,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeciesProfile {
    Plant(PlantProfile),
    Animal(AnimalProfile),
}

impl SpeciesProfile {
    /// Upper bound on energy (animals) or size (plants).
    pub fn max_energy(&self) -> f64 {
        match self {
            SpeciesProfile::Plant(p) => p.max_size,
            SpeciesProfile::Animal(a) => a.max_energy,
        }
    }

    pub fn diet(&self) -> Diet {
        match self {
            SpeciesProfile::Plant(_) => Diet::EMPTY,
            SpeciesProfile::Animal(a) => a.diet,
        }
    }

    pub fn as_plant(&self) -> Option<&PlantProfile> {
        match self {
            SpeciesProfile::Plant(p) => Some(p),
            SpeciesProfile::Animal(_) => None,
        }
    }

    pub fn as_animal(&self) -> Option<&AnimalProfile> {
        match self {
            SpeciesProfile::Animal(a) => Some(a),
            SpeciesProfile::Plant(_) => None,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn plant(
    max_size: f64,
    growth_rate: f64,
    photosynthesis: f64,
    regeneration_rate: f64,
    reproduction_age: u32,
    reproduction_threshold: f64,
    dispersal_radius: f64,
    seedling_size: f64,
    yield_when_eaten: Yield,
) -> PlantProfile {
    PlantProfile {
        max_size,
        growth_rate,
        photosynthesis,
        regeneration_rate,
        heavy_damage_boost: None,
        reproduction_age,
        reproduction_threshold,
        dispersal_radius,
        seedling_size,
        yield_when_eaten,
    }
}

static WILDFLOWERS: PlantProfile = PlantProfile {
    heavy_damage_boost: Some(1.2),
    ..plant(20.0, 0.15, 0.3, 0.1, 8, 15.0, 5.0, 5.0, Yield::FractionOfSize(0.3))
};
static BERRIES: PlantProfile =
    plant(30.0, 0.2, 0.3, 0.5, 12, 22.0, 15.0, 3.0, Yield::Flat(15.0));
static ASPEN: PlantProfile = plant(100.0, 2.0, 1.5, 0.2, 50, 70.0, 10.0, 5.0, Yield::Flat(25.0));
static SPRUCE: PlantProfile = plant(120.0, 1.5, 1.2, 0.2, 60, 80.0, 8.0, 5.0, Yield::Flat(20.0));

const BUNNY_DIET: Diet = Diet::EMPTY.with(Species::Wildflowers);
const DEER_DIET: Diet = Diet::EMPTY
    .with(Species::Wildflowers)
    .with(Species::Aspen)
    .with(Species::Spruce)
    .with(Species::Berries);
const SMALL_MAMMAL_DIET: Diet = Diet::EMPTY
    .with(Species::Wildflowers)
    .with(Species::Berries);
const FOX_DIET: Diet = Diet::EMPTY
    .with(Species::Bunny)
    .with(Species::FieldMouse)
    .with(Species::Chipmunk);
const COYOTE_DIET: Diet = Diet::EMPTY
    .with(Species::Deer)
    .with(Species::Bunny)
    .with(Species::FieldMouse)
    .with(Species::GroundSquirrel);
const BEAR_DIET: Diet = Diet::EMPTY
    .with(Species::Berries)
    .with(Species::Wildflowers)
    .with(Species::Aspen)
    .with(Species::Spruce)
    .with(Species::Bunny)
    .with(Species::Deer)
    .with(Species::FieldMouse)
    .with(Species::GroundSquirrel)
    .with(Species::Chipmunk)
    .with(Species::Fox)
    .with(Species::Coyote)
    .with(Species::BlackBear);

#[allow(clippy::too_many_arguments)]
const fn animal(
    max_energy: f64,
    metabolic_cost: f64,
    reproduction_age: u32,
    reproduction_cost: f64,
    reproduction_threshold: f64,
    offspring_energy: f64,
    yield_when_eaten: f64,
    diet: Diet,
    hunt_success: HuntSuccess,
) -> AnimalProfile {
    AnimalProfile {
        max_energy,
        metabolic_cost,
        reproduction_age,
        reproduction_cost,
        reproduction_threshold,
        offspring_energy,
        yield_when_eaten,
        diet,
        hunt_success,
    }
}

static BUNNY: AnimalProfile =
    animal(40.0, 0.2, 4, 8.0, 18.0, 20.0, 25.0, BUNNY_DIET, HuntSuccess::EnergyRatio);
static DEER: AnimalProfile =
    animal(80.0, 0.6, 12, 18.0, 45.0, 40.0, 40.0, DEER_DIET, HuntSuccess::EnergyRatio);
static FIELD_MOUSE: AnimalProfile =
    animal(12.0, 0.25, 2, 3.0, 7.0, 6.0, 5.0, SMALL_MAMMAL_DIET, HuntSuccess::EnergyRatio);
static GROUND_SQUIRREL: AnimalProfile =
    animal(20.0, 0.3, 3, 4.0, 11.0, 10.0, 8.0, SMALL_MAMMAL_DIET, HuntSuccess::EnergyRatio);
static CHIPMUNK: AnimalProfile =
    animal(15.0, 0.3, 4, 5.0, 10.0, 8.0, 6.0, SMALL_MAMMAL_DIET, HuntSuccess::EnergyRatio);
static FOX: AnimalProfile =
    animal(60.0, 0.15, 12, 20.0, 45.0, 35.0, 30.0, FOX_DIET, HuntSuccess::EnergyRatio);
static COYOTE: AnimalProfile = animal(
    100.0,
    0.5,
    24,
    35.0,
    75.0,
    50.0,
    50.0,
    COYOTE_DIET,
    HuntSuccess::ByPrey {
        hard: Species::Deer,
        hard_rate: 0.3,
        easy_rate: 0.7,
    },
);
static BLACK_BEAR: AnimalProfile = animal(
    150.0,
    0.8,
    36,
    45.0,
    100.0,
    75.0,
    80.0,
    BEAR_DIET,
    HuntSuccess::AgileSmallPrey { small_below: 15.0 },
);

/// Parameter record for `species`.
pub fn profile(species: Species) -> SpeciesProfile {
    match species {
        Species::Wildflowers => SpeciesProfile::Plant(WILDFLOWERS),
        Species::Berries => SpeciesProfile::Plant(BERRIES),
        Species::Aspen => SpeciesProfile::Plant(ASPEN),
        Species::Spruce => SpeciesProfile::Plant(SPRUCE),
        Species::Bunny => SpeciesProfile::Animal(BUNNY),
        Species::Deer => SpeciesProfile::Animal(DEER),
        Species::FieldMouse => SpeciesProfile::Animal(FIELD_MOUSE),
        Species::GroundSquirrel => SpeciesProfile::Animal(GROUND_SQUIRREL),
        Species::Chipmunk => SpeciesProfile::Animal(CHIPMUNK),
        Species::Fox => SpeciesProfile::Animal(FOX),
        Species::Coyote => SpeciesProfile::Animal(COYOTE),
        Species::BlackBear => SpeciesProfile::Animal(BLACK_BEAR),
    }
}

/// Energy a consumer gains from eating `species` at its current energy/size.
pub fn yield_of(species: Species, current: f64) -> f64 {
    match profile(species) {
        SpeciesProfile::Plant(p) => p.yield_when_eaten.value(current),
        SpeciesProfile::Animal(a) => a.yield_when_eaten,
    }
}

/// Species grouped by role, in catalog order.
pub fn species_with_role(role: Role) -> impl Iterator<Item = Species> {
    Species::ALL.into_iter().filter(move |s| s.role() == role)
}
