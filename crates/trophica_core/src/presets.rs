//! Named starting populations.

use crate::error::CoreError;
use crate::world::World;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use trophica_data::{Position, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Strong herbivore booms followed by crashes.
    BoomBust,
    /// More herbivores, fewer predators; many species coexist.
    HighBiodiversity,
    /// Sparser plants under apex predator control.
    BearDominance,
    /// Plants and herbivores only.
    PlantParadise,
}

/// (species, count, starting energy or size)
pub type Seeding = (Species, usize, f64);

const PLANTS: [Seeding; 4] = [
    (Species::Wildflowers, 60, 10.0),
    (Species::Berries, 50, 15.0),
    (Species::Aspen, 30, 50.0),
    (Species::Spruce, 25, 60.0),
];

const HERBIVORES: [Seeding; 5] = [
    (Species::Deer, 15, 50.0),
    (Species::Bunny, 30, 25.0),
    (Species::FieldMouse, 15, 10.0),
    (Species::GroundSquirrel, 12, 12.0),
    (Species::Chipmunk, 12, 10.0),
];

const PREDATORS: [Seeding; 3] = [
    (Species::Fox, 3, 50.0),
    (Species::Coyote, 2, 70.0),
    (Species::BlackBear, 1, 100.0),
];

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::BoomBust,
        Preset::HighBiodiversity,
        Preset::BearDominance,
        Preset::PlantParadise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::BoomBust => "boom-bust",
            Preset::HighBiodiversity => "high-biodiversity",
            Preset::BearDominance => "bear-dominance",
            Preset::PlantParadise => "plant-paradise",
        }
    }

    /// Seeding groups in construction order.
    pub fn seeds(self) -> Vec<Seeding> {
        match self {
            Preset::BoomBust => [&PLANTS[..], &HERBIVORES[..], &PREDATORS[..]].concat(),
            Preset::HighBiodiversity => {
                let herbivores = [
                    (Species::Deer, 25, 50.0),
                    (Species::Bunny, 40, 25.0),
                    (Species::FieldMouse, 20, 10.0),
                    (Species::GroundSquirrel, 18, 12.0),
                    (Species::Chipmunk, 17, 10.0),
                ];
                let predators = [
                    (Species::Fox, 2, 50.0),
                    (Species::Coyote, 1, 70.0),
                    (Species::BlackBear, 1, 100.0),
                ];
                [&PLANTS[..], &herbivores[..], &predators[..]].concat()
            }
            Preset::BearDominance => {
                let plants = [
                    (Species::Wildflowers, 50, 10.0),
                    (Species::Berries, 30, 15.0),
                    (Species::Aspen, 20, 50.0),
                    (Species::Spruce, 15, 60.0),
                ];
                [&plants[..], &HERBIVORES[..], &PREDATORS[..]].concat()
            }
            Preset::PlantParadise => [&PLANTS[..], &HERBIVORES[..]].concat(),
        }
    }

    pub fn population(self) -> usize {
        self.seeds().iter().map(|(_, n, _)| n).sum()
    }

    /// Adds the preset's organisms to `world` at uniform random positions
    /// drawn from `rng`. Returns how many were added.
    pub fn populate<R: Rng>(self, world: &mut World, rng: &mut R) -> usize {
        let mut added = 0;
        for (species, count, energy) in self.seeds() {
            for _ in 0..count {
                let position = Position::new(
                    rng.gen::<f64>() * world.width,
                    rng.gen::<f64>() * world.height,
                );
                world.add_organism(species, position, energy);
                added += 1;
            }
        }
        tracing::info!(preset = self.name(), organisms = added, "Seeded world");
        added
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = CoreError;

    /// Accepts `boom-bust`, `boom_bust` or `BOOM_BUST` style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| CoreError::UnknownPreset(s.to_string()))
    }
}
