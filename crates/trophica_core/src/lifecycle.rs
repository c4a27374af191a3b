//! Organism creation and the per-organism life-cycle state machine.

use crate::catalog::{self, SpeciesProfile};
use crate::config::EcologyConfig;
use trophica_data::{Organism, OrganismId, Position, Species};

/// Where an organism stands in its life cycle.
///
/// Reproduction does not move an organism out of `ReproductionEligible`
/// for good; the cooldown drops it back to `Growing` until it elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    Growing,
    ReproductionEligible,
    Dead,
}

/// Builds a fresh organism. Energy is clamped to `[0, max]` for its species
/// and the reproduction cooldown starts already elapsed.
pub fn create_organism(
    id: OrganismId,
    species: Species,
    position: Position,
    energy: f64,
    ecology: &EcologyConfig,
) -> Organism {
    let profile = catalog::profile(species);
    let energy = if energy.is_finite() {
        energy.clamp(0.0, profile.max_energy())
    } else {
        0.0
    };
    Organism {
        id,
        species,
        age: 0,
        energy,
        alive: energy > 0.0,
        position,
        since_reproduction: cooldown_for(&profile, ecology),
        diet: profile.diet(),
    }
}

fn cooldown_for(profile: &SpeciesProfile, ecology: &EcologyConfig) -> u32 {
    match profile {
        SpeciesProfile::Plant(_) => ecology.plant_reproduction_cooldown,
        SpeciesProfile::Animal(_) => ecology.animal_reproduction_cooldown,
    }
}

/// Ages the organism by one tick and advances its cooldown timer.
pub fn advance_age(org: &mut Organism) {
    org.age = org.age.saturating_add(1);
    org.since_reproduction = org.since_reproduction.saturating_add(1);
}

/// Pays the flat per-tick metabolic cost of an animal.
pub fn metabolize(org: &mut Organism, metabolic_cost: f64) {
    org.energy -= metabolic_cost;
}

/// Kills the organism when its energy is exhausted. Returns true if it died now.
pub fn check_survival(org: &mut Organism) -> bool {
    if org.alive && org.energy <= 0.0 {
        org.energy = 0.0;
        org.die();
        return true;
    }
    false
}

/// Age, energy and cooldown gates for reproduction. The coin flip is separate.
pub fn reproduction_ready(org: &Organism, ecology: &EcologyConfig) -> bool {
    let profile = catalog::profile(org.species);
    let (age, threshold) = match &profile {
        SpeciesProfile::Plant(p) => (p.reproduction_age, p.reproduction_threshold),
        SpeciesProfile::Animal(a) => (a.reproduction_age, a.reproduction_threshold),
    };
    org.alive
        && org.age >= age
        && org.energy >= threshold
        && org.since_reproduction >= cooldown_for(&profile, ecology)
}

pub fn stage(org: &Organism, ecology: &EcologyConfig) -> LifeStage {
    if !org.alive {
        LifeStage::Dead
    } else if reproduction_ready(org, ecology) {
        LifeStage::ReproductionEligible
    } else {
        LifeStage::Growing
    }
}
