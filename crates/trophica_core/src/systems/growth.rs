use crate::catalog::PlantProfile;
use trophica_data::Organism;

/// Adds `sunlight * efficiency` to the plant's size, capped at max.
pub fn photosynthesize(plant: &mut Organism, profile: &PlantProfile, sunlight: f64) {
    if plant.energy < profile.max_size {
        plant.energy = (plant.energy + sunlight * profile.photosynthesis).min(profile.max_size);
    }
}

pub fn grow(plant: &mut Organism, profile: &PlantProfile) {
    if plant.energy < profile.max_size {
        plant.energy = (plant.energy + profile.growth_rate).min(profile.max_size);
    }
}

/// Regrowth for damaged plants, below `threshold * max_size`.
pub fn regenerate(plant: &mut Organism, profile: &PlantProfile, threshold: f64) {
    let max = profile.max_size;
    if plant.energy >= max * threshold {
        return;
    }
    let amount = match profile.heavy_damage_boost {
        Some(boost) if plant.energy < max * 0.5 => profile.regeneration_rate * boost,
        _ => profile.regeneration_rate,
    };
    plant.energy = (plant.energy + amount).min(max);
}

/// Removes `amount` of size. Returns true if the plant was eaten down to nothing.
pub fn consume(plant: &mut Organism, amount: f64) -> bool {
    plant.energy -= amount;
    if plant.energy <= 0.0 {
        plant.energy = 0.0;
        plant.die();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile;
    use crate::config::EcologyConfig;
    use crate::lifecycle::create_organism;
    use trophica_data::{OrganismId, Position, Species};

    fn plant(species: Species, size: f64) -> (Organism, PlantProfile) {
        let org = create_organism(
            OrganismId(1),
            species,
            Position::default(),
            size,
            &EcologyConfig::default(),
        );
        let p = *profile(species).as_plant().unwrap();
        (org, p)
    }

    #[test]
    fn test_photosynthesis_and_growth_cap_at_max() {
        let (mut org, p) = plant(Species::Aspen, 99.0);
        photosynthesize(&mut org, &p, 1.0);
        assert_eq!(org.energy, 100.0);
        grow(&mut org, &p);
        assert_eq!(org.energy, 100.0);
    }

    #[test]
    fn test_regeneration_only_when_damaged() {
        let (mut org, p) = plant(Species::Berries, 25.0);
        regenerate(&mut org, &p, 0.7);
        assert_eq!(org.energy, 25.0);
        org.energy = 10.0;
        regenerate(&mut org, &p, 0.7);
        assert!((org.energy - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_wildflower_regrowth_boost() {
        let (mut org, p) = plant(Species::Wildflowers, 5.0);
        regenerate(&mut org, &p, 0.7);
        assert!((org.energy - 5.12).abs() < 1e-12);
        org.energy = 12.0;
        regenerate(&mut org, &p, 0.7);
        assert!((org.energy - 12.1).abs() < 1e-12);
    }

    #[test]
    fn test_consume_to_death_clamps() {
        let (mut org, _) = plant(Species::Berries, 10.0);
        assert!(consume(&mut org, 15.0));
        assert!(!org.alive);
        assert_eq!(org.energy, 0.0);
    }
}
