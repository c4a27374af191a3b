use crate::config::EcologyConfig;
use trophica_data::{Diet, Role};

/// Per-tick probability that a consumer locates food.
///
/// `min(1, available / max(1, competitors) * base_rate)`, and zero when
/// nothing edible is alive.
pub fn encounter_probability(available: usize, competitors: usize, base_rate: f64) -> f64 {
    if available == 0 {
        return 0.0;
    }
    let competition = competitors.max(1) as f64;
    (available as f64 / competition * base_rate).min(1.0)
}

/// Energy after eating, capped at `max_energy`.
pub fn assimilate(energy: f64, gained: f64, efficiency: f64, max_energy: f64) -> f64 {
    (energy + gained * efficiency).min(max_energy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForageKind {
    Graze,
    Hunt,
}

/// One feeding attempt: what to look for, how easily, and against whom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forage {
    pub kind: ForageKind,
    pub diet: Diet,
    pub base_rate: f64,
    /// Role whose living count divides the encounter rate.
    pub competitor_role: Role,
    /// Added to the competitor count when the forager is not of that role.
    pub self_competition: usize,
}

impl Forage {
    pub fn graze(diet: Diet, eater: Role, ecology: &EcologyConfig) -> Self {
        let omnivore = eater == Role::Omnivore;
        Self {
            kind: ForageKind::Graze,
            diet: diet.plant_part(),
            base_rate: if omnivore {
                ecology.omnivore_graze_rate
            } else {
                ecology.herbivore_encounter_rate
            },
            competitor_role: Role::Herbivore,
            self_competition: usize::from(omnivore),
        }
    }

    pub fn hunt(diet: Diet, eater: Role, ecology: &EcologyConfig) -> Self {
        let omnivore = eater == Role::Omnivore;
        Self {
            kind: ForageKind::Hunt,
            diet: diet.animal_part(),
            base_rate: if omnivore {
                ecology.omnivore_hunt_rate
            } else {
                ecology.carnivore_encounter_rate
            },
            competitor_role: Role::Carnivore,
            self_competition: usize::from(omnivore),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trophica_data::Species;

    #[test]
    fn test_encounter_probability() {
        assert_eq!(encounter_probability(0, 5, 0.2), 0.0);
        assert!((encounter_probability(10, 20, 0.2) - 0.1).abs() < 1e-12);
        assert!((encounter_probability(3, 0, 0.2) - 0.6).abs() < 1e-12);
        assert_eq!(encounter_probability(100, 1, 0.2), 1.0);
    }

    #[test]
    fn test_assimilate_caps() {
        assert!((assimilate(10.0, 10.0, 0.7, 40.0) - 17.0).abs() < 1e-12);
        assert_eq!(assimilate(39.0, 25.0, 0.7, 40.0), 40.0);
    }

    #[test]
    fn test_omnivore_forage_partitions() {
        let eco = EcologyConfig::default();
        let diet = Diet::of(&[Species::Berries, Species::Fox]);
        let graze = Forage::graze(diet, Role::Omnivore, &eco);
        assert_eq!(graze.diet, Diet::of(&[Species::Berries]));
        assert_eq!(graze.base_rate, 0.15);
        assert_eq!(graze.self_competition, 1);
        let hunt = Forage::hunt(diet, Role::Omnivore, &eco);
        assert_eq!(hunt.diet, Diet::of(&[Species::Fox]));
        assert_eq!(hunt.base_rate, 0.015);
        assert_eq!(hunt.competitor_role, Role::Carnivore);
    }

    #[test]
    fn test_herbivore_hunt_has_empty_diet() {
        let eco = EcologyConfig::default();
        let hunt = Forage::hunt(Diet::of(&[Species::Wildflowers]), Role::Herbivore, &eco);
        assert!(hunt.diet.is_empty());
        assert_eq!(hunt.self_competition, 0);
    }
}
