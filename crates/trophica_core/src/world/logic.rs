use super::World;
use crate::catalog::{self, SpeciesProfile};
use crate::lifecycle;
use crate::systems::foraging::{self, Forage, ForageKind};
use crate::systems::{growth, reproduction};
use rand::Rng;
use trophica_data::Role;

impl World {
    pub(super) fn update_plant(&mut self, idx: usize) {
        let species = self.organisms[idx].species;
        let Some(profile) = catalog::profile(species).as_plant().copied() else {
            return;
        };
        let eco = self.config.ecology;
        let org = &mut self.organisms[idx];

        lifecycle::advance_age(org);
        growth::photosynthesize(org, &profile, self.sunlight);
        growth::grow(org, &profile);
        growth::regenerate(org, &profile, eco.regeneration_threshold);

        if !lifecycle::reproduction_ready(org, &eco)
            || !reproduction::coin_flip(&mut self.rng, eco.plant_reproduction_chance)
        {
            return;
        }
        let seed = reproduction::disperse_seed(
            org.position,
            profile.dispersal_radius,
            self.width,
            self.height,
            &mut self.rng,
        );
        org.energy *= eco.plant_reproduction_retained;
        org.since_reproduction = 0;
        self.spawn(species, seed, profile.seedling_size);
    }

    /// Herbivores and carnivores: hunt, graze if the hunt found nothing.
    pub(super) fn update_animal(&mut self, idx: usize) {
        if self.begin_animal_tick(idx).is_none() {
            return;
        }
        let (diet, role) = (self.organisms[idx].diet, self.organisms[idx].role());
        let eco = self.config.ecology;

        if !self.forage(idx, Forage::hunt(diet, role, &eco)) {
            self.forage(idx, Forage::graze(diet, role, &eco));
        }
        self.finish_animal_tick(idx);
    }

    /// Omnivores hunt when moderately hungry, otherwise graze, and hunt
    /// again if grazing failed and they are desperate.
    pub(super) fn update_omnivore(&mut self, idx: usize) {
        let Some(max_energy) = self.begin_animal_tick(idx) else {
            return;
        };
        let (diet, role) = (self.organisms[idx].diet, self.organisms[idx].role());
        let eco = self.config.ecology;

        let mut fed = false;
        if self.organisms[idx].energy < max_energy * eco.omnivore_hunt_threshold {
            fed = self.forage(idx, Forage::hunt(diet, role, &eco));
        }
        if !fed {
            fed = self.forage(idx, Forage::graze(diet, role, &eco));
        }
        if !fed && self.organisms[idx].energy < max_energy * eco.omnivore_desperate_threshold {
            self.forage(idx, Forage::hunt(diet, role, &eco));
        }
        self.finish_animal_tick(idx);
    }

    /// Ages and metabolizes an animal. Returns its max energy.
    fn begin_animal_tick(&mut self, idx: usize) -> Option<f64> {
        let profile = *catalog::profile(self.organisms[idx].species).as_animal()?;
        let org = &mut self.organisms[idx];
        lifecycle::advance_age(org);
        lifecycle::metabolize(org, profile.metabolic_cost);
        Some(profile.max_energy)
    }

    /// Survival check, then a reproduction attempt. Offspring appear at the
    /// parent's position.
    fn finish_animal_tick(&mut self, idx: usize) {
        if lifecycle::check_survival(&mut self.organisms[idx]) {
            self.live_counts[self.organisms[idx].species.index()] -= 1;
            return;
        }
        let eco = self.config.ecology;
        let org = &self.organisms[idx];
        if !lifecycle::reproduction_ready(org, &eco)
            || !reproduction::coin_flip(&mut self.rng, eco.animal_reproduction_chance)
        {
            return;
        }
        let species = org.species;
        let Some(profile) = catalog::profile(species).as_animal().copied() else {
            return;
        };
        let org = &mut self.organisms[idx];
        org.energy -= profile.reproduction_cost;
        org.since_reproduction = 0;
        let position = org.position;
        self.spawn(species, position, profile.offspring_energy);
    }

    /// One feeding attempt for the organism at `idx`. Returns true if it ate.
    ///
    /// Draw order: encounter roll, prey pick, then (hunting only) the kill
    /// roll. Drawing itself as prey counts as a missed encounter.
    fn forage(&mut self, idx: usize, attempt: Forage) -> bool {
        if attempt.diet.is_empty() {
            return false;
        }
        let available = self.count_matching(attempt.diet);
        if available == 0 {
            return false;
        }
        let competitors = self.total_of_role(attempt.competitor_role) + attempt.self_competition;
        let p = foraging::encounter_probability(available, competitors, attempt.base_rate);
        if self.rng.gen::<f64>() >= p {
            return false;
        }
        let Some(prey) = self.random_matching_index(attempt.diet) else {
            return false;
        };
        if prey == idx {
            return false;
        }
        if attempt.kind == ForageKind::Hunt {
            let Some(hunter) = catalog::profile(self.organisms[idx].species).as_animal().copied()
            else {
                return false;
            };
            let target = &self.organisms[prey];
            let success = hunter.hunt_success.probability(
                self.organisms[idx].energy,
                target.species,
                target.energy,
            );
            if self.rng.gen::<f64>() >= success {
                return false;
            }
        }
        self.eat(idx, prey);
        true
    }

    /// Plants lose the yielded amount of size; animals are killed outright.
    fn eat(&mut self, eater: usize, prey: usize) {
        let prey_species = self.organisms[prey].species;
        let gained = catalog::yield_of(prey_species, self.organisms[prey].energy);

        if prey_species.role() == Role::Plant {
            if growth::consume(&mut self.organisms[prey], gained) {
                self.live_counts[prey_species.index()] -= 1;
            }
        } else {
            self.mark_dead(prey);
        }

        let max_energy = match catalog::profile(self.organisms[eater].species) {
            SpeciesProfile::Animal(a) => a.max_energy,
            SpeciesProfile::Plant(p) => p.max_size,
        };
        let org = &mut self.organisms[eater];
        org.energy = foraging::assimilate(
            org.energy,
            gained,
            self.config.ecology.assimilation_efficiency,
            max_energy,
        );
    }
}
