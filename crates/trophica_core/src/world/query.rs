use super::World;
use rand::Rng;
use trophica_data::{Census, Diet, Organism, OrganismId, Position, Role, Species};

impl World {
    /// Living organisms per species, in order of first appearance in the collection.
    pub fn census(&self) -> Census {
        let mut census = Census::new();
        for org in self.organisms.iter().filter(|o| o.alive) {
            census.tally(org.species);
        }
        census
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.live_counts[species.index()]
    }

    /// Number of living organisms whose species is in `diet`.
    pub fn count_matching(&self, diet: Diet) -> usize {
        diet.iter().map(|s| self.live_counts[s.index()]).sum()
    }

    /// Number of living organisms of exactly `role`.
    pub fn total_of_role(&self, role: Role) -> usize {
        Species::ALL
            .iter()
            .filter(|s| s.role() == role)
            .map(|s| self.live_counts[s.index()])
            .sum()
    }

    /// Picks a living organism of a species in `diet`, uniformly at random.
    pub fn random_matching(&mut self, diet: Diet) -> Option<&Organism> {
        let idx = self.random_matching_index(diet)?;
        Some(&self.organisms[idx])
    }

    /// Draws once from the world's stream, then walks the collection in
    /// order to the chosen match. No draw is made when nothing matches.
    pub(crate) fn random_matching_index(&mut self, diet: Diet) -> Option<usize> {
        let count = self.count_matching(diet);
        if count == 0 {
            return None;
        }
        let target = self.rng.gen_range(0..count);
        self.organisms
            .iter()
            .enumerate()
            .filter(|(_, o)| o.alive && diet.contains(o.species))
            .nth(target)
            .map(|(idx, _)| idx)
    }

    pub fn get(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms.iter().find(|o| o.id == id)
    }

    /// Ids of organisms within `radius` of `center`, via the spatial index.
    pub fn organisms_in_radius(&self, center: Position, radius: f64) -> Vec<OrganismId> {
        self.spatial.query_radius(center, radius)
    }
}
