use super::World;
use crate::lifecycle;
use trophica_data::{OrganismId, Position, Species};

impl World {
    /// Adds a new organism and indexes it. Ids are handed out in creation order.
    ///
    /// Energy (size, for plants) is clamped to the species maximum. An
    /// organism created with no energy, or at a position the spatial index
    /// cannot bucket, is never registered.
    pub fn add_organism(&mut self, species: Species, position: Position, energy: f64) -> OrganismId {
        let id = OrganismId(self.next_id);
        self.next_id += 1;
        let org = lifecycle::create_organism(id, species, position, energy, &self.config.ecology);
        if !org.alive {
            return id;
        }
        if !self.spatial.insert(id, org.position) {
            tracing::warn!(
                species = %species,
                x = org.position.x,
                y = org.position.y,
                "Rejected organism at an unindexable position"
            );
            return id;
        }
        self.live_counts[species.index()] += 1;
        self.organisms.push(org);
        id
    }

    /// Removes an organism from the world and the spatial index at once.
    /// Returns false if no such organism exists.
    pub fn remove_organism(&mut self, id: OrganismId) -> bool {
        let Some(idx) = self.organisms.iter().position(|o| o.id == id) else {
            return false;
        };
        let org = self.organisms.remove(idx);
        if org.alive {
            self.live_counts[org.species.index()] -= 1;
        }
        self.spatial.remove(org.id, org.position);
        true
    }

    /// Offspring born during a tick; logged as a birth.
    pub(crate) fn spawn(&mut self, species: Species, position: Position, energy: f64) {
        self.add_organism(species, position, energy);
        self.metrics.record_birth();
    }

    /// Flags `idx` dead, keeping the per-species tallies current.
    pub(crate) fn mark_dead(&mut self, idx: usize) {
        let org = &mut self.organisms[idx];
        if org.alive {
            org.die();
            self.live_counts[org.species.index()] -= 1;
        }
    }
}
