use super::World;
use std::time::Instant;
use trophica_data::Role;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

impl World {
    /// Advances the simulation by `steps` ticks.
    pub fn tick(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Organisms present when the tick starts are updated once each, in
    /// collection order; offspring born during the tick wait for the next
    /// one. Dead organisms are then purged and the census recorded.
    ///
    /// # Returns
    /// Births, deaths and the surviving population for this tick.
    pub fn step(&mut self) -> TickReport {
        let start = Instant::now();
        self.tick += 1;
        let snapshot = self.organisms.len();

        for idx in 0..snapshot {
            if !self.organisms[idx].alive {
                continue;
            }
            match self.organisms[idx].role() {
                Role::Plant => self.update_plant(idx),
                Role::Herbivore | Role::Carnivore => self.update_animal(idx),
                Role::Omnivore => self.update_omnivore(idx),
            }
        }

        let births = self.organisms.len() - snapshot;
        let deaths = self.purge_dead();
        let census = self.census();
        self.recorder.record(&census, self.tick);
        self.metrics
            .record_tick(self.tick, start.elapsed(), self.organisms.len());

        TickReport {
            tick: self.tick,
            births,
            deaths,
            population: self.organisms.len(),
        }
    }

    /// Drops every dead organism from the collection and the spatial index.
    fn purge_dead(&mut self) -> usize {
        let before = self.organisms.len();
        let spatial = &mut self.spatial;
        self.organisms.retain(|o| {
            if !o.alive {
                spatial.remove(o.id, o.position);
            }
            o.alive
        });
        let removed = before - self.organisms.len();
        self.metrics.record_deaths(removed);
        removed
    }
}
