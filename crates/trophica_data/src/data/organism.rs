use super::species::{Diet, Role, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// World position of an organism. Feeding ignores it; only radius queries read it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Monotonic organism identifier handed out by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrganismId(pub u64);

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single plant or animal.
///
/// `energy` is the size of a plant and the energy reserve of an animal.
/// `since_reproduction` counts ticks since the last successful reproduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub id: OrganismId,
    pub species: Species,
    pub age: u32,
    pub energy: f64,
    pub alive: bool,
    pub position: Position,
    pub since_reproduction: u32,
    pub diet: Diet,
}

impl Organism {
    #[inline]
    pub fn role(&self) -> Role {
        self.species.role()
    }

    pub fn is_plant(&self) -> bool {
        self.role() == Role::Plant
    }

    pub fn die(&mut self) {
        self.alive = false;
    }
}
