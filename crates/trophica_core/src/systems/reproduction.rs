use rand::Rng;
use std::f64::consts::TAU;
use trophica_data::Position;

/// Succeeds with probability `chance`; always consumes one draw.
pub fn coin_flip<R: Rng>(rng: &mut R, chance: f64) -> bool {
    rng.gen::<f64>() <= chance
}

/// Seed landing spot: uniform angle, uniform distance up to `radius`,
/// clamped to the world rectangle.
pub fn disperse_seed<R: Rng>(
    parent: Position,
    radius: f64,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Position {
    let angle = rng.gen::<f64>() * TAU;
    let distance = rng.gen::<f64>() * radius;
    Position {
        x: (parent.x + distance * angle.cos()).clamp(0.0, width),
        y: (parent.y + distance * angle.sin()).clamp(0.0, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seed_stays_in_radius_and_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let parent = Position::new(1.0, 99.0);
        for _ in 0..500 {
            let seed = disperse_seed(parent, 15.0, 100.0, 100.0, &mut rng);
            assert!((0.0..=100.0).contains(&seed.x));
            assert!((0.0..=100.0).contains(&seed.y));
            assert!(seed.distance_to(&parent) <= 15.0 + 1e-9);
        }
    }

    #[test]
    fn test_coin_flip_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..100).all(|_| coin_flip(&mut rng, 1.0)));
        assert!((0..100).all(|_| !coin_flip(&mut rng, -1.0)));
    }
}
