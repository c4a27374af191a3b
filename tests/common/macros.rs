/// Asserts the number of living organisms of one species.
#[macro_export]
macro_rules! assert_species_count {
    ($world:expr, $species:expr, $count:expr) => {
        assert_eq!(
            $world.count_of($species),
            $count,
            "{} count mismatch",
            $species
        );
    };
}

/// Asserts that the total population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!(
            $world.organism_count(),
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts the per-tick invariants: only living organisms remain after a
/// tick, none exceeds its species maximum, and the spatial index mirrors
/// the collection.
#[macro_export]
macro_rules! assert_world_consistent {
    ($world:expr) => {
        for org in $world.organisms() {
            let max = trophica_lib::trophica_core::catalog::profile(org.species).max_energy();
            assert!(org.alive, "{} {} was not purged", org.species, org.id);
            assert!(
                org.energy > 0.0 && org.energy <= max,
                "{} {} energy {} outside (0, {}]",
                org.species,
                org.id,
                org.energy,
                max
            );
            assert!(
                $world.spatial().contains(org.id, org.position),
                "{} missing from spatial index",
                org.id
            );
        }
        assert_eq!($world.spatial().len(), $world.organisms().len());
    };
}
