mod common;

use common::WorldBuilder;
use trophica_lib::trophica_core::Preset;
use trophica_lib::trophica_data::Species;

#[test]
fn test_census_matches_living_organisms_every_tick() {
    let mut world = WorldBuilder::new()
        .with_seed(2024)
        .with_preset(Preset::BoomBust, 2024)
        .build();

    for _ in 0..150 {
        world.step();
        let recorded = world.recorder().summary();
        for species in Species::ALL {
            let alive = world
                .organisms()
                .iter()
                .filter(|o| o.alive && o.species == species)
                .count();
            assert_eq!(world.count_of(species), alive, "{species} tally drifted");
            let in_history = recorded
                .iter()
                .find(|(s, _)| *s == species)
                .map(|(_, n)| *n as usize);
            if let Some(n) = in_history {
                assert_eq!(n, alive, "{species} recorded {n}, alive {alive}");
            } else {
                assert_eq!(alive, 0, "{species} alive but never recorded");
            }
        }
    }
}

#[test]
fn test_energy_bounds_and_spatial_sync_hold() {
    for preset in Preset::ALL {
        let mut world = WorldBuilder::new()
            .with_seed(31)
            .with_preset(preset, 31)
            .build();
        assert_world_consistent!(world);
        for _ in 0..100 {
            world.step();
            assert_world_consistent!(world);
        }
    }
}

#[test]
fn test_history_has_one_row_per_tick() {
    let mut world = WorldBuilder::new()
        .with_preset(Preset::PlantParadise, 3)
        .build();
    world.tick(40);
    let table = world.recorder().to_table();
    assert_eq!(table.len(), 40);
    assert_eq!(table.ticks, (1..=40).collect::<Vec<u64>>());
    for column in &table.columns {
        assert_eq!(column.len(), 40);
    }
}

#[test]
fn test_offspring_and_purge_are_counted_in_report() {
    let mut world = WorldBuilder::new()
        .with_seed(5)
        .with_preset(Preset::HighBiodiversity, 5)
        .build();
    let mut previous = world.organism_count();
    for _ in 0..50 {
        let report = world.step();
        assert_eq!(report.population, previous + report.births - report.deaths);
        assert_population!(world, report.population);
        previous = report.population;
    }
}
