//! End-to-end scenarios for the two-colony run.

use forage_core::environment::Environment;
use forage_runtime::prelude::*;

#[test]
fn fresh_run_starts_at_the_nests() {
    let mut sim = Simulation::initialize(10, 3, 5).unwrap();
    sim.advance(0);

    assert_eq!(sim.step(), 0);
    assert_eq!(sim.scores(), Scoreboard::default());
    assert_eq!(sim.ants().len(), 6);
    for colony in ColonyId::ALL {
        assert_eq!(sim.colony_ants(colony).count(), 3);
        assert!(sim
            .colony_ants(colony)
            .all(|a| a.position() == sim.nest(colony) && !a.has_food()));
    }
}

#[test]
fn zero_sized_grid_is_rejected() {
    let err = Simulation::initialize(0, 3, 5).err().unwrap();
    assert!(matches!(err, ForageError::InvalidConfiguration(ConfigError::EmptyGrid)));
}

#[test]
fn ant_on_resource_picks_it_up_without_moving() {
    let config = SimConfig::new(5, 0, 0).with_seed(0);
    let mut env = GridEnvironment::new(&config);
    let mut rng = create_rng(0);
    let cell = Cell::new(0, 0);
    env.set_tile(cell, Tile::Resource(ResourceKind::Wood));
    let mut ant = Ant::new(ColonyId::A, cell);

    ant.act(&mut env, &mut rng, 0);

    assert!(ant.has_food());
    assert_eq!(ant.state(), AntState::Returning);
    assert_eq!(ant.position(), cell);
    assert_eq!(env.tile(cell), Tile::Empty);
    assert_eq!(env.respawn_due_at(cell), Some(config.respawn_delay));
}

#[test]
fn loaded_ant_on_nest_scores_once() {
    let config = SimConfig::new(10, 0, 0).with_seed(0);
    let mut env = GridEnvironment::new(&config);
    let mut rng = create_rng(0);
    let nest = env.nest(ColonyId::B);
    let mut ant = Ant::new(ColonyId::B, nest).carrying();
    let mut scores = Scoreboard::default();

    if let AntAction::Delivered { .. } = ant.act(&mut env, &mut rng, 0) {
        scores.record_delivery(ColonyId::B);
    }

    assert_eq!(scores.get(ColonyId::B), 1);
    assert_eq!(scores.get(ColonyId::A), 0);
    assert!(!ant.has_food());
    assert_eq!(ant.position(), nest);
}

#[test]
fn colonies_score_on_a_small_grid() {
    let config = SimConfig::new(10, 20, 30).with_seed(7);
    let mut sim = Simulation::new(config).unwrap();
    sim.advance(400);

    let stats = sim.stats();
    assert!(stats.scores.total() > 0, "40 ants over 400 steps should deliver something");
    assert_eq!(stats.step, 400);
    assert_eq!(stats.scores, sim.scores());
}

#[test]
fn advancing_in_batches_matches_one_long_run() {
    let config = SimConfig::new(12, 5, 20).with_seed(99);
    let mut batched = Simulation::new(config.clone()).unwrap();
    let mut single = Simulation::new(config).unwrap();

    batched.advance(25);
    batched.advance(0);
    batched.advance(35);
    single.advance(60);

    assert_eq!(batched.step(), 60);
    assert_eq!(batched.snapshot(), single.snapshot());
}

#[test]
fn snapshot_serializes_to_json() {
    let mut sim = Simulation::new(SimConfig::new(6, 2, 4).with_seed(5)).unwrap();
    sim.advance(10);
    let json = sim.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["step"], 10);
    assert_eq!(value["grid_size"], 6);
    assert_eq!(value["ants"].as_array().unwrap().len(), 4);
}
