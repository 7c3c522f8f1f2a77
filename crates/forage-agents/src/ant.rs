//! Ant — the foraging agent.
//!
//! Each call to [`Ant::act`] runs exactly one transition of the state machine
//! against the shared environment:
//!
//! | State | Condition | Effect | Moves |
//! |-------|-----------|--------|-------|
//! | Foraging | standing on a resource | pick it up, become Returning | no |
//! | Foraging | otherwise | climb own pheromone, else random step | yes |
//! | Returning | standing on own nest | deliver, become Foraging | no |
//! | Returning | otherwise | lay pheromone here, random step | yes |
//!
//! Returning ants do not read pheromone; the way home is an unguided walk.

use crate::walk::{random_step, strongest_neighbor};
use forage_core::environment::Environment;
use forage_core::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Behavioural state, derived from whether the ant carries food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntState {
    Foraging,
    Returning,
}

/// One ant of one colony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    colony: ColonyId,
    position: Cell,
    has_food: bool,
}

impl Ant {
    /// A foraging ant standing at `position`.
    pub fn new(colony: ColonyId, position: Cell) -> Self {
        Self {
            colony,
            position,
            has_food: false,
        }
    }

    /// A foraging ant standing on its colony's nest.
    pub fn at_nest(colony: ColonyId, env: &dyn Environment) -> Self {
        Self::new(colony, env.nest(colony))
    }

    /// Start this ant off already carrying food.
    pub fn carrying(mut self) -> Self {
        self.has_food = true;
        self
    }

    pub fn colony(&self) -> ColonyId {
        self.colony
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn has_food(&self) -> bool {
        self.has_food
    }

    pub fn state(&self) -> AntState {
        if self.has_food {
            AntState::Returning
        } else {
            AntState::Foraging
        }
    }

    /// Run one step of behaviour.
    ///
    /// `step` is the current simulation step; pickups schedule their respawn
    /// relative to it.
    pub fn act<R: Rng + ?Sized>(
        &mut self,
        env: &mut dyn Environment,
        rng: &mut R,
        step: Step,
    ) -> AntAction {
        match self.state() {
            AntState::Foraging => self.forage(env, rng, step),
            AntState::Returning => self.return_home(env, rng),
        }
    }

    fn forage<R: Rng + ?Sized>(
        &mut self,
        env: &mut dyn Environment,
        rng: &mut R,
        step: Step,
    ) -> AntAction {
        let here = self.position;
        if env.tile(here).is_resource() {
            if let Some(kind) = env.pick_up(here, step) {
                self.has_food = true;
                return AntAction::PickedUp { cell: here, kind };
            }
        }

        match strongest_neighbor(env, self.colony, here) {
            Some(target) => {
                self.position = target;
                AntAction::Followed { from: here, to: target }
            }
            None => {
                self.position = random_step(here, env.grid_size(), rng);
                AntAction::Wandered {
                    from: here,
                    to: self.position,
                }
            }
        }
    }

    fn return_home<R: Rng + ?Sized>(&mut self, env: &mut dyn Environment, rng: &mut R) -> AntAction {
        let here = self.position;
        if here == env.nest(self.colony) {
            self.has_food = false;
            return AntAction::Delivered { nest: here };
        }

        env.deposit_pheromone(self.colony, here);
        self.position = random_step(here, env.grid_size(), rng);
        AntAction::Trailed {
            from: here,
            to: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::{BTreeMap, HashMap};

    /// Small in-memory world for exercising the state machine.
    struct World {
        size: usize,
        tiles: HashMap<Cell, Tile>,
        trails: HashMap<(ColonyId, Cell), f64>,
        scheduled: BTreeMap<Cell, Step>,
    }

    impl World {
        fn new(size: usize) -> Self {
            Self {
                size,
                tiles: HashMap::new(),
                trails: HashMap::new(),
                scheduled: BTreeMap::new(),
            }
        }
    }

    impl Environment for World {
        fn grid_size(&self) -> usize {
            self.size
        }
        fn nest(&self, colony: ColonyId) -> Cell {
            colony.nest(self.size)
        }
        fn tile(&self, cell: Cell) -> Tile {
            self.tiles.get(&cell).copied().unwrap_or_default()
        }
        fn pick_up(&mut self, cell: Cell, step: Step) -> Option<ResourceKind> {
            let kind = self.tiles.remove(&cell)?.resource()?;
            self.scheduled.insert(cell, step + 10);
            Some(kind)
        }
        fn pheromone(&self, colony: ColonyId, cell: Cell) -> f64 {
            self.trails.get(&(colony, cell)).copied().unwrap_or(0.0)
        }
        fn deposit_pheromone(&mut self, colony: ColonyId, cell: Cell) {
            *self.trails.entry((colony, cell)).or_default() += 3.0;
        }
    }

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(99)
    }

    #[test]
    fn forager_on_resource_picks_it_up_and_stays() {
        let mut world = World::new(5);
        let cell = Cell::new(0, 4);
        world.tiles.insert(cell, Tile::Resource(ResourceKind::Leaves));
        let mut ant = Ant::new(ColonyId::A, cell);

        let action = ant.act(&mut world, &mut rng(), 7);

        assert_eq!(action, AntAction::PickedUp { cell, kind: ResourceKind::Leaves });
        assert!(ant.has_food());
        assert_eq!(ant.state(), AntState::Returning);
        assert_eq!(ant.position(), cell);
        assert_eq!(world.tile(cell), Tile::Empty);
        assert_eq!(world.scheduled.get(&cell), Some(&17));
    }

    #[test]
    fn returner_on_nest_delivers_and_stays() {
        let mut world = World::new(10);
        let nest = world.nest(ColonyId::B);
        let mut ant = Ant::new(ColonyId::B, nest).carrying();

        let action = ant.act(&mut world, &mut rng(), 0);

        assert_eq!(action, AntAction::Delivered { nest });
        assert!(!ant.has_food());
        assert_eq!(ant.position(), nest);
        assert_eq!(world.pheromone(ColonyId::B, nest), 0.0);
    }

    #[test]
    fn returner_on_foreign_nest_keeps_walking() {
        let mut world = World::new(10);
        let foreign = world.nest(ColonyId::A);
        let mut ant = Ant::new(ColonyId::B, foreign).carrying();

        let action = ant.act(&mut world, &mut rng(), 0);

        assert!(matches!(action, AntAction::Trailed { .. }));
        assert!(ant.has_food());
        assert_eq!(world.pheromone(ColonyId::B, foreign), 3.0);
    }

    #[test]
    fn returner_lays_trail_then_moves_one_cell() {
        let mut world = World::new(6);
        let start = Cell::new(4, 0);
        let mut ant = Ant::new(ColonyId::A, start).carrying();

        let action = ant.act(&mut world, &mut rng(), 3);

        assert_eq!(world.pheromone(ColonyId::A, start), 3.0);
        let neighbors: Vec<Cell> = start.neighbors(6).iter().map(|(_, c)| *c).collect();
        assert!(neighbors.contains(&ant.position()));
        assert_eq!(action, AntAction::Trailed { from: start, to: ant.position() });
    }

    #[test]
    fn returner_ignores_pheromone() {
        // With a strong trail to the right, a guided walk would always go right.
        let mut world = World::new(9);
        let start = Cell::new(4, 4);
        world.trails.insert((ColonyId::A, Cell::new(5, 4)), 100.0);
        let mut rng = rng();
        let mut destinations = std::collections::HashSet::new();
        for _ in 0..40 {
            let mut ant = Ant::new(ColonyId::A, start).carrying();
            ant.act(&mut world, &mut rng, 0);
            destinations.insert(ant.position());
        }
        assert!(destinations.len() > 1);
    }

    #[test]
    fn forager_climbs_its_own_trail() {
        let mut world = World::new(5);
        let start = Cell::new(1, 1);
        world.trails.insert((ColonyId::A, Cell::new(1, 0)), 0.5);
        world.trails.insert((ColonyId::B, Cell::new(2, 1)), 9.0);
        let mut ant = Ant::new(ColonyId::A, start);

        let action = ant.act(&mut world, &mut rng(), 0);

        assert_eq!(action, AntAction::Followed { from: start, to: Cell::new(1, 0) });
        assert!(!ant.has_food());
    }

    #[test]
    fn forager_without_trail_wanders() {
        let mut world = World::new(5);
        let start = Cell::new(2, 2);
        let mut ant = Ant::at_nest(ColonyId::A, &world);
        assert_eq!(ant.position(), start);

        let action = ant.act(&mut world, &mut rng(), 0);

        assert!(matches!(action, AntAction::Wandered { .. }));
        assert_ne!(ant.position(), start);
    }

    #[test]
    fn full_round_trip() {
        // Resource one cell from the nest; deliver after pickup and a walk home.
        let mut world = World::new(5);
        let nest = world.nest(ColonyId::A);
        let food = Cell::new(2, 3);
        world.tiles.insert(food, Tile::Resource(ResourceKind::Wood));
        let mut ant = Ant::new(ColonyId::A, food);
        let mut rng = rng();

        ant.act(&mut world, &mut rng, 0);
        assert!(ant.has_food());

        let mut delivered = false;
        for step in 1..2_000 {
            if let AntAction::Delivered { nest: at } = ant.act(&mut world, &mut rng, step) {
                assert_eq!(at, nest);
                delivered = true;
                break;
            }
        }
        assert!(delivered, "random walk on a 5x5 torus should reach the nest");
        assert!(!ant.has_food());
    }
}
