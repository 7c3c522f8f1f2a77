//! Simulation — the two-colony run and its step loop.
//!
//! The simulation owns the environment, every ant, the scores, the step
//! counter and the single random generator. External readers only see state
//! between steps.
//!
//! Each tick, in order:
//! 1. Every ant acts once: colony A in creation order, then colony B
//! 2. Both pheromone fields decay
//! 3. Resources due at the current step respawn
//! 4. The step counter advances

use crate::environment_impl::GridEnvironment;
use crate::rng::{create_rng, fresh_seed, SimRng};
use crate::stats::{AntSnapshot, PheromoneSnapshot, Scoreboard, SimulationSnapshot, SimulationStats};
use forage_agents::ant::Ant;
use forage_core::config::SimConfig;
use forage_core::environment::Environment;
use forage_core::error::Result;
use forage_core::types::*;
use serde::Serialize;
use tracing::{debug, info};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForageEvent {
    /// An ant acted.
    Acted {
        step: Step,
        colony: ColonyId,
        ant: usize,
        action: AntAction,
    },
    /// A harvested cell grew back.
    Respawned {
        step: Step,
        cell: Cell,
        kind: ResourceKind,
    },
    /// A tick completed.
    TickComplete { step: Step, scores: Scoreboard },
}

/// One complete two-colony run.
pub struct Simulation {
    config: SimConfig,
    seed: u64,
    rng: SimRng,
    env: GridEnvironment,
    ants: Vec<Ant>,
    scores: Scoreboard,
    step: Step,
}

impl Simulation {
    /// Build a fresh run from a configuration.
    ///
    /// Fails with `InvalidConfiguration` before building anything if the
    /// configuration is rejected.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);
        let env = GridEnvironment::populated(&config, &mut rng);
        let ants = spawn_ants(&env, config.ants_per_colony);

        info!(
            grid_size = config.grid_size,
            ants_per_colony = config.ants_per_colony,
            resources = env.resource_count(),
            seed,
            "simulation initialized"
        );

        Ok(Self {
            config,
            seed,
            rng,
            env,
            ants,
            scores: Scoreboard::default(),
            step: 0,
        })
    }

    /// Build a fresh run with default rates.
    pub fn initialize(grid_size: usize, ants_per_colony: usize, num_resources: usize) -> Result<Self> {
        Self::new(SimConfig::new(grid_size, ants_per_colony, num_resources))
    }

    /// Throw away the current run and start over with the same configuration.
    ///
    /// The generator is reseeded with the run's seed, so a reset run replays
    /// the original one exactly.
    pub fn reset(&mut self) {
        self.rng = create_rng(self.seed);
        self.env = GridEnvironment::populated(&self.config, &mut self.rng);
        self.ants = spawn_ants(&self.env, self.config.ants_per_colony);
        self.scores = Scoreboard::default();
        self.step = 0;
        info!(seed = self.seed, "simulation reset");
    }

    /// Start over with a new configuration.
    ///
    /// On error the current run is left untouched.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Advance one step and report what happened.
    pub fn tick(&mut self) -> Vec<ForageEvent> {
        let step = self.step;
        let mut events = Vec::with_capacity(self.ants.len() + 1);

        let mut per_colony = [0usize; 2];
        for ant in &mut self.ants {
            let colony = ant.colony();
            let index = per_colony[colony.index()];
            per_colony[colony.index()] += 1;

            let action = ant.act(&mut self.env, &mut self.rng, step);
            if let AntAction::Delivered { nest } = action {
                self.scores.record_delivery(colony);
                debug!(step, colony = colony.name(), ant = index, %nest, "food delivered");
            }
            events.push(ForageEvent::Acted { step, colony, ant: index, action });
        }

        self.env.decay_pheromones();

        for (cell, kind) in self.env.respawn_resources(step, &mut self.rng) {
            events.push(ForageEvent::Respawned { step, cell, kind });
        }

        self.step += 1;
        events.push(ForageEvent::TickComplete { step, scores: self.scores });
        events
    }

    /// Run `steps` ticks back to back. Zero steps is a no-op.
    pub fn advance(&mut self, steps: u64) {
        for _ in 0..steps {
            self.tick();
        }
        if steps > 0 {
            debug!(
                steps,
                step = self.step,
                colony_a = self.scores.a,
                colony_b = self.scores.b,
                "advanced"
            );
        }
    }

    /// Run the configured number of steps.
    pub fn run(&mut self) {
        self.advance(self.config.steps);
    }

    // --- Read accessors ---

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seed this run was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn grid_size(&self) -> usize {
        self.env.grid_size()
    }

    pub fn environment(&self) -> &GridEnvironment {
        &self.env
    }

    pub fn nest(&self, colony: ColonyId) -> Cell {
        self.env.nest(colony)
    }

    /// Contents of the cell at `(x, y)`, or `None` off the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.env.grid().get(Cell::new(x, y))
    }

    /// A colony's pheromone at `(x, y)`, or `None` off the grid.
    pub fn pheromone(&self, colony: ColonyId, x: usize, y: usize) -> Option<f64> {
        self.env.pheromone_field(colony).get(Cell::new(x, y))
    }

    /// Every ant, colony A first, in creation order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// The ants of one colony, in creation order.
    pub fn colony_ants(&self, colony: ColonyId) -> impl Iterator<Item = &Ant> + '_ {
        self.ants.iter().filter(move |a| a.colony() == colony)
    }

    pub fn score(&self, colony: ColonyId) -> u64 {
        self.scores.get(colony)
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// The colony ahead on score, or `None` on a tie.
    pub fn leader(&self) -> Option<ColonyId> {
        self.scores.leader()
    }

    pub fn stats(&self) -> SimulationStats {
        let carrying = ColonyId::ALL.map(|c| self.colony_ants(c).filter(|a| a.has_food()).count());
        let pheromone_totals = ColonyId::ALL.map(|c| self.env.pheromone_field(c).total());
        SimulationStats {
            step: self.step,
            scores: self.scores,
            resources_on_grid: self.env.resource_count(),
            pending_respawns: self.env.pending_respawns(),
            carrying,
            pheromone_totals,
        }
    }

    /// A serializable copy of the full observable state.
    pub fn snapshot(&self) -> SimulationSnapshot {
        let mut per_colony = [0usize; 2];
        let ants = self
            .ants
            .iter()
            .map(|ant| {
                let index = per_colony[ant.colony().index()];
                per_colony[ant.colony().index()] += 1;
                AntSnapshot {
                    colony: ant.colony(),
                    index,
                    position: ant.position(),
                    has_food: ant.has_food(),
                }
            })
            .collect();

        SimulationSnapshot {
            config: self.config.clone(),
            seed: self.seed,
            step: self.step,
            grid_size: self.grid_size(),
            nests: ColonyId::ALL.map(|c| self.nest(c)).to_vec(),
            scores: self.scores,
            ants,
            resources: self.env.grid().resources().collect(),
            pending_respawns: self.env.respawn_schedule().iter().collect(),
            pheromones: ColonyId::ALL
                .iter()
                .map(|&colony| PheromoneSnapshot {
                    colony,
                    values: self.env.pheromone_field(colony).rows(),
                })
                .collect(),
            stats: self.stats(),
        }
    }
}

/// Create every ant on its nest, colony A first.
fn spawn_ants(env: &GridEnvironment, per_colony: usize) -> Vec<Ant> {
    ColonyId::ALL
        .iter()
        .flat_map(|&colony| (0..per_colony).map(move |_| Ant::at_nest(colony, env)))
        .collect()
}
