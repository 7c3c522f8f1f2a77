//! Run the two-colony simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use forage_runtime::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::config::{Config, Overrides};

pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub overrides: Overrides,
    pub snapshot: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run(options: RunOptions, verbose: bool) -> Result<()> {
    let mut config = match &options.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply(&options.overrides);

    let mut sim = Simulation::new(config.simulation.clone())
        .context("Failed to build simulation")?;
    let steps = sim.config().steps;

    println!(
        "{} Running {} steps on a {}x{} grid ({} ants per colony, seed {})",
        "→".blue(),
        steps.to_string().cyan(),
        sim.grid_size(),
        sim.grid_size(),
        sim.config().ants_per_colony.to_string().cyan(),
        sim.seed().to_string().cyan()
    );

    let pb = if config.output.progress && !options.quiet {
        let pb = ProgressBar::new(steps);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} steps {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for _ in 0..steps {
        let events = sim.tick();
        if verbose {
            for event in &events {
                if let ForageEvent::Acted { step, colony, ant, action: AntAction::Delivered { nest } } = event {
                    pb.println(format!("  step {step}: {colony} ant {ant} delivered at {nest}"));
                }
            }
        }
        let scores = sim.scores();
        pb.set_message(format!("A {} | B {}", scores.a, scores.b));
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_summary(&sim);

    if let Some(path) = options.snapshot.or(config.output.snapshot) {
        let json = sim.snapshot().to_json().context("Failed to serialize snapshot")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
        println!("  {} Snapshot written to {}", "✓".green(), path.display());
    }

    Ok(())
}

fn print_summary(sim: &Simulation) {
    let stats = sim.stats();
    println!();
    println!("{} Simulation complete at step {}", "✓".green().bold(), stats.step);
    for colony in ColonyId::ALL {
        let nest = sim.nest(colony);
        println!(
            "  {}: score {}  (nest {}, carrying {}, trail {:.1})",
            colony.name().bold(),
            stats.scores.get(colony).to_string().green(),
            nest,
            stats.carrying[colony.index()],
            stats.pheromone_totals[colony.index()]
        );
    }
    println!(
        "  Resources: {} on grid, {} regrowing",
        stats.resources_on_grid.to_string().yellow(),
        stats.pending_respawns.to_string().yellow()
    );
    match sim.leader() {
        Some(colony) => println!("  {} leads", colony.name().cyan().bold()),
        None => println!("  {}", "Tied".cyan().bold()),
    }
}
