use anyhow::{bail, Context, Result};
use clap::Parser;

use parking_search::algorithms::trace_route;
use parking_search::benchmark::BenchmarkHarness;
use parking_search::config::Config;
use parking_search::grid::Coordinate;
use parking_search::ranking;
use parking_search::report;
use parking_search::scenario::{self, Scenario};

fn main() {
    env_logger::init();
    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut scenarios = match &config.scenario_file {
        Some(path) => scenario::load_corpus(path)?,
        None => scenario::sample_corpus(),
    };

    for i in 0..config.random_scenarios {
        let name = format!("random-{:02}", i + 1);
        scenarios.push(scenario::random_scenario(
            name,
            config.grid_size,
            config.grid_size,
            config.occupancy,
            config.seed.wrapping_add(i as u64),
        )?);
    }

    if config.route {
        run_route(config, &scenarios)
    } else {
        run_benchmark(config, &scenarios)
    }
}

fn run_benchmark(config: &Config, scenarios: &[Scenario]) -> Result<()> {
    if !config.quiet {
        println!(
            "Comparing BFS, Dijkstra and A* over {} scenarios...",
            scenarios.len()
        );
        println!("Repetitions per (algorithm, scenario) pair: {}", config.repetitions);
    }

    let harness = BenchmarkHarness::new(config.repetitions);
    let stats = harness.run_corpus(scenarios)?;

    report::print_results(&stats);
    let best = ranking::best_per_scenario(&stats);
    report::print_best(&best);

    if let Some(path) = &config.output_file {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        report::write_csv(&stats, &mut file)
            .with_context(|| format!("writing {}", path.display()))?;
        if !config.quiet {
            println!("\nResults written to {}", path.display());
        }
    }

    Ok(())
}

fn run_route(config: &Config, scenarios: &[Scenario]) -> Result<()> {
    let scenario = match &config.scenario {
        Some(name) => scenarios
            .iter()
            .find(|s| s.name() == name)
            .with_context(|| format!("no scenario named '{name}' in the corpus"))?,
        None => scenarios.first().context("the corpus is empty")?,
    };

    let origin = Coordinate::new(
        config.origin_row.unwrap_or(scenario.origin().row),
        config.origin_col.unwrap_or(scenario.origin().col),
    );

    let grid = scenario.grid();
    if !grid.contains(origin) {
        bail!(
            "origin {} is outside the {}x{} lot",
            origin,
            grid.rows(),
            grid.cols()
        );
    }
    if grid.is_occupied(origin)? {
        bail!("cannot start from {origin}: that spot is taken");
    }

    // The car now stands on the origin.
    let seeded = grid.with_occupied(origin)?;

    println!("Scenario: {}", scenario.name());
    println!("Car at {origin}");
    println!("Free spots in the lot: {}", seeded.free_cells());
    match trace_route(&seeded, origin)? {
        Some(route) => {
            println!(
                "Nearest free spot: {} ({} moves)",
                route.spot, route.distance
            );
            println!();
            print!("{}", report::route_map(&seeded, origin, &route));
        }
        None => println!("No free spot in this lot."),
    }

    Ok(())
}
