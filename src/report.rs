use std::io::{self, Write};

use rustc_hash::FxHashSet;

use crate::algorithms::Route;
use crate::grid::{Cell, Coordinate, Grid};
use crate::statistics::AlgorithmStat;

/// Print the full measurement table in corpus order.
pub fn print_results(stats: &[AlgorithmStat]) {
    println!("\n=== BENCHMARK RESULTS ===");
    println!(
        "{:<25} {:<10} {:<10} {:<15} {:<15}",
        "Scenario", "Algorithm", "Distance", "Time (s)", "Peak mem (B)"
    );
    println!("{}", "-".repeat(78));
    for stat in stats {
        println!(
            "{:<25} {:<10} {:<10} {:<15.6} {:<15.1}",
            stat.scenario,
            stat.algorithm,
            stat.distance_label(),
            stat.mean_elapsed.as_secs_f64(),
            stat.mean_peak_bytes
        );
    }
}

/// Print the winner of each scenario.
pub fn print_best(best: &[&AlgorithmStat]) {
    println!("\n=== BEST ALGORITHM PER SCENARIO ===");
    println!(
        "{:<25} {:<15} {:<15} {:<15}",
        "Scenario", "Best", "Time (s)", "Peak mem (B)"
    );
    println!("{}", "-".repeat(72));
    for stat in best {
        println!(
            "{:<25} {:<15} {:<15.6} {:<15.1}",
            stat.scenario,
            stat.algorithm,
            stat.mean_elapsed.as_secs_f64(),
            stat.mean_peak_bytes
        );
    }
}

/// Write the stats as CSV, one row per (scenario, algorithm).
pub fn write_csv<W: Write>(stats: &[AlgorithmStat], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "scenario,algorithm,distance,mean_time_s,mean_peak_bytes")?;
    for stat in stats {
        writeln!(
            writer,
            "{},{},{},{:.9},{:.1}",
            stat.scenario,
            stat.algorithm,
            stat.distance_label(),
            stat.mean_elapsed.as_secs_f64(),
            stat.mean_peak_bytes
        )?;
    }
    Ok(())
}

/// Render the lot with the car, the traced route, and the chosen spot.
pub fn route_map(grid: &Grid, origin: Coordinate, route: &Route) -> String {
    let on_path: FxHashSet<Coordinate> = route.path.iter().copied().collect();

    let mut out = String::new();
    out.push_str("Legend: S=car, P=spot, *=route, #=occupied, .=free\n");

    out.push_str("   ");
    for col in 0..grid.cols() {
        out.push_str(&format!("{:2}", col % 10));
    }
    out.push('\n');

    for row in 0..grid.rows() {
        out.push_str(&format!("{:2} ", row));
        for col in 0..grid.cols() {
            let c = Coordinate::new(row, col);
            let glyph = if c == origin {
                'S'
            } else if c == route.spot {
                'P'
            } else if on_path.contains(&c) {
                '*'
            } else {
                match grid.cell(c) {
                    Ok(Cell::Occupied) => '#',
                    _ => '.',
                }
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
