use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::grid::{Cell, Coordinate, Grid};

/// A named parking lot with a designated entry point for the car.
///
/// Immutable after construction; the origin is validated against the grid.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    grid: Grid,
    origin: Coordinate,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        origin: Coordinate,
    ) -> Result<Self, SearchError> {
        if !grid.contains(origin) {
            return Err(SearchError::InvalidOrigin {
                origin,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(Scenario {
            name: name.into(),
            grid,
            origin,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }
}

/// Load a corpus from the plain-text scenario format: blocks separated by
/// `---`, each holding a `# name` line, the grid size, the origin as
/// `row col`, and the grid rows as 0 (free) / 1 (occupied) tokens.
pub fn load_corpus(path: &Path) -> Result<Vec<Scenario>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    parse_corpus(&content).with_context(|| format!("parsing scenario file {}", path.display()))
}

pub fn parse_corpus(content: &str) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for block in content.split("---") {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            continue;
        }
        if lines.len() < 4 {
            bail!("scenario block starting with {:?} is incomplete", lines[0]);
        }

        let name = lines[0].trim_start_matches('#').trim();
        if name.is_empty() {
            bail!("scenario block has an empty name line");
        }

        let size: usize = lines[1]
            .parse()
            .with_context(|| format!("grid size of scenario '{name}'"))?;

        let origin_fields: Vec<&str> = lines[2].split_whitespace().collect();
        if origin_fields.len() != 2 {
            bail!("origin line of scenario '{name}' must be 'row col'");
        }
        let row: usize = origin_fields[0]
            .parse()
            .with_context(|| format!("origin row of scenario '{name}'"))?;
        let col: usize = origin_fields[1]
            .parse()
            .with_context(|| format!("origin col of scenario '{name}'"))?;

        let mut cells = Vec::new();
        for line in &lines[3..] {
            let row_cells: Vec<Cell> = line
                .split_whitespace()
                .map(|token| match token {
                    "0" => Ok(Cell::Free),
                    "1" => Ok(Cell::Occupied),
                    other => bail!("cell token '{other}' in scenario '{name}' is not 0 or 1"),
                })
                .collect::<Result<_>>()?;
            cells.push(row_cells);
        }

        let grid = Grid::from_rows(cells)
            .with_context(|| format!("grid of scenario '{name}'"))?;
        if grid.rows() != size || grid.cols() != size {
            bail!(
                "scenario '{name}' declares size {size} but the grid is {}x{}",
                grid.rows(),
                grid.cols()
            );
        }

        scenarios.push(Scenario::new(name, grid, Coordinate::new(row, col))?);
    }

    if scenarios.is_empty() {
        bail!("no scenarios found in input");
    }
    Ok(scenarios)
}

/// Built-in corpus used when no scenario file is given.
pub fn sample_corpus() -> Vec<Scenario> {
    let lots = [
        (
            "corner-entry",
            "..#..
             .#...
             ...#.
             #....
             ..#..",
            Coordinate::new(0, 0),
        ),
        (
            "center-bay",
            "#####
             #...#
             #.#.#
             #...#
             #####",
            Coordinate::new(2, 1),
        ),
        (
            "ring-fenced",
            "..#..
             .#...
             #....
             .....
             .....",
            Coordinate::new(0, 0),
        ),
        (
            "full-lot",
            "####
             ####
             ####
             ###.",
            Coordinate::new(3, 3),
        ),
        (
            "back-corner",
            "........
             .######.
             .#....#.
             .#.##.#.
             .#.##.#.
             .#....#.
             .######.
             ........",
            Coordinate::new(2, 2),
        ),
    ];

    lots.into_iter()
        .map(|(name, art, origin)| {
            let grid = Grid::from_ascii(art).expect("built-in lot is well-formed");
            Scenario::new(name, grid, origin).expect("built-in origin is in bounds")
        })
        .collect()
}

/// Generate a reproducible random lot. The same seed always yields the same
/// scenario; the origin cell is forced free so it is a valid car position.
pub fn random_scenario(
    name: impl Into<String>,
    rows: usize,
    cols: usize,
    occupancy: f64,
    seed: u64,
) -> Result<Scenario, SearchError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let occupancy = occupancy.clamp(0.0, 1.0);

    let mut cells: Vec<Vec<Cell>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.gen_bool(occupancy) {
                        Cell::Occupied
                    } else {
                        Cell::Free
                    }
                })
                .collect()
        })
        .collect();

    if rows == 0 || cols == 0 {
        return Err(SearchError::EmptyGrid);
    }
    let origin = Coordinate::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    cells[origin.row][origin.col] = Cell::Free;

    Scenario::new(name, Grid::from_rows(cells)?, origin)
}
