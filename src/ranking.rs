use crate::statistics::AlgorithmStat;

/// The best-performing entry for one scenario: minimum by mean elapsed time,
/// then by mean peak memory. Full ties keep the earliest entry, so input
/// order decides between identical measurements.
pub fn rank<'a>(stats: &'a [AlgorithmStat], scenario: &str) -> Option<&'a AlgorithmStat> {
    let mut best: Option<&AlgorithmStat> = None;
    for stat in stats.iter().filter(|stat| stat.scenario == scenario) {
        best = match best {
            Some(current) if !outranks(stat, current) => Some(current),
            _ => Some(stat),
        };
    }
    best
}

fn outranks(a: &AlgorithmStat, b: &AlgorithmStat) -> bool {
    if a.mean_elapsed != b.mean_elapsed {
        return a.mean_elapsed < b.mean_elapsed;
    }
    a.mean_peak_bytes < b.mean_peak_bytes
}

/// The winner of every scenario present in `stats`, ordered by scenario name.
pub fn best_per_scenario(stats: &[AlgorithmStat]) -> Vec<&AlgorithmStat> {
    let mut names: Vec<&str> = Vec::new();
    for stat in stats {
        if !names.contains(&stat.scenario.as_str()) {
            names.push(stat.scenario.as_str());
        }
    }
    names.sort_unstable();
    names.iter().filter_map(|name| rank(stats, name)).collect()
}
