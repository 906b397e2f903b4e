//! Randomized cross-checking of `TreapSet` against `std::collections::BTreeSet`.

use crate::treap::TreapSet;
use anyhow::{ensure, Result};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

/// Parameters of a stress run.
#[derive(Clone, Debug, PartialEq)]
pub struct StressConfig {
    /// Number of random operations to perform.
    pub iterations: usize,
    /// Keys are drawn uniformly from `0..=max_value`.
    pub max_value: u32,
    /// Seed for both the operation stream and the treap priorities.
    pub seed: u32,
}

impl StressConfig {
    pub fn new(iterations: usize, max_value: u32, seed: u32) -> Self {
        StressConfig {
            iterations,
            max_value,
            seed,
        }
    }
}

impl Default for StressConfig {
    fn default() -> Self {
        StressConfig::new(20_000, 5_000, 1)
    }
}

/// Counts of the operations performed by a stress run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StressReport {
    pub inserts: usize,
    pub removes: usize,
    pub skipped_removes: usize,
    pub searches: usize,
    pub selects: usize,
    pub ranks: usize,
    pub final_len: usize,
}

impl StressReport {
    pub fn operations(&self) -> usize {
        self.inserts + self.removes + self.skipped_removes + self.searches + self.selects + self.ranks
    }
}

/// Runs `config.iterations` random operations against a `TreapSet<u32>` and a `BTreeSet<u32>`,
/// failing on the first disagreement.
pub fn run(config: &StressConfig) -> Result<StressReport> {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, config.seed]);
    let mut set = TreapSet::with_seed([2, 2, 2, config.seed]);
    let mut expected = BTreeSet::new();
    let mut report = StressReport::default();

    info!(
        "starting stress run: iterations={}, max_value={}, seed={}",
        config.iterations, config.max_value, config.seed
    );

    for i in 0..config.iterations {
        let key = rng.gen_range(0, u64::from(config.max_value) + 1) as u32;
        match rng.gen_range(0, 5) {
            0 => {
                trace!("{}: insert {}", i, key);
                let inserted = set.insert(key);
                ensure!(
                    inserted == expected.insert(key),
                    "insert({}) disagreed on iteration {}",
                    key,
                    i
                );
                report.inserts += 1;
            },
            1 => {
                if expected.is_empty() {
                    report.skipped_removes += 1;
                    continue;
                }
                let index = rng.gen_range(0, expected.len());
                let target = *expected.iter().nth(index).unwrap_or(&key);
                trace!("{}: remove {}", i, target);
                expected.remove(&target);
                ensure!(
                    set.remove(&target) == Some(target),
                    "remove({}) failed on iteration {}",
                    target,
                    i
                );
                report.removes += 1;
            },
            2 => {
                trace!("{}: search {}", i, key);
                ensure!(
                    set.contains(&key) == expected.contains(&key),
                    "search({}) disagreed on iteration {}: expected {}",
                    key,
                    i,
                    expected.contains(&key)
                );
                report.searches += 1;
            },
            3 => {
                if !expected.is_empty() {
                    let index = rng.gen_range(0, expected.len());
                    trace!("{}: kth {}", i, index);
                    let actual = *set.kth(index)?;
                    let wanted = expected.iter().nth(index).cloned();
                    ensure!(
                        Some(actual) == wanted,
                        "kth({}) failed on iteration {}: expected {:?}, got {}",
                        index,
                        i,
                        wanted,
                        actual
                    );
                    ensure!(
                        set.rank(&actual) == index,
                        "rank(kth({})) failed on iteration {}",
                        index,
                        i
                    );
                }
                ensure!(
                    set.kth(expected.len()).is_err(),
                    "kth({}) was accepted on iteration {}",
                    expected.len(),
                    i
                );
                report.selects += 1;
            },
            _ => {
                trace!("{}: rank {}", i, key);
                let actual = set.rank(&key);
                let wanted = expected.range(..key).count();
                ensure!(
                    actual == wanted,
                    "rank({}) failed on iteration {}: expected {}, got {}",
                    key,
                    i,
                    wanted,
                    actual
                );
                report.ranks += 1;
            },
        }

        ensure!(
            set.len() == expected.len(),
            "size mismatch on iteration {}: expected {}, got {}",
            i,
            expected.len(),
            set.len()
        );

        if (i + 1) % 10_000 == 0 {
            debug!("{} operations done, {} keys", i + 1, set.len());
        }
    }

    for key in 0..=config.max_value {
        ensure!(
            set.contains(&key) == expected.contains(&key),
            "final verification failed for {}",
            key
        );
    }
    ensure!(
        set.iter().eq(expected.iter()),
        "in-order traversal differs from the expected keys"
    );

    report.final_len = set.len();
    info!("stress run passed: {:?}", report);
    Ok(report)
}
