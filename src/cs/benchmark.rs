use log::debug;
use std::fmt;

use crate::coins::{Breakdown, Denominations};
use crate::dynamic::min_coin_change;
use crate::error::Result;
use crate::greedy::greedy_change;
use crate::timing::measure_execution_time;

/// Amounts timed by the default benchmark.
pub const TEST_AMOUNTS: [usize; 3] = [113, 1013, 1_000_033];

/// Amount whose breakdown is shown before timing.
pub const DEMO_AMOUNT: usize = 113;

/// Change-making strategy under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Greedy,
    Dynamic,
}

impl Algorithm {
    /// Greedy first, matching the order of the benchmark passes.
    pub const ALL: [Algorithm; 2] = [Algorithm::Greedy, Algorithm::Dynamic];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Dynamic => "dynamic programming",
        }
    }

    pub fn make_change(&self, denominations: &Denominations, amount: usize) -> Result<Breakdown> {
        match self {
            Algorithm::Greedy => Ok(greedy_change(denominations, amount)),
            Algorithm::Dynamic => min_coin_change(denominations, amount),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for the demonstration and timing run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Coin set passed to both algorithms
    pub denominations: Denominations,
    /// Amount whose breakdown is printed
    pub demo_amount: usize,
    /// Amounts timed in each pass
    pub test_amounts: Vec<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            denominations: Denominations::standard(),
            demo_amount: DEMO_AMOUNT,
            test_amounts: TEST_AMOUNTS.to_vec(),
        }
    }
}

/// One single-shot timing of an algorithm on an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    pub algorithm: Algorithm,
    pub amount: usize,
    pub seconds: f64,
}

impl fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount {}: {:.6} seconds", self.amount, self.seconds)
    }
}

/// Times `algorithm` once on `amount`.
///
/// # Errors
///
/// Propagates `Error::UnreachableAmount` from the dynamic programming solver.
pub fn time_algorithm(
    algorithm: Algorithm,
    denominations: &Denominations,
    amount: usize,
) -> Result<TimingRecord> {
    let mut change = Ok(Breakdown::new());
    let seconds = measure_execution_time(
        |a: usize| change = algorithm.make_change(denominations, a),
        amount,
    );
    change?;

    let record = TimingRecord {
        algorithm,
        amount,
        seconds,
    };
    debug!("{} {}", algorithm, record);
    Ok(record)
}

/// Times every algorithm on every configured amount.
///
/// Records come back in two passes: all greedy timings in amount order,
/// then all dynamic programming timings.
///
/// # Examples
///
/// ```
/// use change_algos::benchmark::{run_benchmark, Algorithm, BenchmarkConfig};
///
/// let config = BenchmarkConfig {
///     test_amounts: vec![7, 42],
///     ..BenchmarkConfig::default()
/// };
/// let records = run_benchmark(&config).unwrap();
/// assert_eq!(records.len(), 4);
/// assert_eq!(records[0].algorithm, Algorithm::Greedy);
/// assert_eq!(records[3].algorithm, Algorithm::Dynamic);
/// ```
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<Vec<TimingRecord>> {
    let mut records = Vec::with_capacity(Algorithm::ALL.len() * config.test_amounts.len());
    for algorithm in Algorithm::ALL {
        for &amount in &config.test_amounts {
            records.push(time_algorithm(algorithm, &config.denominations, amount)?);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.denominations, Denominations::standard());
        assert_eq!(config.demo_amount, 113);
        assert_eq!(config.test_amounts, vec![113, 1013, 1_000_033]);
    }

    #[test]
    fn test_algorithms_agree_on_demo_amount() {
        let coins = Denominations::standard();
        let greedy = Algorithm::Greedy.make_change(&coins, DEMO_AMOUNT).unwrap();
        let dynamic = Algorithm::Dynamic.make_change(&coins, DEMO_AMOUNT).unwrap();
        assert_eq!(greedy, dynamic);
        assert_eq!(greedy.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
    }

    #[test]
    fn test_pass_order() {
        let config = BenchmarkConfig {
            test_amounts: vec![113, 1013],
            ..BenchmarkConfig::default()
        };
        let records = run_benchmark(&config).unwrap();
        let order: Vec<_> = records.iter().map(|r| (r.algorithm, r.amount)).collect();
        assert_eq!(
            order,
            vec![
                (Algorithm::Greedy, 113),
                (Algorithm::Greedy, 1013),
                (Algorithm::Dynamic, 113),
                (Algorithm::Dynamic, 1013),
            ]
        );
        assert!(records.iter().all(|r| r.seconds >= 0.0));
    }

    #[test]
    fn test_dynamic_slower_at_largest_amount() {
        let coins = Denominations::standard();
        let amount = 1_000_033;
        let greedy = time_algorithm(Algorithm::Greedy, &coins, amount).unwrap();
        let dynamic = time_algorithm(Algorithm::Dynamic, &coins, amount).unwrap();
        assert!(
            dynamic.seconds > greedy.seconds,
            "dynamic {}s vs greedy {}s",
            dynamic.seconds,
            greedy.seconds
        );
    }

    #[test]
    fn test_unreachable_amount_propagates() {
        let config = BenchmarkConfig {
            denominations: Denominations::new(vec![4, 2]).unwrap(),
            demo_amount: 8,
            test_amounts: vec![8, 9],
        };
        assert_eq!(
            run_benchmark(&config),
            Err(Error::UnreachableAmount { amount: 9 })
        );
    }

    #[test]
    fn test_time_algorithm_reports_solver_error() {
        let coins = Denominations::new(vec![5]).unwrap();
        assert_eq!(
            time_algorithm(Algorithm::Dynamic, &coins, 3),
            Err(Error::UnreachableAmount { amount: 3 })
        );

        let record = time_algorithm(Algorithm::Greedy, &coins, 3).unwrap();
        assert_eq!(record.algorithm, Algorithm::Greedy);
        assert_eq!(record.amount, 3);
        assert!(record.seconds >= 0.0);
    }

    #[test]
    fn test_record_display() {
        let record = TimingRecord {
            algorithm: Algorithm::Greedy,
            amount: 1013,
            seconds: 0.0000126,
        };
        assert_eq!(record.to_string(), "Amount 1013: 0.000013 seconds");
    }
}
