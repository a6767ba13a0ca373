use std::collections::BTreeMap;
use std::fmt;

/// Number of coins of each denomination used to make an amount.
///
/// Entries with a zero count are never stored, so two breakdowns compare
/// equal exactly when they use the same coins.
///
/// # Examples
///
/// ```
/// use change_algos::coins::Breakdown;
///
/// let mut change = Breakdown::new();
/// change.add(50, 2);
/// change.add(10, 1);
/// change.add(5, 0);
/// assert_eq!(change.total_value(), 110);
/// assert_eq!(change.coin_count(), 3);
/// assert_eq!(change.to_string(), "{50: 2, 10: 1}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    counts: BTreeMap<usize, usize>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of `denomination`. A zero count is a no-op.
    pub fn add(&mut self, denomination: usize, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(denomination).or_insert(0) += count;
    }

    /// Coins of `denomination` in the breakdown, zero if absent.
    pub fn count_of(&self, denomination: usize) -> usize {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins.
    pub fn coin_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sum of denomination times count over all entries.
    pub fn total_value(&self) -> usize {
        self.counts.iter().map(|(&d, &c)| d * c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().rev().map(|(&d, &c)| (d, c))
    }
}

impl FromIterator<(usize, usize)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (denomination, count) in iter {
            breakdown.add(denomination, count);
        }
        breakdown
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (denomination, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", denomination, count)?;
        }
        write!(f, "}}")
    }
}
