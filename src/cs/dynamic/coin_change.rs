use log::{debug, trace};

use crate::coins::{Breakdown, Denominations};
use crate::error::{Error, Result};
use crate::greedy::greedy_change_with_remainder;

/// Minimal coin counts for every sub-amount, plus the last coin used to reach each.
///
/// `counts[i]` is `None` when `i` cannot be formed.
struct ChangeTable {
    counts: Vec<Option<usize>>,
    last_coin: Vec<usize>,
}

impl ChangeTable {
    fn build(coins: &[usize], amount: usize) -> Self {
        let mut counts = vec![None; amount + 1];
        let mut last_coin = vec![0; amount + 1];
        counts[0] = Some(0);

        for i in 1..=amount {
            for &coin in coins {
                if coin > i {
                    continue;
                }
                if let Some(prev) = counts[i - coin] {
                    // Strict comparison keeps the earliest coin on ties
                    if counts[i].map_or(true, |best| prev + 1 < best) {
                        counts[i] = Some(prev + 1);
                        last_coin[i] = coin;
                    }
                }
            }
        }

        Self { counts, last_coin }
    }

    fn reconstruct(&self, amount: usize) -> Option<Breakdown> {
        self.counts[amount]?;

        let mut change = Breakdown::new();
        let mut current = amount;
        while current > 0 {
            let coin = self.last_coin[current];
            change.add(coin, 1);
            current -= coin;
        }
        Some(change)
    }
}

/// Makes change for `amount` with the fewest coins possible.
///
/// Fills a table of minimal counts for every sub-amount `0..=amount`, then
/// walks back from `amount` along the recorded last coins. When several
/// breakdowns share the minimal count, the one reached through the larger
/// denomination first is returned.
///
/// # Errors
///
/// Returns `Error::UnreachableAmount` if no combination of `denominations`
/// sums to `amount`. This cannot happen when the set contains 1.
///
/// # Examples
///
/// ```
/// use change_algos::coins::Denominations;
/// use change_algos::dynamic::min_coin_change;
///
/// let coins = Denominations::new(vec![4, 3, 1]).unwrap();
/// let change = min_coin_change(&coins, 6).unwrap();
/// assert_eq!(change.count_of(3), 2);
/// assert_eq!(change.coin_count(), 2);
///
/// let even = Denominations::new(vec![4, 2]).unwrap();
/// assert!(min_coin_change(&even, 7).is_err());
/// ```
///
/// # Complexity
/// * Time: O(A * D) where A is the amount and D the number of denominations
/// * Space: O(A)
pub fn min_coin_change(denominations: &Denominations, amount: usize) -> Result<Breakdown> {
    if amount == 0 {
        return Ok(Breakdown::new());
    }

    trace!("building change table with {} entries", amount + 1);
    let table = ChangeTable::build(denominations.as_slice(), amount);

    let change = table
        .reconstruct(amount)
        .ok_or(Error::UnreachableAmount { amount })?;
    debug!(
        "minimal change for {} uses {} coins",
        amount,
        change.coin_count()
    );
    Ok(change)
}

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// The coin change problem here is the "unbounded" variant, meaning each coin
/// can be used any number of times. Returns `None` if it's impossible to form
/// the `amount` using the given `coins`.
///
/// # Examples
///
/// ```
/// use change_algos::dynamic::min_coins_for_change;
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let coins = vec![1, 6, 10];
/// assert_eq!(min_coins_for_change(&coins, 18), Some(3));
///
/// // Impossible to form 7 from [2,4], so returns None
/// let coins2 = vec![2, 4];
/// assert_eq!(min_coins_for_change(&coins2, 7), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
    if amount == 0 {
        return Some(0);
    }
    if coins.is_empty() {
        return None;
    }

    // dp[i] holds the minimum number of coins to form amount i
    let mut dp: Vec<Option<usize>> = vec![None; amount + 1];
    dp[0] = Some(0);

    for &coin in coins.iter().filter(|&&c| c > 0) {
        for curr_amount in coin..=amount {
            if let Some(prev) = dp[curr_amount - coin] {
                dp[curr_amount] = Some(dp[curr_amount].map_or(prev + 1, |c| c.min(prev + 1)));
            }
        }
    }

    dp[amount]
}

/// Checks whether greedy change making is optimal for every amount up to `limit`.
///
/// An amount counts as a mismatch when greedy leaves a remainder or uses
/// more coins than the minimum.
///
/// ```
/// use change_algos::coins::Denominations;
/// use change_algos::dynamic::is_canonical;
///
/// assert!(is_canonical(&Denominations::standard(), 200));
/// assert!(!is_canonical(&Denominations::new(vec![4, 3, 1]).unwrap(), 10));
/// ```
pub fn is_canonical(denominations: &Denominations, limit: usize) -> bool {
    let table = ChangeTable::build(denominations.as_slice(), limit);

    (1..=limit).all(|amount| {
        let (greedy, remainder) = greedy_change_with_remainder(denominations, amount);
        match table.counts[amount] {
            Some(best) => remainder == 0 && greedy.coin_count() == best,
            // Nothing forms it, so greedy cannot do worse
            None => true,
        }
    })
}
