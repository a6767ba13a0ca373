use log::debug;

use crate::coins::{Breakdown, Denominations};

/// Makes change for `amount` by always taking as many of the largest
/// remaining denomination as fit.
///
/// The result is optimal only for canonical coin systems such as the
/// standard `[50, 25, 10, 5, 2, 1]`. If the set cannot complete the amount
/// exactly, the leftover is silently dropped; use
/// [`greedy_change_with_remainder`] to observe it.
///
/// # Examples
///
/// ```
/// use change_algos::coins::Denominations;
/// use change_algos::greedy::greedy_change;
///
/// let change = greedy_change(&Denominations::standard(), 113);
/// assert_eq!(change.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
/// ```
///
/// # Complexity
/// * Time: O(D) where D is the number of denominations
/// * Space: O(D)
pub fn greedy_change(denominations: &Denominations, amount: usize) -> Breakdown {
    greedy_change_with_remainder(denominations, amount).0
}

/// Greedy change making that also returns the amount it could not cover.
///
/// The remainder is zero whenever the smallest denomination is 1.
///
/// ```
/// use change_algos::coins::Denominations;
/// use change_algos::greedy::greedy_change_with_remainder;
///
/// let coins = Denominations::new(vec![5, 3]).unwrap();
/// let (change, remainder) = greedy_change_with_remainder(&coins, 7);
/// assert_eq!(change.count_of(5), 1);
/// assert_eq!(remainder, 2);
/// ```
pub fn greedy_change_with_remainder(
    denominations: &Denominations,
    amount: usize,
) -> (Breakdown, usize) {
    let mut remaining = amount;
    let mut change = Breakdown::new();

    for coin in denominations.iter() {
        let count = remaining / coin;
        if count > 0 {
            change.add(coin, count);
            remaining -= coin * count;
        }
    }

    if remaining > 0 {
        debug!(
            "greedy change for {} left {} unaccounted with {:?}",
            amount,
            remaining,
            denominations.as_slice()
        );
    }

    (change, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount() {
        let change = greedy_change(&Denominations::standard(), 0);
        assert!(change.is_empty());
    }

    #[test]
    fn test_amount_113() {
        let change = greedy_change(&Denominations::standard(), 113);
        let expected: Breakdown = vec![(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();
        assert_eq!(change, expected);
        assert_eq!(change.coin_count(), 5);
        assert_eq!(change.total_value(), 113);
    }

    #[test]
    fn test_exact_for_standard_set() {
        let coins = Denominations::standard();
        for amount in 0..=500 {
            let (change, remainder) = greedy_change_with_remainder(&coins, amount);
            assert_eq!(remainder, 0);
            assert_eq!(change.total_value(), amount, "amount {}", amount);
        }
    }

    #[test]
    fn test_leftover_without_unit_coin() {
        // 11 = 5 + 5 + 1 left over; 3 + 3 + 5 would have worked
        let coins = Denominations::new(vec![5, 3]).unwrap();
        let (change, remainder) = greedy_change_with_remainder(&coins, 11);
        assert_eq!(change.count_of(5), 2);
        assert_eq!(change.count_of(3), 0);
        assert_eq!(remainder, 1);
        assert_eq!(greedy_change(&coins, 11).total_value(), 10);
    }

    #[test]
    fn test_non_canonical_set_is_suboptimal() {
        let coins = Denominations::new(vec![4, 3, 1]).unwrap();
        let change = greedy_change(&coins, 6);
        assert_eq!(change.count_of(4), 1);
        assert_eq!(change.count_of(1), 2);
        assert_eq!(change.coin_count(), 3);
    }

    #[test]
    fn test_idempotent() {
        let coins = Denominations::standard();
        assert_eq!(greedy_change(&coins, 1013), greedy_change(&coins, 1013));
    }
}
