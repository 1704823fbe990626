use super::{Cents, CoinInventory, Holding};

/// Find one way to pay `target` exactly from the available coins.
///
/// The search walks denominations in the inventory's first-load order and,
/// at each one, tries the largest feasible number of pieces first before
/// backing off one piece at a time and moving on to the rest of the list.
/// The first full decomposition found therefore spends as much of the
/// earliest-loaded denomination as can still lead to a solution, then as
/// much of the next, and so on. That first find is returned as-is: a
/// deliberate, deterministic policy, not a minimal-coin-count optimum.
///
/// The inventory is never touched here; callers apply the returned
/// breakdown, so a failed search leaves no trace.
pub fn find_change(target: Cents, coins: &CoinInventory) -> Option<Vec<Holding>> {
    if coins.total_value() < target {
        return None;
    }
    let pool = coins.holdings();
    let mut chosen = Vec::new();
    search(target, &pool, &mut chosen).then_some(chosen)
}

fn search(remaining: Cents, pool: &[Holding], chosen: &mut Vec<Holding>) -> bool {
    if remaining == 0 {
        return true;
    }
    let Some(&Holding {
        denomination,
        count,
    }) = pool.first()
    else {
        return false;
    };
    let rest = &pool[1..];

    // Never take more pieces than are held, nor more than fit in the
    // remaining amount
    let cap = count.min((remaining / denomination) as u64);
    for take in (0..=cap).rev() {
        if take > 0 {
            chosen.push(Holding::new(denomination, take));
        }
        if search(remaining - denomination * take as Cents, rest, chosen) {
            return true;
        }
        if take > 0 {
            chosen.pop();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(entries: &[(Cents, u64)]) -> CoinInventory {
        let mut coins = CoinInventory::new();
        for &(denomination, count) in entries {
            coins.add(denomination, count);
        }
        coins
    }

    #[test]
    fn test_change_spends_earliest_loaded_denomination_first() {
        let coins = inventory(&[(100, 10), (200, 20)]);

        let breakdown = find_change(2000, &coins).unwrap();
        assert_eq!(breakdown, vec![Holding::new(100, 10), Holding::new(200, 5)]);
    }

    #[test]
    fn test_change_depends_on_load_order() {
        // Same coins, opposite load history: the chosen combination differs
        let first_twos = inventory(&[(200, 10), (100, 20)]);
        let first_ones = inventory(&[(100, 20), (200, 10)]);

        assert_eq!(
            find_change(500, &first_twos).unwrap(),
            vec![Holding::new(200, 2), Holding::new(100, 1)]
        );
        assert_eq!(
            find_change(500, &first_ones).unwrap(),
            vec![Holding::new(100, 5)]
        );
    }

    #[test]
    fn test_change_backs_off_when_greedy_take_dead_ends() {
        // Taking the 0.50£ coin leaves 0.10£, unreachable with 0.20£
        // pieces; the search must drop it and pay with 0.20£ alone
        let coins = inventory(&[(50, 1), (20, 3)]);

        let breakdown = find_change(60, &coins).unwrap();
        assert_eq!(breakdown, vec![Holding::new(20, 3)]);
    }

    #[test]
    fn test_change_uses_fractional_coins_exactly() {
        let coins = inventory(&[(20, 26)]);

        let breakdown = find_change(500, &coins).unwrap();
        assert_eq!(breakdown, vec![Holding::new(20, 25)]);
    }

    #[test]
    fn test_no_change_when_amount_unreachable() {
        assert!(find_change(2000, &inventory(&[])).is_none());
        assert!(find_change(2000, &inventory(&[(100, 19)])).is_none());
        // Enough total value, but no exact decomposition
        assert!(find_change(500, &inventory(&[(200, 5)])).is_none());
    }

    #[test]
    fn test_search_is_read_only() {
        let coins = inventory(&[(100, 3)]);

        assert!(find_change(2000, &coins).is_none());
        assert_eq!(coins.holdings(), vec![Holding::new(100, 3)]);

        assert!(find_change(200, &coins).is_some());
        assert_eq!(coins.holdings(), vec![Holding::new(100, 3)]);
    }

    #[test]
    fn test_breakdown_sums_to_target() {
        let coins = inventory(&[(20, 7), (50, 3), (100, 4), (200, 1)]);

        let breakdown = find_change(500, &coins).unwrap();
        let paid: Cents = breakdown
            .iter()
            .map(|h| h.denomination * h.count as Cents)
            .sum();
        assert_eq!(paid, 500);
    }

    #[test]
    fn test_same_state_always_yields_same_breakdown() {
        let coins = inventory(&[(50, 11), (20, 30), (100, 2)]);

        let first = find_change(1000, &coins).unwrap();
        let second = find_change(1000, &coins).unwrap();
        assert_eq!(first, second);
    }
}
