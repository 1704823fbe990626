use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Cents;

/// A denomination paired with how many pieces of it are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub denomination: Cents,
    pub count: u64,
}

impl Holding {
    pub fn new(denomination: Cents, count: u64) -> Self {
        Self {
            denomination,
            count,
        }
    }
}

/// The till's coin inventory.
///
/// Iteration follows first-load order, which is also the change search's
/// enumeration order. An entry exists only while its count is strictly
/// positive; a denomination spent down to zero and loaded again re-enters
/// at the end of the order.
#[derive(Debug, Clone, Default)]
pub struct CoinInventory {
    holdings: IndexMap<Cents, u64>,
}

impl CoinInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add coins of one denomination. Adding zero coins is a no-op, so a
    /// zero-count entry is never created.
    pub fn add(&mut self, denomination: Cents, count: u64) {
        if count == 0 {
            return;
        }
        *self.holdings.entry(denomination).or_insert(0) += count;
    }

    /// Remove coins of one denomination. The caller guarantees at least
    /// `count` pieces are held; the entry is dropped the moment it reaches
    /// zero, keeping the order of the remaining entries.
    pub fn remove(&mut self, denomination: Cents, count: u64) {
        let Some(held) = self.holdings.get_mut(&denomination) else {
            debug_assert!(count == 0, "removing coins from an absent denomination");
            return;
        };
        debug_assert!(*held >= count, "removing more coins than held");
        *held -= count;
        if *held == 0 {
            self.holdings.shift_remove(&denomination);
        }
    }

    pub fn count_of(&self, denomination: Cents) -> u64 {
        self.holdings.get(&denomination).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Total value of all held coins, in cents.
    pub fn total_value(&self) -> Cents {
        self.holdings
            .iter()
            .map(|(denomination, &count)| denomination * count as Cents)
            .sum()
    }

    /// Snapshot in first-load order.
    pub fn holdings(&self) -> Vec<Holding> {
        self.holdings
            .iter()
            .map(|(&denomination, &count)| Holding::new(denomination, count))
            .collect()
    }
}

/// Record of successfully exchanged banknotes. Reads back ascending by
/// denomination regardless of exchange order.
#[derive(Debug, Clone, Default)]
pub struct NoteRegister {
    counts: BTreeMap<Cents, u64>,
}

impl NoteRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, denomination: Cents) {
        *self.counts.entry(denomination).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Snapshot ascending by denomination.
    pub fn holdings(&self) -> Vec<Holding> {
        self.counts
            .iter()
            .map(|(&denomination, &count)| Holding::new(denomination, count))
            .collect()
    }
}
