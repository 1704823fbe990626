use crate::domain::{
    Cents, CoinInventory, Holding, NoteRegister, find_change, is_accepted_banknote,
    is_accepted_coin, parse_cents,
};

use super::TillError;

/// Operation names understood by the till, as they appear in command
/// scripts.
pub const SUPPORTED_OPERATIONS: [&str; 2] = ["LOAD", "EXCHANGE"];

/// The machine itself: owns the coin inventory and the banknote register,
/// validates raw operation inputs and applies each operation atomically.
/// This is the primary interface for any client (CLI, script runner,
/// tests).
pub struct TillService {
    coins: CoinInventory,
    notes: NoteRegister,
}

impl TillService {
    pub fn new() -> Self {
        Self {
            coins: CoinInventory::new(),
            notes: NoteRegister::new(),
        }
    }

    /// Load coins into the till.
    ///
    /// `count_raw` must be a non-negative integer and `denomination_raw`
    /// an accepted coin value. Nothing changes when validation fails.
    pub fn load(&mut self, count_raw: &str, denomination_raw: &str) -> Result<(), TillError> {
        let count: u64 = count_raw
            .trim()
            .parse()
            .map_err(|_| TillError::InvalidCoinCount(count_raw.trim().to_string()))?;
        let denomination = parse_cents(denomination_raw)
            .ok()
            .filter(|&d| is_accepted_coin(d))
            .ok_or_else(|| TillError::InvalidCoinType(denomination_raw.trim().to_string()))?;

        self.coins.add(denomination, count);
        Ok(())
    }

    /// Exchange a banknote for coins.
    ///
    /// Returns `Ok(None)` when no combination of available coins pays the
    /// amount exactly; the till is untouched in that case. On success the
    /// used coins are removed, the banknote is recorded, and the breakdown
    /// comes back in the inventory's first-load order.
    pub fn exchange(&mut self, amount_raw: &str) -> Result<Option<Vec<Holding>>, TillError> {
        let amount = amount_raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|units| units.checked_mul(100))
            .filter(|&a| is_accepted_banknote(a))
            .ok_or_else(|| TillError::InvalidBanknoteType(amount_raw.trim().to_string()))?;

        let Some(breakdown) = find_change(amount, &self.coins) else {
            return Ok(None);
        };
        for holding in &breakdown {
            self.coins.remove(holding.denomination, holding.count);
        }
        self.notes.record(amount);
        Ok(Some(breakdown))
    }

    /// Coins currently held, in first-load order.
    pub fn available_coins(&self) -> Vec<Holding> {
        self.coins.holdings()
    }

    /// Banknotes exchanged so far, ascending by denomination.
    pub fn exchanged_banknotes(&self) -> Vec<Holding> {
        self.notes.holdings()
    }

    /// Total value of the coins currently held, in cents.
    pub fn coin_value(&self) -> Cents {
        self.coins.total_value()
    }

    pub fn is_supported(operation: &str) -> bool {
        SUPPORTED_OPERATIONS.contains(&operation)
    }

    /// How many arguments the operation takes in a command script.
    pub fn required_args(operation: &str) -> Option<usize> {
        match operation {
            "LOAD" => Some(2),
            "EXCHANGE" => Some(1),
            _ => None,
        }
    }
}

impl Default for TillService {
    fn default() -> Self {
        Self::new()
    }
}
