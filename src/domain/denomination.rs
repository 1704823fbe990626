use super::Cents;

/// Coin face values the till accepts, in cents.
pub const ACCEPTED_COINS: [Cents; 4] = [20, 50, 100, 200];

/// Banknote face values the till exchanges, in cents.
pub const ACCEPTED_BANKNOTES: [Cents; 3] = [500, 1000, 2000];

pub fn is_accepted_coin(denomination: Cents) -> bool {
    ACCEPTED_COINS.contains(&denomination)
}

pub fn is_accepted_banknote(denomination: Cents) -> bool {
    ACCEPTED_BANKNOTES.contains(&denomination)
}
