use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<PoolConfig> = Item::new("config");
pub const POOL: Item<PoolState> = Item::new("pool");
pub const ROUNDS: Map<u64, RoundRecord> = Map::new("rounds");
pub const STATS: Item<PoolStats> = Item::new("stats");

/// Per-winner tracking
pub const WINNER_COUNT: Map<&Addr, u32> = Map::new("winner_count");
pub const WINNER_TOTAL: Map<&Addr, Uint128> = Map::new("winner_total");

#[cw_serde]
pub struct PoolConfig {
    /// Set to the instantiating sender, immutable afterwards.
    pub manager: Addr,
    /// Minimum amount an entry must attach. Always non-zero.
    pub min_entry: Uint128,
    /// The single native denom accepted for entries and paid to winners.
    pub entry_denom: String,
    /// Optional randomness oracle. When unset, winner selection falls back
    /// to block-derived entropy.
    pub randomness_oracle: Option<Addr>,
}

/// The current round: one element in `players` per accepted entry, in call
/// order, duplicates allowed. `pot` is the sum of their amounts.
#[cw_serde]
pub struct PoolState {
    pub round_id: u64,
    pub players: Vec<Addr>,
    pub pot: Uint128,
}

#[cw_serde]
pub struct RoundRecord {
    pub round_id: u64,
    pub winner: Addr,
    pub pot: Uint128,
    pub num_players: u32,
    /// Winning index into the round's player list.
    pub winning_index: u64,
    /// Selection seed, hex-encoded.
    pub seed: String,
    /// Oracle round mixed into the seed, if an oracle was configured.
    pub oracle_round: Option<u64>,
    pub drawn_at: Timestamp,
}

#[cw_serde]
pub struct PoolStats {
    pub rounds_completed: u64,
    pub total_paid_out: Uint128,
}
