use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{PoolConfig, RoundRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Minimum amount an entry must attach. Must be non-zero.
    pub min_entry: Uint128,
    /// Native denom accepted for entries.
    pub entry_denom: String,
    /// Optional randomness oracle contract address.
    pub randomness_oracle: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the current round with the attached funds. Anyone can call;
    /// entering multiple times is allowed and counts once per call.
    Enter {},
    /// Draw a winner, pay out the full pot, and reset the round. Manager only.
    PickWinner {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolConfig)]
    Config {},
    #[returns(PlayersResponse)]
    Players {},
    #[returns(CurrentRoundResponse)]
    CurrentRound {},
    #[returns(RoundRecord)]
    Round { round_id: u64 },
    #[returns(RoundHistoryResponse)]
    RoundHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(StatsResponse)]
    Stats {},
    #[returns(WinnerStatsResponse)]
    WinnerStats { address: String },
}

#[cw_serde]
pub struct PlayersResponse {
    /// Current round's players in entry order, one element per entry.
    pub players: Vec<Addr>,
}

#[cw_serde]
pub struct CurrentRoundResponse {
    pub round_id: u64,
    pub pot: Uint128,
    pub num_players: u32,
}

#[cw_serde]
pub struct RoundHistoryResponse {
    pub rounds: Vec<RoundRecord>,
}

#[cw_serde]
pub struct StatsResponse {
    pub rounds_completed: u64,
    pub total_paid_out: Uint128,
}

#[cw_serde]
pub struct WinnerStatsResponse {
    pub address: String,
    pub wins: u32,
    pub total_won: Uint128,
}
