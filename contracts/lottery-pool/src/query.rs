use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::msg::{
    CurrentRoundResponse, PlayersResponse, RoundHistoryResponse, StatsResponse,
    WinnerStatsResponse,
};
use crate::state::{CONFIG, POOL, ROUNDS, STATS, WINNER_COUNT, WINNER_TOTAL};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_players(deps: Deps) -> StdResult<Binary> {
    let pool = POOL.load(deps.storage)?;
    to_json_binary(&PlayersResponse {
        players: pool.players,
    })
}

pub fn query_current_round(deps: Deps) -> StdResult<Binary> {
    let pool = POOL.load(deps.storage)?;
    to_json_binary(&CurrentRoundResponse {
        round_id: pool.round_id,
        pot: pool.pot,
        num_players: pool.players.len() as u32,
    })
}

pub fn query_round(deps: Deps, round_id: u64) -> StdResult<Binary> {
    let round = ROUNDS.load(deps.storage, round_id)?;
    to_json_binary(&round)
}

pub fn query_round_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds: Vec<_> = ROUNDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, round)| round)
        .collect();

    to_json_binary(&RoundHistoryResponse { rounds })
}

pub fn query_stats(deps: Deps) -> StdResult<Binary> {
    let stats = STATS.load(deps.storage)?;
    to_json_binary(&StatsResponse {
        rounds_completed: stats.rounds_completed,
        total_paid_out: stats.total_paid_out,
    })
}

pub fn query_winner_stats(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let wins = WINNER_COUNT.may_load(deps.storage, &addr)?.unwrap_or(0);
    let total_won = WINNER_TOTAL
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());

    to_json_binary(&WinnerStatsResponse {
        address,
        wins,
        total_won,
    })
}
