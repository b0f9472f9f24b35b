use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Deps, DepsMut, Env, Event, MessageInfo, QueryRequest, Response,
    Uint128, WasmQuery,
};
use lottery_common::{mix_entropy, winner_index, OracleQueryMsg, RandomnessResponse};

use crate::error::ContractError;
use crate::state::{PoolConfig, PoolState, RoundRecord, CONFIG, POOL, ROUNDS, STATS, WINNER_COUNT, WINNER_TOTAL};

/// Enter the current round. Anyone can call, any number of times; each
/// accepted call appends one player slot and adds the attached amount to the
/// pot. Rejected entries mutate nothing.
pub fn enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // No attached funds counts as a zero contribution.
    if info.funds.is_empty() {
        return Err(ContractError::InsufficientContribution {
            sent: Uint128::zero(),
            min_entry: config.min_entry,
        });
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != config.entry_denom {
        return Err(ContractError::WrongDenom {
            denom: sent.denom.clone(),
        });
    }
    if sent.amount < config.min_entry {
        return Err(ContractError::InsufficientContribution {
            sent: sent.amount,
            min_entry: config.min_entry,
        });
    }

    let mut pool = POOL.load(deps.storage)?;
    pool.players.push(info.sender.clone());
    pool.pot += sent.amount;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("amount", sent.amount.to_string())
        .add_event(
            Event::new("lottery_entered")
                .add_attribute("round_id", pool.round_id.to_string())
                .add_attribute("player", info.sender.to_string())
                .add_attribute("amount", sent.amount.to_string())
                .add_attribute("pot", pool.pot.to_string())
                .add_attribute("num_players", pool.players.len().to_string()),
        ))
}

/// Draw a winner for the current round. Manager only.
///
/// 1. Derive the selection seed (oracle randomness when configured,
///    block entropy otherwise)
/// 2. Reduce the seed to an index into the player list
/// 3. Verify the pool's bank balance covers the pot
/// 4. Record the round, update stats and per-winner tracking
/// 5. Reset players/pot for the next round and send the full pot
///
/// State writes and the bank send commit in one transaction, so there is no
/// reachable state where the pot is paid without the reset or reset without
/// payment.
pub fn pick_winner(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::Unauthorized {
            reason: "only the manager can pick a winner".to_string(),
        });
    }

    let pool = POOL.load(deps.storage)?;
    if pool.players.is_empty() {
        return Err(ContractError::NoParticipants);
    }

    let (seed, oracle_round) = derive_seed(deps.as_ref(), &env, &config, &pool)?;
    let winning_index = winner_index(&seed, pool.players.len() as u64);
    let winner = pool.players[winning_index as usize].clone();
    let pot = pool.pot;

    // The pot must be fully backed before the payout message is emitted.
    let balance = deps
        .querier
        .query_balance(env.contract.address.clone(), config.entry_denom.clone())?;
    if balance.amount < pot {
        return Err(ContractError::PayoutFailed {
            needed: pot,
            available: balance.amount,
        });
    }

    let record = RoundRecord {
        round_id: pool.round_id,
        winner: winner.clone(),
        pot,
        num_players: pool.players.len() as u32,
        winning_index,
        seed: hex::encode(seed),
        oracle_round,
        drawn_at: env.block.time,
    };
    ROUNDS.save(deps.storage, pool.round_id, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.rounds_completed += 1;
    stats.total_paid_out += pot;
    STATS.save(deps.storage, &stats)?;

    let wins = WINNER_COUNT.may_load(deps.storage, &winner)?.unwrap_or(0);
    WINNER_COUNT.save(deps.storage, &winner, &(wins + 1))?;
    let total = WINNER_TOTAL
        .may_load(deps.storage, &winner)?
        .unwrap_or(Uint128::zero());
    WINNER_TOTAL.save(deps.storage, &winner, &(total + pot))?;

    // Reset for the next round.
    let next = PoolState {
        round_id: pool.round_id + 1,
        players: Vec::new(),
        pot: Uint128::zero(),
    };
    POOL.save(deps.storage, &next)?;

    let send_msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(pot.u128(), &config.entry_denom),
    };

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "pick_winner")
        .add_attribute("round_id", record.round_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("pot", pot.to_string())
        .add_event(
            Event::new("lottery_draw_result")
                .add_attribute("round_id", record.round_id.to_string())
                .add_attribute("winner", winner.to_string())
                .add_attribute("pot", pot.to_string())
                .add_attribute("num_players", record.num_players.to_string())
                .add_attribute("winning_index", winning_index.to_string())
                .add_attribute("seed", record.seed.clone())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Derive the 32-byte selection seed for a draw.
///
/// Block values are observable before the draw; an oracle mixes in
/// randomness that neither the manager nor the players control.
fn derive_seed(
    deps: Deps,
    env: &Env,
    config: &PoolConfig,
    pool: &PoolState,
) -> Result<([u8; 32], Option<u64>), ContractError> {
    let mut oracle_round = None;
    let mut oracle_randomness: Vec<u8> = Vec::new();

    if let Some(oracle) = &config.randomness_oracle {
        let query = QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: oracle.to_string(),
            msg: to_json_binary(&OracleQueryMsg::LatestRandomness {})?,
        });
        let response: RandomnessResponse = deps.querier.query(&query)?;
        if response.randomness.len() != 32 {
            return Err(ContractError::InvalidRandomness {
                reason: format!("oracle returned {} bytes, expected 32", response.randomness.len()),
            });
        }
        oracle_round = Some(response.round);
        oracle_randomness = response.randomness;
    }

    let seed = mix_entropy(&[
        &env.block.time.nanos().to_be_bytes(),
        &env.block.height.to_be_bytes(),
        &pool.round_id.to_be_bytes(),
        &(pool.players.len() as u64).to_be_bytes(),
        &oracle_randomness,
    ]);
    Ok((seed, oracle_round))
}
