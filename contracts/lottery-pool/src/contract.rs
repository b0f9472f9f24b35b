use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{PoolConfig, PoolState, PoolStats, CONFIG, POOL, STATS};

const CONTRACT_NAME: &str = "crates.io:lottery-pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.min_entry.is_zero() {
        return Err(ContractError::InvalidMinEntry);
    }

    let randomness_oracle = msg
        .randomness_oracle
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let config = PoolConfig {
        manager: info.sender.clone(),
        min_entry: msg.min_entry,
        entry_denom: msg.entry_denom,
        randomness_oracle,
    };
    CONFIG.save(deps.storage, &config)?;

    let pool = PoolState {
        round_id: 0,
        players: Vec::new(),
        pot: Uint128::zero(),
    };
    POOL.save(deps.storage, &pool)?;

    let stats = PoolStats {
        rounds_completed: 0,
        total_paid_out: Uint128::zero(),
    };
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "lottery-pool")
        .add_attribute("manager", info.sender.to_string())
        .add_attribute("min_entry", config.min_entry.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PickWinner {} => execute::pick_winner(deps, env, info),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Players {} => query::query_players(deps),
        QueryMsg::CurrentRound {} => query::query_current_round(deps),
        QueryMsg::Round { round_id } => query::query_round(deps, round_id),
        QueryMsg::RoundHistory { start_after, limit } => {
            query::query_round_history(deps, start_after, limit)
        }
        QueryMsg::Stats {} => query::query_stats(deps),
        QueryMsg::WinnerStats { address } => query::query_winner_stats(deps, address),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
