use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("contribution {sent} is below minimum entry {min_entry}")]
    InsufficientContribution { sent: Uint128, min_entry: Uint128 },

    #[error("no participants in the current round")]
    NoParticipants,

    #[error("payout not covered by pool balance: need {needed}, have {available}")]
    PayoutFailed { needed: Uint128, available: Uint128 },

    #[error("must send exactly one coin to enter")]
    InvalidFunds,

    #[error("must send the entry denom, got {denom}")]
    WrongDenom { denom: String },

    #[error("invalid oracle randomness: {reason}")]
    InvalidRandomness { reason: String },

    #[error("minimum entry must be greater than zero")]
    InvalidMinEntry,
}
