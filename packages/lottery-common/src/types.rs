use cosmwasm_schema::cw_serde;

/// Smart-query interface a randomness oracle contract must expose to be
/// usable by the lottery pool. The pool queries the latest available
/// randomness at draw time and mixes it into the winner-selection seed.
#[cw_serde]
pub enum OracleQueryMsg {
    LatestRandomness {},
}

/// Oracle response for `LatestRandomness`.
///
/// `randomness` must be exactly 32 bytes; the pool rejects anything else.
#[cw_serde]
pub struct RandomnessResponse {
    /// The oracle's round number for this randomness value.
    pub round: u64,
    pub randomness: Vec<u8>,
}
