use cosmwasm_schema::cw_serde;

/// Read interface every collateral price feed must answer.
/// The feed's own update mechanism is not part of this interface.
#[cw_serde]
pub enum QueryMsg {
    /// Returns the latest [`RoundDataResponse`]
    LatestRoundData {},
    /// Returns the number of fractional digits in `answer` as a `u8`
    Decimals {},
}

#[cw_serde]
pub struct RoundDataResponse {
    pub round_id: u64,
    /// Price scaled by 10^decimals. Anything <= 0 is unusable.
    /// 128 bits so 18 decimal feeds fit, encoded as a JSON string.
    pub answer: i128,
    /// Seconds
    pub started_at: u64,
    /// Seconds
    pub updated_at: u64,
    pub answered_in_round: u64,
}
