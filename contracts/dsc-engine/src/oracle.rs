use cosmwasm_std::{Env, QuerierWrapper, Uint128};

use dsc::price_feed::{QueryMsg as FeedQueryMsg, RoundDataResponse};
use dsc::types::CollateralAsset;

use crate::ContractError;

/// Fixed-point scale of prices, values and health factors
pub const PRECISION: u128 = 1_000_000_000_000_000_000;
/// Max seconds since a feed's last update, if not configured
pub const ORACLE_TIMEOUT: u64 = 3 * 60 * 60;
/// Scale of a standard 8 decimal feed answer
pub const FEED_DECIMALS: u8 = 8;
/// Lifts an 8 decimal answer to 18 decimals
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;

/// A usable price, 18 decimals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceQuote {
    pub price: Uint128,
    pub updated_at: u64,
}

/// Reads `asset`'s feed and rejects stale or non-positive answers
pub fn stale_check_latest_price(
    querier: QuerierWrapper,
    env: &Env,
    oracle_time_limit: u64,
    asset: &CollateralAsset,
) -> Result<PriceQuote, ContractError> {
    let round: RoundDataResponse =
        querier.query_wasm_smart(asset.price_feed.to_string(), &FeedQueryMsg::LatestRoundData {})?;

    let now = env.block.time.seconds();
    //Future timestamps count as fresh
    let seconds_since = now.saturating_sub(round.updated_at);
    if seconds_since > oracle_time_limit {
        return Err(ContractError::StalePrice {
            token: asset.token.to_string(),
            updated_at: round.updated_at,
            now,
        });
    }

    if round.answer <= 0 {
        return Err(ContractError::InvalidPrice {
            token: asset.token.to_string(),
            answer: round.answer,
        });
    }

    Ok(PriceQuote {
        price: normalize_price(round.answer, asset.feed_decimals)?,
        updated_at: round.updated_at,
    })
}

/// Scales a positive feed answer from `feed_decimals` to 18 decimals
pub fn normalize_price(answer: i128, feed_decimals: u8) -> Result<Uint128, ContractError> {
    let scale = Uint128::new(10).checked_pow(18u32.saturating_sub(feed_decimals as u32))?;

    Ok(Uint128::new(answer as u128).checked_mul(scale)?)
}

/// Feed decimals, checked once at registration
pub fn query_feed_decimals(querier: QuerierWrapper, price_feed: &str) -> Result<u8, ContractError> {
    let decimals: u8 = querier.query_wasm_smart(price_feed.to_string(), &FeedQueryMsg::Decimals {})?;

    if decimals > 18 {
        return Err(ContractError::InvalidFeedDecimals {
            price_feed: price_feed.to_string(),
            decimals,
        });
    }

    Ok(decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_feed_answers() {
        assert_eq!(
            normalize_price(2000_0000_0000, FEED_DECIMALS).unwrap(),
            Uint128::new(2000 * PRECISION)
        );
        assert_eq!(
            normalize_price(1, 18).unwrap(),
            Uint128::new(1)
        );
        //$2000 from an 18 decimal feed is past i64
        assert_eq!(
            normalize_price(2000 * PRECISION as i128, 18).unwrap(),
            Uint128::new(2000 * PRECISION)
        );
        assert_eq!(
            normalize_price(1000_000_000, 6).unwrap(),
            Uint128::new(1000 * PRECISION)
        );
        assert_eq!(
            normalize_price(i128::MAX, 0).unwrap_err(),
            ContractError::AmountTooLarge {}
        );
        assert_eq!(
            Uint128::new(10).pow(18 - FEED_DECIMALS as u32),
            Uint128::new(ADDITIONAL_FEED_PRECISION)
        );
    }
}
