use core::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

/// An approved collateral token and the price feed it is valued with.
/// Fixed at instantiation, never edited afterwards.
#[cw_serde]
pub struct CollateralAsset {
    /// cw20 token contract
    pub token: Addr,
    /// Price feed contract answering `price_feed::QueryMsg`
    pub price_feed: Addr,
    /// Fractional digits of the feed's answer
    pub feed_decimals: u8,
}

impl fmt::Display for CollateralAsset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (feed: {}, decimals: {})", self.token, self.price_feed, self.feed_decimals)
    }
}

/// Protocol-wide deposits of one collateral token
#[cw_serde]
pub struct CollateralTotal {
    pub token: Addr,
    pub amount: Uint128,
    pub usd_value: Uint128,
}
