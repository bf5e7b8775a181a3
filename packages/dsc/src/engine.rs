use cosmwasm_std::{Addr, Decimal, Uint128};
use cosmwasm_schema::cw_serde;

use crate::types::{CollateralAsset, CollateralTotal};

#[cw_serde]
pub struct InstantiateMsg {
    /// Collateral cw20 token contracts
    pub token_addresses: Vec<String>,
    /// Price feed for each token, index aligned with `token_addresses`
    pub price_feed_addresses: Vec<String>,
    /// Debt token (cw20), the engine must be its minter
    pub dsc_token: String,
    /// Seconds until a price reading is stale.
    /// Defaults to 3 hours.
    pub oracle_time_limit: Option<u64>,
    /// Smallest debt_to_cover a liquidation accepts.
    /// Defaults to 0, i.e. no minimum.
    pub min_liquidation_debt: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit collateral into the sender's position.
    /// Requires a cw20 allowance for the engine.
    DepositCollateral {
        /// Collateral token
        collateral_asset: String,
        /// Amount to deposit
        amount: Uint128,
    },
    /// Mint debt tokens against the sender's collateral
    MintDsc {
        /// Amount to mint
        amount: Uint128,
    },
    /// Repay the sender's debt.
    /// Requires a debt token allowance for the engine.
    BurnDsc {
        /// Amount to burn
        amount: Uint128,
    },
    /// Withdraw collateral from the sender's position
    RedeemCollateral {
        /// Collateral token
        collateral_asset: String,
        /// Amount to withdraw
        amount: Uint128,
    },
    /// DepositCollateral followed by MintDsc
    DepositCollateralAndMintDsc {
        collateral_asset: String,
        amount_collateral: Uint128,
        amount_dsc_to_mint: Uint128,
    },
    /// BurnDsc followed by RedeemCollateral
    RedeemCollateralForDsc {
        collateral_asset: String,
        amount_collateral: Uint128,
        amount_dsc_to_burn: Uint128,
    },
    /// Repay part of an unhealthy user's debt in exchange for
    /// their collateral plus the liquidation bonus
    Liquidate {
        /// Collateral token to seize
        collateral_asset: String,
        /// Position owner to liquidate
        user: String,
        /// Debt repaid by the sender
        debt_to_cover: Uint128,
    },
}

#[cw_serde]
pub enum QueryMsg {
    /// Returns the contract's [`Config`]
    Config {},
    /// Returns the protocol's [`ConstantsResponse`]
    Constants {},
    /// Returns a user's [`AccountInformationResponse`]
    AccountInformation {
        user: String,
    },
    /// Returns a user's deposited amount of one collateral token
    CollateralBalance {
        user: String,
        collateral_asset: String,
    },
    /// Returns the USD value of all a user's collateral
    AccountCollateralValue {
        user: String,
    },
    /// Returns a user's health factor as a Decimal
    HealthFactor {
        user: String,
    },
    /// Health factor formula for arbitrary inputs
    CalculateHealthFactor {
        total_dsc_minted: Uint128,
        collateral_value_in_usd: Uint128,
    },
    /// USD value (18 decimals) of an amount of collateral
    UsdValue {
        collateral_asset: String,
        amount: Uint128,
    },
    /// Collateral amount worth a USD value (18 decimals)
    TokenAmountFromUsd {
        collateral_asset: String,
        usd_amount: Uint128,
    },
    /// Returns the collateral token list in registry order
    CollateralTokens {},
    /// Returns the registry entry of a token, if any
    CollateralAsset {
        collateral_asset: String,
    },
    /// Returns the [`ProtocolTotalsResponse`]
    ProtocolTotals {},
}

#[cw_serde]
pub struct Config {
    /// Debt token
    pub dsc_token: Addr,
    /// Approved collateral, in registry order
    pub collateral_assets: Vec<CollateralAsset>,
    /// Seconds until a price reading is stale
    pub oracle_time_limit: u64,
    /// Smallest accepted debt_to_cover for liquidations
    pub min_liquidation_debt: Uint128,
}

impl Config {
    /// Registry lookup
    pub fn collateral_asset(&self, token: &Addr) -> Option<&CollateralAsset> {
        self.collateral_assets
            .iter()
            .find(|asset| &asset.token == token)
    }
}

#[cw_serde]
pub struct ConstantsResponse {
    /// Fixed-point scale of values and health factors
    pub precision: Uint128,
    /// Multiplier applied to 8 decimal feed answers
    pub additional_feed_precision: Uint128,
    pub liquidation_threshold: Uint128,
    pub liquidation_bonus: Uint128,
    pub liquidation_precision: Uint128,
    pub min_health_factor: Decimal,
    pub oracle_time_limit: u64,
    pub min_liquidation_debt: Uint128,
}

#[cw_serde]
pub struct AccountInformationResponse {
    pub total_dsc_minted: Uint128,
    pub collateral_value_in_usd: Uint128,
}

#[cw_serde]
pub struct ProtocolTotalsResponse {
    /// Outstanding debt of every user
    pub total_dsc_minted: Uint128,
    /// Deposits per collateral token, in registry order
    pub total_collateral: Vec<CollateralTotal>,
    pub total_collateral_value: Uint128,
}
