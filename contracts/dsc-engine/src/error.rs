use cosmwasm_std::{ConversionOverflowError, Decimal, OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Amount must be more than zero")]
    AmountMustBeMoreThanZero {},

    #[error("Token isn't allowed as collateral: {token}")]
    TokenNotAllowed { token: String },

    #[error("Token addresses and price feed addresses must be the same length")]
    TokenAddressesAndPriceFeedAddressesMustBeSameLength {},

    #[error("At least one collateral asset is required")]
    EmptyCollateralRegistry {},

    #[error("Duplicate collateral asset: {token}")]
    DuplicateCollateral { token: String },

    #[error("Price feed {price_feed} reports {decimals} decimals, max is 18")]
    InvalidFeedDecimals { price_feed: String, decimals: u8 },

    #[error("Stale price for {token}: updated at {updated_at}, block time {now}")]
    StalePrice { token: String, updated_at: u64, now: u64 },

    #[error("Invalid price for {token}: {answer}")]
    InvalidPrice { token: String, answer: i128 },

    #[error("Amount too large")]
    AmountTooLarge {},

    #[error("Insufficient collateral: balance {balance}, requested {requested}")]
    InsufficientCollateral { balance: Uint128, requested: Uint128 },

    #[error("Burn amount exceeds minted: minted {minted}, requested {requested}")]
    BurnAmountExceedsMinted { minted: Uint128, requested: Uint128 },

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Mint failed: {reason}")]
    MintFailed { reason: String },

    #[error("Burn failed: {reason}")]
    BurnFailed { reason: String },

    #[error("Breaks health factor: {health_factor}")]
    BreaksHealthFactor { health_factor: Decimal },

    #[error("Health factor is ok, position can't be liquidated")]
    HealthFactorOk {},

    #[error("Liquidation doesn't improve the position's health factor")]
    HealthFactorNotImproved {},

    #[error("Debt to cover {debt_to_cover} is below the minimum liquidation size {minimum}")]
    BelowMinimumLiquidation { debt_to_cover: Uint128, minimum: Uint128 },

    #[error("Reentrant call")]
    ReentrantCall {},

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}

impl From<OverflowError> for ContractError {
    fn from(_o: OverflowError) -> Self {
        ContractError::AmountTooLarge {}
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(_o: ConversionOverflowError) -> Self {
        ContractError::AmountTooLarge {}
    }
}
