use std::convert::TryFrom;

use cosmwasm_std::{Addr, Decimal, Deps, Env, QuerierWrapper, Storage, Uint128, Uint256};

use dsc::engine::{
    AccountInformationResponse, Config, ConstantsResponse, ProtocolTotalsResponse,
};
use dsc::types::{CollateralAsset, CollateralTotal};

use crate::oracle::{stale_check_latest_price, PriceQuote, ADDITIONAL_FEED_PRECISION, PRECISION};
use crate::risk_engine::{
    health_factor, LIQUIDATION_BONUS, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD,
    MIN_HEALTH_FACTOR,
};
use crate::state::{collateral_balance, dsc_minted, total_collateral, total_dsc_minted};
use crate::ContractError;

/// USD value (18 decimals) of `amount` at `quote`, rounded down
pub fn usd_value(quote: &PriceQuote, amount: Uint128) -> Result<Uint128, ContractError> {
    let value = amount.full_mul(quote.price) / Uint256::from(PRECISION);

    Ok(Uint128::try_from(value)?)
}

/// Token amount worth `usd_amount` at `quote`, rounded down
pub fn token_amount_from_usd(quote: &PriceQuote, usd_amount: Uint128) -> Result<Uint128, ContractError> {
    let amount = usd_amount.full_mul(PRECISION) / Uint256::from(quote.price);

    Ok(Uint128::try_from(amount)?)
}

pub fn get_usd_value(
    querier: QuerierWrapper,
    env: &Env,
    config: &Config,
    asset: &CollateralAsset,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let quote = stale_check_latest_price(querier, env, config.oracle_time_limit, asset)?;

    usd_value(&quote, amount)
}

pub fn get_token_amount_from_usd(
    querier: QuerierWrapper,
    env: &Env,
    config: &Config,
    asset: &CollateralAsset,
    usd_amount: Uint128,
) -> Result<Uint128, ContractError> {
    let quote = stale_check_latest_price(querier, env, config.oracle_time_limit, asset)?;

    token_amount_from_usd(&quote, usd_amount)
}

/// Sum of the user's deposits valued at current prices.
/// Feeds of tokens the user holds none of are never read.
pub fn get_account_collateral_value(
    storage: &dyn Storage,
    querier: QuerierWrapper,
    env: &Env,
    config: &Config,
    user: &Addr,
) -> Result<Uint128, ContractError> {
    let mut total_value = Uint128::zero();

    for asset in config.collateral_assets.iter() {
        let amount = collateral_balance(storage, user, &asset.token)?;
        if amount.is_zero() {
            continue;
        }
        let value = get_usd_value(querier, env, config, asset, amount)?;
        total_value = total_value.checked_add(value)?;
    }

    Ok(total_value)
}

pub fn get_account_information(
    storage: &dyn Storage,
    querier: QuerierWrapper,
    env: &Env,
    config: &Config,
    user: &Addr,
) -> Result<AccountInformationResponse, ContractError> {
    Ok(AccountInformationResponse {
        total_dsc_minted: dsc_minted(storage, user)?,
        collateral_value_in_usd: get_account_collateral_value(storage, querier, env, config, user)?,
    })
}

pub fn query_constants(config: &Config) -> ConstantsResponse {
    ConstantsResponse {
        precision: Uint128::new(PRECISION),
        additional_feed_precision: Uint128::new(ADDITIONAL_FEED_PRECISION),
        liquidation_threshold: Uint128::new(LIQUIDATION_THRESHOLD),
        liquidation_bonus: Uint128::new(LIQUIDATION_BONUS),
        liquidation_precision: Uint128::new(LIQUIDATION_PRECISION),
        min_health_factor: MIN_HEALTH_FACTOR,
        oracle_time_limit: config.oracle_time_limit,
        min_liquidation_debt: config.min_liquidation_debt,
    }
}

//Queries take raw strings and never validate them.
//Unknown users and tokens read as empty.

pub fn query_account_information(
    deps: Deps,
    env: Env,
    config: &Config,
    user: String,
) -> Result<AccountInformationResponse, ContractError> {
    get_account_information(deps.storage, deps.querier, &env, config, &Addr::unchecked(user))
}

pub fn query_collateral_balance(
    deps: Deps,
    user: String,
    collateral_asset: String,
) -> Result<Uint128, ContractError> {
    Ok(collateral_balance(
        deps.storage,
        &Addr::unchecked(user),
        &Addr::unchecked(collateral_asset),
    )?)
}

pub fn query_account_collateral_value(
    deps: Deps,
    env: Env,
    config: &Config,
    user: String,
) -> Result<Uint128, ContractError> {
    get_account_collateral_value(deps.storage, deps.querier, &env, config, &Addr::unchecked(user))
}

pub fn query_health_factor(
    deps: Deps,
    env: Env,
    config: &Config,
    user: String,
) -> Result<Decimal, ContractError> {
    health_factor(deps.storage, deps.querier, &env, config, &Addr::unchecked(user))
}

/// Zero for tokens outside the registry
pub fn query_usd_value(
    deps: Deps,
    env: Env,
    config: &Config,
    collateral_asset: String,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Ok(Uint128::zero());
    }
    match config.collateral_asset(&Addr::unchecked(collateral_asset)) {
        Some(asset) => get_usd_value(deps.querier, &env, config, asset, amount),
        None => Ok(Uint128::zero()),
    }
}

/// Zero for tokens outside the registry
pub fn query_token_amount_from_usd(
    deps: Deps,
    env: Env,
    config: &Config,
    collateral_asset: String,
    usd_amount: Uint128,
) -> Result<Uint128, ContractError> {
    if usd_amount.is_zero() {
        return Ok(Uint128::zero());
    }
    match config.collateral_asset(&Addr::unchecked(collateral_asset)) {
        Some(asset) => get_token_amount_from_usd(deps.querier, &env, config, asset, usd_amount),
        None => Ok(Uint128::zero()),
    }
}

pub fn query_collateral_tokens(config: &Config) -> Vec<Addr> {
    config
        .collateral_assets
        .iter()
        .map(|asset| asset.token.clone())
        .collect()
}

pub fn query_collateral_asset(config: &Config, collateral_asset: String) -> Option<CollateralAsset> {
    config
        .collateral_asset(&Addr::unchecked(collateral_asset))
        .cloned()
}

/// Protocol-wide deposits and debt.
/// Tokens with no deposits are listed without reading their feed.
pub fn query_protocol_totals(
    deps: Deps,
    env: Env,
    config: &Config,
) -> Result<ProtocolTotalsResponse, ContractError> {
    let mut total_collateral_value = Uint128::zero();
    let mut totals = vec![];

    for asset in config.collateral_assets.iter() {
        let amount = total_collateral(deps.storage, &asset.token)?;
        let usd_value = if amount.is_zero() {
            Uint128::zero()
        } else {
            get_usd_value(deps.querier, &env, config, asset, amount)?
        };
        total_collateral_value = total_collateral_value.checked_add(usd_value)?;

        totals.push(CollateralTotal {
            token: asset.token.clone(),
            amount,
            usd_value,
        });
    }

    Ok(ProtocolTotalsResponse {
        total_dsc_minted: total_dsc_minted(deps.storage)?,
        total_collateral: totals,
        total_collateral_value,
    })
}
