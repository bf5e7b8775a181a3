#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, Uint128,
};
use cw2::set_contract_version;

use dsc::engine::{Config, ExecuteMsg, InstantiateMsg, QueryMsg};
use dsc::types::CollateralAsset;

use crate::error::ContractError;
use crate::liquidations::liquidate;
use crate::oracle::{query_feed_decimals, ORACLE_TIMEOUT};
use crate::positions::{
    burn_dsc, deposit_collateral, deposit_collateral_and_mint_dsc, mint_dsc, redeem_collateral,
    redeem_collateral_for_dsc,
};
use crate::query::{
    query_account_collateral_value, query_account_information, query_collateral_asset,
    query_collateral_balance, query_collateral_tokens, query_constants, query_health_factor,
    query_protocol_totals, query_token_amount_from_usd, query_usd_value,
};
use crate::reply::handle_external_call_reply;
use crate::risk_engine::calculate_health_factor;
use crate::state::{ReentrancyGuard, CONFIG, TOTAL_DSC_MINTED};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:dsc-engine";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.token_addresses.len() != msg.price_feed_addresses.len() {
        return Err(ContractError::TokenAddressesAndPriceFeedAddressesMustBeSameLength {});
    }
    if msg.token_addresses.is_empty() {
        return Err(ContractError::EmptyCollateralRegistry {});
    }

    //Build the registry, order is kept
    let mut collateral_assets: Vec<CollateralAsset> = vec![];
    for (token, price_feed) in msg
        .token_addresses
        .iter()
        .zip(msg.price_feed_addresses.iter())
    {
        let token = deps.api.addr_validate(token)?;
        let price_feed = deps.api.addr_validate(price_feed)?;

        if collateral_assets.iter().any(|asset| asset.token == token) {
            return Err(ContractError::DuplicateCollateral {
                token: token.to_string(),
            });
        }

        let feed_decimals = query_feed_decimals(deps.querier, price_feed.as_str())?;

        collateral_assets.push(CollateralAsset {
            token,
            price_feed,
            feed_decimals,
        });
    }

    let config = Config {
        dsc_token: deps.api.addr_validate(&msg.dsc_token)?,
        collateral_assets,
        oracle_time_limit: msg.oracle_time_limit.unwrap_or(ORACLE_TIMEOUT),
        min_liquidation_debt: msg.min_liquidation_debt.unwrap_or_default(),
    };

    CONFIG.save(deps.storage, &config)?;
    TOTAL_DSC_MINTED.save(deps.storage, &Uint128::zero())?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut attrs = vec![
        attr("method", "instantiate"),
        attr("dsc_token", config.dsc_token.to_string()),
        attr("oracle_time_limit", config.oracle_time_limit.to_string()),
        attr("min_liquidation_debt", config.min_liquidation_debt),
    ];
    for asset in config.collateral_assets.iter() {
        attrs.push(attr("collateral_asset", asset.to_string()));
    }

    Ok(Response::new().add_attributes(attrs))
}

/// Every state-changing message runs under the reentrancy guard
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    ReentrancyGuard::acquire(deps.storage)?;

    match dispatch_execute(deps.branch(), env, info, msg) {
        Ok(response) => ReentrancyGuard::release_after(deps.storage, response),
        Err(err) => {
            ReentrancyGuard::release(deps.storage);
            Err(err)
        }
    }
}

fn dispatch_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositCollateral {
            collateral_asset,
            amount,
        } => deposit_collateral(deps, env, info, collateral_asset, amount),
        ExecuteMsg::MintDsc { amount } => mint_dsc(deps, env, info, amount),
        ExecuteMsg::BurnDsc { amount } => burn_dsc(deps, env, info, amount),
        ExecuteMsg::RedeemCollateral {
            collateral_asset,
            amount,
        } => redeem_collateral(deps, env, info, collateral_asset, amount),
        ExecuteMsg::DepositCollateralAndMintDsc {
            collateral_asset,
            amount_collateral,
            amount_dsc_to_mint,
        } => deposit_collateral_and_mint_dsc(
            deps,
            env,
            info,
            collateral_asset,
            amount_collateral,
            amount_dsc_to_mint,
        ),
        ExecuteMsg::RedeemCollateralForDsc {
            collateral_asset,
            amount_collateral,
            amount_dsc_to_burn,
        } => redeem_collateral_for_dsc(
            deps,
            env,
            info,
            collateral_asset,
            amount_collateral,
            amount_dsc_to_burn,
        ),
        ExecuteMsg::Liquidate {
            collateral_asset,
            user,
            debt_to_cover,
        } => liquidate(deps, env, info, collateral_asset, user, debt_to_cover),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_external_call_reply(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    match msg {
        QueryMsg::Config {} => Ok(to_binary(&config)?),
        QueryMsg::Constants {} => Ok(to_binary(&query_constants(&config))?),
        QueryMsg::AccountInformation { user } => {
            Ok(to_binary(&query_account_information(deps, env, &config, user)?)?)
        }
        QueryMsg::CollateralBalance {
            user,
            collateral_asset,
        } => Ok(to_binary(&query_collateral_balance(deps, user, collateral_asset)?)?),
        QueryMsg::AccountCollateralValue { user } => {
            Ok(to_binary(&query_account_collateral_value(deps, env, &config, user)?)?)
        }
        QueryMsg::HealthFactor { user } => {
            Ok(to_binary(&query_health_factor(deps, env, &config, user)?)?)
        }
        QueryMsg::CalculateHealthFactor {
            total_dsc_minted,
            collateral_value_in_usd,
        } => Ok(to_binary(&calculate_health_factor(
            total_dsc_minted,
            collateral_value_in_usd,
        ))?),
        QueryMsg::UsdValue {
            collateral_asset,
            amount,
        } => Ok(to_binary(&query_usd_value(deps, env, &config, collateral_asset, amount)?)?),
        QueryMsg::TokenAmountFromUsd {
            collateral_asset,
            usd_amount,
        } => Ok(to_binary(&query_token_amount_from_usd(
            deps,
            env,
            &config,
            collateral_asset,
            usd_amount,
        )?)?),
        QueryMsg::CollateralTokens {} => Ok(to_binary(&query_collateral_tokens(&config))?),
        QueryMsg::CollateralAsset { collateral_asset } => {
            Ok(to_binary(&query_collateral_asset(&config, collateral_asset))?)
        }
        QueryMsg::ProtocolTotals {} => Ok(to_binary(&query_protocol_totals(deps, env, &config)?)?),
    }
}
