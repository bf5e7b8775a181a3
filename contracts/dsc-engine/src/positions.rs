use cosmwasm_std::{
    attr, Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, SubMsg, Uint128,
};

use dsc::engine::Config;
use dsc::helpers::{cw20_burn_msg, cw20_mint_msg, cw20_transfer_from_msg, cw20_transfer_msg};
use dsc::types::CollateralAsset;

use crate::helpers::{assert_allowed_collateral, assert_more_than_zero, chain};
use crate::risk_engine::assert_health_factor;
use crate::state::{decrease_collateral, decrease_debt, increase_collateral, increase_debt, CONFIG};
use crate::ContractError;

//Reply IDs
pub const DEPOSIT_REPLY_ID: u64 = 1u64;
pub const REDEEM_REPLY_ID: u64 = 2u64;
pub const MINT_REPLY_ID: u64 = 3u64;
pub const BURN_TRANSFER_REPLY_ID: u64 = 4u64;
pub const BURN_REPLY_ID: u64 = 5u64;

/// Credits the sender's position, then pulls the tokens into custody
pub fn deposit_collateral(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;

    assert_more_than_zero(amount)?;
    let asset = assert_allowed_collateral(deps.api, &config, &collateral_asset)?;

    let new_balance = increase_collateral(deps.storage, &info.sender, &asset.token, amount)?;

    let transfer_msg =
        cw20_transfer_from_msg(&asset.token, &info.sender, &env.contract.address, amount)?;

    let event = Event::new("collateral_deposited")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("token", asset.token.to_string())
        .add_attribute("amount", amount.to_string());

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(transfer_msg, DEPOSIT_REPLY_ID))
        .add_event(event)
        .add_attributes(vec![
            attr("method", "deposit_collateral"),
            attr("user", info.sender),
            attr("collateral_asset", asset.token),
            attr("amount", amount),
            attr("new_balance", new_balance),
        ]))
}

/// Adds debt to the sender's position and mints it to them.
/// The position must stay healthy.
pub fn mint_dsc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;

    assert_more_than_zero(amount)?;

    let total_dsc_minted = increase_debt(deps.storage, &info.sender, amount)?;
    let health_factor = assert_health_factor(deps.storage, deps.querier, &env, &config, &info.sender)?;

    let mint_msg = cw20_mint_msg(&config.dsc_token, &info.sender, amount)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(mint_msg, MINT_REPLY_ID))
        .add_attributes(vec![
            attr("method", "mint_dsc"),
            attr("user", info.sender),
            attr("amount", amount),
            attr("total_dsc_minted", total_dsc_minted),
            attr("health_factor", health_factor.to_string()),
        ]))
}

/// Repays the sender's own debt with their own tokens
pub fn burn_dsc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;

    assert_more_than_zero(amount)?;

    let response = burn(deps.storage, &env, &config, amount, &info.sender, &info.sender)?;

    //Repaying can't lower the health factor
    let health_factor = assert_health_factor(deps.storage, deps.querier, &env, &config, &info.sender)?;

    Ok(response.add_attributes(vec![
        attr("method", "burn_dsc"),
        attr("user", info.sender),
        attr("health_factor", health_factor.to_string()),
    ]))
}

/// Withdraws collateral to the sender.
/// The position must stay healthy.
pub fn redeem_collateral(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;

    assert_more_than_zero(amount)?;
    let asset = assert_allowed_collateral(deps.api, &config, &collateral_asset)?;

    let response = redeem(deps.storage, &asset, amount, &info.sender, &info.sender)?;

    let health_factor = assert_health_factor(deps.storage, deps.querier, &env, &config, &info.sender)?;

    Ok(response.add_attributes(vec![
        attr("method", "redeem_collateral"),
        attr("user", info.sender),
        attr("health_factor", health_factor.to_string()),
    ]))
}

pub fn deposit_collateral_and_mint_dsc(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_asset: String,
    amount_collateral: Uint128,
    amount_dsc_to_mint: Uint128,
) -> Result<Response, ContractError> {
    let deposit_response = deposit_collateral(
        deps.branch(),
        env.clone(),
        info.clone(),
        collateral_asset,
        amount_collateral,
    )?;
    let mint_response = mint_dsc(deps, env, info, amount_dsc_to_mint)?;

    Ok(chain(
        chain(
            Response::new().add_attribute("method", "deposit_collateral_and_mint_dsc"),
            deposit_response,
        ),
        mint_response,
    ))
}

/// Burns first so the redemption is checked against the reduced debt
pub fn redeem_collateral_for_dsc(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_asset: String,
    amount_collateral: Uint128,
    amount_dsc_to_burn: Uint128,
) -> Result<Response, ContractError> {
    let burn_response = burn_dsc(deps.branch(), env.clone(), info.clone(), amount_dsc_to_burn)?;
    let redeem_response = redeem_collateral(deps, env, info, collateral_asset, amount_collateral)?;

    Ok(chain(
        chain(
            Response::new().add_attribute("method", "redeem_collateral_for_dsc"),
            burn_response,
        ),
        redeem_response,
    ))
}

/// Debits `from`'s deposit and sends the tokens to `to`.
/// Doesn't check anyone's health factor.
pub fn redeem(
    storage: &mut dyn Storage,
    asset: &CollateralAsset,
    amount: Uint128,
    from: &Addr,
    to: &Addr,
) -> Result<Response, ContractError> {
    let remaining = decrease_collateral(storage, from, &asset.token, amount)?;

    let transfer_msg = cw20_transfer_msg(&asset.token, to, amount)?;

    let event = Event::new("collateral_redeemed")
        .add_attribute("redeemed_from", from.to_string())
        .add_attribute("redeemed_to", to.to_string())
        .add_attribute("token", asset.token.to_string())
        .add_attribute("amount", amount.to_string());

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(transfer_msg, REDEEM_REPLY_ID))
        .add_event(event)
        .add_attributes(vec![
            attr("collateral_asset", asset.token.to_string()),
            attr("redeemed_amount", amount),
            attr("remaining_collateral", remaining),
        ]))
}

/// Debits `on_behalf_of`'s debt, pulls the tokens from `payer` and burns them.
/// Doesn't check anyone's health factor.
pub fn burn(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    amount: Uint128,
    on_behalf_of: &Addr,
    payer: &Addr,
) -> Result<Response, ContractError> {
    let remaining_debt = decrease_debt(storage, on_behalf_of, amount)?;

    let transfer_msg =
        cw20_transfer_from_msg(&config.dsc_token, payer, &env.contract.address, amount)?;
    let burn_msg = cw20_burn_msg(&config.dsc_token, amount)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(transfer_msg, BURN_TRANSFER_REPLY_ID))
        .add_submessage(SubMsg::reply_always(burn_msg, BURN_REPLY_ID))
        .add_attributes(vec![
            attr("burned_amount", amount),
            attr("on_behalf_of", on_behalf_of.to_string()),
            attr("payer", payer.to_string()),
            attr("remaining_debt", remaining_debt),
        ]))
}
