use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response, Uint128};

use dsc::engine::Config;

use crate::helpers::{assert_allowed_collateral, assert_more_than_zero, chain};
use crate::oracle::stale_check_latest_price;
use crate::positions::{burn, redeem};
use crate::query::token_amount_from_usd;
use crate::risk_engine::{
    assert_health_factor, health_factor, is_healthy, LIQUIDATION_BONUS, LIQUIDATION_PRECISION,
};
use crate::state::CONFIG;
use crate::ContractError;

/// Repays `debt_to_cover` of an unhealthy user's debt with the sender's tokens.
/// The sender receives the equivalent collateral plus the liquidation bonus.
/// Partial liquidations are fine as long as the user's health factor improves.
pub fn liquidate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_asset: String,
    user: String,
    debt_to_cover: Uint128,
) -> Result<Response, ContractError> {
    let config: Config = CONFIG.load(deps.storage)?;

    assert_more_than_zero(debt_to_cover)?;
    if debt_to_cover < config.min_liquidation_debt {
        return Err(ContractError::BelowMinimumLiquidation {
            debt_to_cover,
            minimum: config.min_liquidation_debt,
        });
    }
    let asset = assert_allowed_collateral(deps.api, &config, &collateral_asset)?;
    let user = deps.api.addr_validate(&user)?;

    let starting_health_factor = health_factor(deps.storage, deps.querier, &env, &config, &user)?;
    if is_healthy(starting_health_factor) {
        return Err(ContractError::HealthFactorOk {});
    }

    //Collateral worth the repaid debt, rounded down, plus the bonus on top
    let quote = stale_check_latest_price(deps.querier, &env, config.oracle_time_limit, &asset)?;
    let token_amount_from_debt_covered = token_amount_from_usd(&quote, debt_to_cover)?;
    let bonus_collateral =
        token_amount_from_debt_covered.multiply_ratio(LIQUIDATION_BONUS, LIQUIDATION_PRECISION);
    let total_collateral_to_redeem = token_amount_from_debt_covered.checked_add(bonus_collateral)?;

    let redeem_response = redeem(
        deps.storage,
        &asset,
        total_collateral_to_redeem,
        &user,
        &info.sender,
    )?;
    let burn_response = burn(
        deps.storage,
        &env,
        &config,
        debt_to_cover,
        &user,
        &info.sender,
    )?;

    let ending_health_factor = health_factor(deps.storage, deps.querier, &env, &config, &user)?;
    if ending_health_factor <= starting_health_factor {
        return Err(ContractError::HealthFactorNotImproved {});
    }

    //The liquidator can't leave their own position unsafe
    assert_health_factor(deps.storage, deps.querier, &env, &config, &info.sender)?;

    let response = Response::new().add_attributes(vec![
        attr("method", "liquidate"),
        attr("liquidator", info.sender),
        attr("user", user),
        attr("debt_covered", debt_to_cover),
        attr("collateral_seized", total_collateral_to_redeem),
        attr("bonus_collateral", bonus_collateral),
        attr("starting_health_factor", starting_health_factor.to_string()),
        attr("ending_health_factor", ending_health_factor.to_string()),
    ]);

    Ok(chain(chain(response, redeem_response), burn_response))
}
