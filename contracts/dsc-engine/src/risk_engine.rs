use std::convert::TryFrom;

use cosmwasm_std::{Addr, Decimal, Env, QuerierWrapper, Storage, Uint128, Uint256};

use dsc::engine::Config;

use crate::oracle::PRECISION;
use crate::query::get_account_collateral_value;
use crate::state::dsc_minted;
use crate::ContractError;

/// 50% of collateral value counts towards solvency, i.e. 200% overcollateralized
pub const LIQUIDATION_THRESHOLD: u128 = 50;
/// 10% collateral bonus for liquidators
pub const LIQUIDATION_BONUS: u128 = 10;
pub const LIQUIDATION_PRECISION: u128 = 100;
pub const MIN_HEALTH_FACTOR: Decimal = Decimal::one();

/// (collateral value * threshold) / debt, as an 18 decimal ratio.
/// No debt is maximally healthy, as is anything past Decimal::MAX.
pub fn calculate_health_factor(total_dsc_minted: Uint128, collateral_value_in_usd: Uint128) -> Decimal {
    if total_dsc_minted.is_zero() {
        return Decimal::MAX;
    }

    let collateral_adjusted_for_threshold =
        collateral_value_in_usd.multiply_ratio(LIQUIDATION_THRESHOLD, LIQUIDATION_PRECISION);
    let ratio = collateral_adjusted_for_threshold.full_mul(PRECISION) / Uint256::from(total_dsc_minted);

    match Uint128::try_from(ratio) {
        Ok(ratio) => Decimal::raw(ratio.u128()),
        Err(_) => Decimal::MAX,
    }
}

/// Health factor from the user's ledgers at current prices
pub fn health_factor(
    storage: &dyn Storage,
    querier: QuerierWrapper,
    env: &Env,
    config: &Config,
    user: &Addr,
) -> Result<Decimal, ContractError> {
    let total_dsc_minted = dsc_minted(storage, user)?;
    //Debt free positions never need a price
    if total_dsc_minted.is_zero() {
        return Ok(Decimal::MAX);
    }
    let collateral_value = get_account_collateral_value(storage, querier, env, config, user)?;

    Ok(calculate_health_factor(total_dsc_minted, collateral_value))
}

pub fn is_healthy(health_factor: Decimal) -> bool {
    health_factor >= MIN_HEALTH_FACTOR
}

/// Errors with the user's health factor if it's below the minimum
pub fn assert_health_factor(
    storage: &dyn Storage,
    querier: QuerierWrapper,
    env: &Env,
    config: &Config,
    user: &Addr,
) -> Result<Decimal, ContractError> {
    let user_health_factor = health_factor(storage, querier, env, config, user)?;

    if !is_healthy(user_health_factor) {
        return Err(ContractError::BreaksHealthFactor {
            health_factor: user_health_factor,
        });
    }

    Ok(user_health_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_factor_formula() {
        //$20,000 of collateral against 100 DSC
        let hf = calculate_health_factor(
            Uint128::new(100 * PRECISION),
            Uint128::new(20_000 * PRECISION),
        );
        assert_eq!(hf, Decimal::from_ratio(100u128, 1u128));

        //Exactly 200% collateralized
        let hf = calculate_health_factor(Uint128::new(100), Uint128::new(200));
        assert_eq!(hf, MIN_HEALTH_FACTOR);
        assert!(is_healthy(hf));

        let hf = calculate_health_factor(Uint128::new(100), Uint128::new(199));
        assert_eq!(hf, Decimal::percent(99));
        assert!(!is_healthy(hf));

        assert_eq!(calculate_health_factor(Uint128::zero(), Uint128::new(1)), Decimal::MAX);
        assert_eq!(calculate_health_factor(Uint128::new(1), Uint128::MAX), Decimal::MAX);
        assert_eq!(calculate_health_factor(Uint128::new(1), Uint128::zero()), Decimal::zero());
    }
}
