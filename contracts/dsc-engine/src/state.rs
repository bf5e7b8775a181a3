use cosmwasm_std::{Addr, Response, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use dsc::engine::Config;

use crate::ContractError;

pub const CONFIG: Item<Config> = Item::new("config");

/// (user, collateral token) -> deposited amount
pub const COLLATERAL_DEPOSITED: Map<(&Addr, &Addr), Uint128> = Map::new("collateral_deposited");
/// user -> outstanding debt
pub const DSC_MINTED: Map<&Addr, Uint128> = Map::new("dsc_minted");

//Protocol tallies, kept in lockstep with the user ledgers
pub const TOTAL_COLLATERAL: Map<&Addr, Uint128> = Map::new("total_collateral");
pub const TOTAL_DSC_MINTED: Item<Uint128> = Item::new("total_dsc_minted");

/// Number of external calls whose reply is still pending.
/// Present only while an operation is in flight.
pub const OPERATION_LOCK: Item<u32> = Item::new("operation_lock");

pub fn collateral_balance(storage: &dyn Storage, user: &Addr, token: &Addr) -> StdResult<Uint128> {
    Ok(COLLATERAL_DEPOSITED
        .may_load(storage, (user, token))?
        .unwrap_or_default())
}

pub fn dsc_minted(storage: &dyn Storage, user: &Addr) -> StdResult<Uint128> {
    Ok(DSC_MINTED.may_load(storage, user)?.unwrap_or_default())
}

pub fn total_collateral(storage: &dyn Storage, token: &Addr) -> StdResult<Uint128> {
    Ok(TOTAL_COLLATERAL.may_load(storage, token)?.unwrap_or_default())
}

pub fn total_dsc_minted(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOTAL_DSC_MINTED.may_load(storage)?.unwrap_or_default())
}

pub fn increase_collateral(
    storage: &mut dyn Storage,
    user: &Addr,
    token: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let new_balance = collateral_balance(storage, user, token)?.checked_add(amount)?;
    let new_total = total_collateral(storage, token)?.checked_add(amount)?;

    COLLATERAL_DEPOSITED.save(storage, (user, token), &new_balance)?;
    TOTAL_COLLATERAL.save(storage, token, &new_total)?;

    Ok(new_balance)
}

pub fn decrease_collateral(
    storage: &mut dyn Storage,
    user: &Addr,
    token: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let balance = collateral_balance(storage, user, token)?;
    if amount > balance {
        return Err(ContractError::InsufficientCollateral {
            balance,
            requested: amount,
        });
    }
    let new_balance = balance - amount;
    let new_total = total_collateral(storage, token)?.checked_sub(amount)?;

    if new_balance.is_zero() {
        COLLATERAL_DEPOSITED.remove(storage, (user, token));
    } else {
        COLLATERAL_DEPOSITED.save(storage, (user, token), &new_balance)?;
    }
    if new_total.is_zero() {
        TOTAL_COLLATERAL.remove(storage, token);
    } else {
        TOTAL_COLLATERAL.save(storage, token, &new_total)?;
    }

    Ok(new_balance)
}

pub fn increase_debt(
    storage: &mut dyn Storage,
    user: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let new_debt = dsc_minted(storage, user)?.checked_add(amount)?;
    let new_total = total_dsc_minted(storage)?.checked_add(amount)?;

    DSC_MINTED.save(storage, user, &new_debt)?;
    TOTAL_DSC_MINTED.save(storage, &new_total)?;

    Ok(new_debt)
}

pub fn decrease_debt(
    storage: &mut dyn Storage,
    user: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let minted = dsc_minted(storage, user)?;
    if amount > minted {
        return Err(ContractError::BurnAmountExceedsMinted {
            minted,
            requested: amount,
        });
    }
    let new_debt = minted - amount;
    let new_total = total_dsc_minted(storage)?.checked_sub(amount)?;

    if new_debt.is_zero() {
        DSC_MINTED.remove(storage, user);
    } else {
        DSC_MINTED.save(storage, user, &new_debt)?;
    }
    TOTAL_DSC_MINTED.save(storage, &new_total)?;

    Ok(new_debt)
}

/// Mutual exclusion over state-changing operations.
/// Held from the start of `execute` until the last reply of the
/// external calls that operation dispatched.
pub struct ReentrancyGuard;

impl ReentrancyGuard {
    pub fn acquire(storage: &mut dyn Storage) -> Result<(), ContractError> {
        if OPERATION_LOCK.may_load(storage)?.is_some() {
            return Err(ContractError::ReentrantCall {});
        }
        OPERATION_LOCK.save(storage, &1u32)?;
        Ok(())
    }

    /// Keep the lock for as many replies as `response` dispatches
    pub fn release_after(
        storage: &mut dyn Storage,
        response: Response,
    ) -> Result<Response, ContractError> {
        let pending = response.messages.len() as u32;
        if pending == 0 {
            OPERATION_LOCK.remove(storage);
        } else {
            OPERATION_LOCK.save(storage, &pending)?;
        }
        Ok(response)
    }

    pub fn release(storage: &mut dyn Storage) {
        OPERATION_LOCK.remove(storage);
    }
}

/// Called once per reply; frees the lock after the last one
pub fn settle_external_call(storage: &mut dyn Storage) -> StdResult<()> {
    match OPERATION_LOCK.may_load(storage)? {
        Some(pending) if pending > 1 => OPERATION_LOCK.save(storage, &(pending - 1)),
        _ => {
            OPERATION_LOCK.remove(storage);
            Ok(())
        }
    }
}
