use cosmwasm_std::{to_binary, Addr, Api, Coin, CosmosMsg, Response, StdResult, Uint128, WasmMsg};
use cosmwasm_schema::cw_serde;

use dsc::engine::{Config, ExecuteMsg};
use dsc::types::CollateralAsset;

use crate::ContractError;

/// DscEngineContract is a wrapper around Addr that provides a lot of helpers
/// for working with this.
#[cw_serde]
pub struct DscEngineContract(pub Addr);

impl DscEngineContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }
}

pub fn assert_more_than_zero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::AmountMustBeMoreThanZero {});
    }
    Ok(())
}

/// Validates `token` and returns its registry entry
pub fn assert_allowed_collateral(
    api: &dyn Api,
    config: &Config,
    token: &str,
) -> Result<CollateralAsset, ContractError> {
    let token = api.addr_validate(token)?;

    match config.collateral_asset(&token) {
        Some(asset) => Ok(asset.clone()),
        None => Err(ContractError::TokenNotAllowed {
            token: token.to_string(),
        }),
    }
}

/// Appends `second`'s messages, attributes and events to `first`, in order
pub fn chain(first: Response, second: Response) -> Response {
    first
        .add_submessages(second.messages)
        .add_attributes(second.attributes)
        .add_events(second.events)
}
