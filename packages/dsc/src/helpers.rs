use cosmwasm_std::{to_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

/// Wraps a cw20 execute msg for `token`
fn cw20_msg(token: &Addr, msg: Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&msg)?,
        funds: vec![],
    }))
}

/// Pull `amount` from `owner` to `recipient` using the sender's allowance
pub fn cw20_transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    cw20_msg(
        token,
        Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Send `amount` of the sender's balance to `recipient`
pub fn cw20_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_msg(
        token,
        Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Minter only
pub fn cw20_mint_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_msg(
        token,
        Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Destroy `amount` of the sender's own balance
pub fn cw20_burn_msg(token: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_msg(token, Cw20ExecuteMsg::Burn { amount })
}
