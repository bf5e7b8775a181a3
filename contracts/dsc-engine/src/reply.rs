use cosmwasm_std::{attr, DepsMut, Env, Reply, Response};

use crate::positions::{
    BURN_REPLY_ID, BURN_TRANSFER_REPLY_ID, DEPOSIT_REPLY_ID, MINT_REPLY_ID, REDEEM_REPLY_ID,
};
use crate::state::settle_external_call;
use crate::ContractError;

//Every external call replies here.
//Success frees one slot of the operation lock, failure aborts the whole operation.
pub fn handle_external_call_reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let call = match msg.id {
        DEPOSIT_REPLY_ID => "collateral_transfer_from",
        REDEEM_REPLY_ID => "collateral_transfer",
        MINT_REPLY_ID => "dsc_mint",
        BURN_TRANSFER_REPLY_ID => "dsc_transfer_from",
        BURN_REPLY_ID => "dsc_burn",
        id => return Err(ContractError::UnknownReplyId { id }),
    };

    match msg.result.into_result() {
        Ok(_result) => {
            settle_external_call(deps.storage)?;

            Ok(Response::new().add_attributes(vec![
                attr("method", "handle_external_call_reply"),
                attr("call", call),
            ]))
        }
        Err(reason) => Err(match msg.id {
            MINT_REPLY_ID => ContractError::MintFailed { reason },
            BURN_REPLY_ID => ContractError::BurnFailed { reason },
            _ => ContractError::TransferFailed { reason },
        }),
    }
}
