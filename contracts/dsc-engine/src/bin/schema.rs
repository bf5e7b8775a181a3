use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use dsc::engine::{
    AccountInformationResponse, Config, ConstantsResponse, ExecuteMsg, InstantiateMsg,
    ProtocolTotalsResponse, QueryMsg,
};
use dsc::price_feed::{QueryMsg as PriceFeedQueryMsg, RoundDataResponse};
use dsc::types::{CollateralAsset, CollateralTotal};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(ConstantsResponse), &out_dir);
    export_schema(&schema_for!(AccountInformationResponse), &out_dir);
    export_schema(&schema_for!(ProtocolTotalsResponse), &out_dir);
    export_schema(&schema_for!(CollateralAsset), &out_dir);
    export_schema(&schema_for!(CollateralTotal), &out_dir);
    export_schema(&schema_for!(PriceFeedQueryMsg), &out_dir);
    export_schema(&schema_for!(RoundDataResponse), &out_dir);
}
