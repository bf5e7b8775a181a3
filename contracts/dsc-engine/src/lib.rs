pub mod contract;
mod error;
pub mod helpers;
pub mod liquidations;
pub mod oracle;
pub mod positions;
pub mod query;
pub mod reply;
pub mod risk_engine;
pub mod state;

pub use crate::error::ContractError;
