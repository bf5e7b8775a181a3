pub mod engine;
pub mod helpers;
pub mod price_feed;
pub mod types;
