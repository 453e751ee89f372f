pub mod api;
pub mod chain;
pub mod chain_list;
pub mod config;
pub mod contracts;
pub mod detect;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod normalize;
pub mod quantity;
pub mod run;
pub mod storefront;
pub mod types;
