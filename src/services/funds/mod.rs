pub mod fund_service;

pub use fund_service::{FundPage, FundService};
