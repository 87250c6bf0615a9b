pub mod fund_repo;

pub use fund_repo::FundRepository;
