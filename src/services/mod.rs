pub mod credit;
pub mod leaderboard;
pub mod placement;
pub mod run_service;
pub mod scoring;
pub mod valuation;

pub use credit::CreditAllocator;
pub use run_service::RunService;
pub use valuation::value_category;
