mod credit;
mod manifest;
mod ranking;
pub(crate) mod run;
pub(crate) mod storage;

pub use credit::{Credit, NULL_TOKEN};
pub use manifest::RunSummary;
pub use ranking::{CategoryStats, PlacedRun, ValuedCategory};
pub use run::{Category, Run, TimeOrder};
pub use storage::{RawCategories, Storage};
