use super::{Credit, RunSummary, Run};
use crate::error::Result;
use std::collections::BTreeMap;

/// Raw category export: category name to its runs.
pub type RawCategories = BTreeMap<String, Vec<Run>>;

pub trait Storage: Send + Sync {
    fn load_categories(&self) -> Result<RawCategories>;
    fn save_credits(&self, credits: &[Credit]) -> Result<()>;
    fn save_summary(&self, summary: &RunSummary) -> Result<()>;
}
