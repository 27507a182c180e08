mod database;
mod storage;

pub use database::RankingsDatabase;
pub use storage::fs_store::{write_credits, FileSystemStore};
