use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("There aren't enough categories! found {found}, expected at least {minimum}")]
    NotEnoughCategories { found: usize, minimum: usize },
    #[error("Category `{0}` has no runs")]
    EmptyCategory(String),
    #[error("Category `{0}` mixes reverse-time and regular runs")]
    MixedPolarity(String),
    #[error("No database URL configured; pass --database-url or set DATABASE_URL")]
    MissingDatabaseUrl,
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
