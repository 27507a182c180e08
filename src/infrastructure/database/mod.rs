use crate::domain::Credit;
use crate::error::Result;
use sqlx::mysql::{MySql, MySqlPool, MySqlPoolOptions};
use sqlx::QueryBuilder;
use tracing::info;

/// Rows per `INSERT`; keeps the bind count below the protocol limit of 65535.
const INSERT_CHUNK_SIZE: usize = 4096;

const RECOMPUTE_PLAYER_RANKS: &str = r#"
    INSERT INTO playerRanks (`Rank`, Player, Points)
    SELECT ROW_NUMBER() OVER (ORDER BY Points DESC) AS `Rank`, t1.Player, t1.Points
    FROM (
        SELECT Player, SUM(GREATEST(Value * POWER(0.99, (PlayerRank - 1)), Value * 0.25)) AS Points
        FROM (
            SELECT Player, Value, ROW_NUMBER() OVER (PARTITION BY Player ORDER BY Value DESC) AS PlayerRank
            FROM runs
        ) AS rankedRuns
        GROUP BY Player
        ORDER BY Points DESC
    ) AS t1
"#;

/// Replaces the `runs` table with fresh credits and recomputes `playerRanks`.
pub struct RankingsDatabase {
    pool: MySqlPool,
}

impl RankingsDatabase {
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;

        info!("Connected to rankings database");
        Ok(Self { pool })
    }

    /// Both tables are cleared with `DELETE`, not `TRUNCATE`, so the replacement is one transaction.
    pub async fn export(&self, credits: &[Credit]) -> Result<()> {
        let mut txn = self.pool.begin().await?;

        sqlx::query("DELETE FROM runs").execute(&mut *txn).await?;

        for chunk in credits.chunks(INSERT_CHUNK_SIZE) {
            let mut query = QueryBuilder::<MySql>::new(
                "INSERT INTO runs (Leaderboard, Series, Game, Player, Platform, Place, Value, Date) ",
            );

            query.push_values(chunk, |mut row, credit| {
                row.push_bind(credit.leaderboard.clone())
                    .push_bind(credit.series.clone())
                    .push_bind(credit.game.clone())
                    .push_bind(credit.player.clone())
                    .push_bind(credit.platform.clone())
                    .push_bind(credit.place)
                    .push_bind(credit.formatted_value())
                    .push_bind(credit.date);
            });

            query.build().execute(&mut *txn).await?;
        }

        info!("Loaded {} rows into runs", credits.len());

        sqlx::query("DELETE FROM playerRanks")
            .execute(&mut *txn)
            .await?;
        let ranked = sqlx::query(RECOMPUTE_PLAYER_RANKS)
            .execute(&mut *txn)
            .await?;

        txn.commit().await?;

        info!("Recomputed {} player ranks", ranked.rows_affected());
        Ok(())
    }
}
