use crate::domain::{
    DomainError, DomainResult, PickupLog, PickupRepository, PickupWithBin, RecordPickupRepoInput,
};
use crate::postgres::PostgresClient;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

const FOREIGN_KEY_VIOLATION: &str = "23503";

fn pickup_with_bin_from_row(row: &tokio_postgres::Row) -> PickupWithBin {
    PickupWithBin {
        pickup: PickupLog {
            id: row.get(0),
            bin_id: row.get(1),
            collected_kg: row.get(2),
            pickup_time: row.get(3),
        },
        location: row.get(4),
        bin_type: row.get(5),
    }
}

#[derive(Clone)]
pub struct PostgresPickupRepository {
    client: PostgresClient,
}

impl PostgresPickupRepository {
    pub fn new(client: PostgresClient) -> Self {
        Self { client }
    }

    /// Both halves of a pickup, run on an open transaction. The bin is reset
    /// first so its row lock is held before the log is appended.
    async fn reset_bin_and_append_log(
        tx: &deadpool_postgres::Transaction<'_>,
        input: &RecordPickupRepoInput,
    ) -> DomainResult<PickupLog> {
        let now = Utc::now();

        let rows_affected = tx
            .execute(
                "UPDATE bins SET fill_level = 0, updated_at = $1 WHERE id = $2",
                &[&now, &input.bin_id],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        if rows_affected == 0 {
            return Err(DomainError::BinNotFound(input.bin_id));
        }

        let result = tx
            .query_one(
                "INSERT INTO pickup_logs (bin_id, collected_kg, pickup_time)
                 VALUES ($1, $2, $3)
                 RETURNING id, collected_kg",
                &[&input.bin_id, &input.collected_kg, &now],
            )
            .await;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                if let Some(db_err) = e.as_db_error() {
                    if db_err.code().code() == FOREIGN_KEY_VIOLATION {
                        return Err(DomainError::BinNotFound(input.bin_id));
                    }
                }
                return Err(DomainError::RepositoryError(e.into()));
            }
        };

        Ok(PickupLog {
            id: row.get(0),
            bin_id: input.bin_id,
            collected_kg: row.get(1),
            pickup_time: now,
        })
    }
}

#[async_trait]
impl PickupRepository for PostgresPickupRepository {
    #[instrument(skip(self, input), fields(bin_id = input.bin_id, collected_kg = %input.collected_kg))]
    async fn record_pickup(&self, input: RecordPickupRepoInput) -> DomainResult<PickupLog> {
        debug!("Recording pickup in database");

        let mut conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        let result = Self::reset_bin_and_append_log(&tx, &input).await;

        match result {
            Ok(pickup) => {
                tx.commit()
                    .await
                    .map_err(|e| DomainError::RepositoryError(e.into()))?;

                info!(pickup_id = pickup.id, "Pickup recorded and bin reset");
                Ok(pickup)
            }
            Err(err) => {
                // Roll back explicitly so nothing from this unit of work is
                // visible by the time the caller sees the error
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Failed to roll back pickup transaction");
                }
                debug!(error = %err, "Pickup transaction rolled back");
                Err(err)
            }
        }
    }

    async fn list_pickups(&self) -> DomainResult<Vec<PickupWithBin>> {
        debug!("Listing pickups from database");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let rows = conn
            .query(
                "SELECT pl.id, pl.bin_id, pl.collected_kg, pl.pickup_time, b.location, b.bin_type
                 FROM pickup_logs pl
                 JOIN bins b ON pl.bin_id = b.id
                 ORDER BY pl.pickup_time DESC, pl.id DESC",
                &[],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        let pickups: Vec<PickupWithBin> = rows.iter().map(pickup_with_bin_from_row).collect();

        debug!(count = pickups.len(), "Listed pickups from database");
        Ok(pickups)
    }
}
