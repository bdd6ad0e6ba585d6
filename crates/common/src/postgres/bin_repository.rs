use crate::domain::{
    Bin, BinRepository, CreateBinRepoInput, DomainError, DomainResult, UpdateFillLevelRepoInput,
};
use crate::postgres::PostgresClient;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

const BIN_SELECT_COLUMNS: &str =
    "id, location, bin_type, fill_level, created_at, updated_at";

fn bin_from_row(row: &tokio_postgres::Row) -> Bin {
    Bin {
        id: row.get(0),
        location: row.get(1),
        bin_type: row.get(2),
        fill_level: row.get(3),
        created_at: row.get(4),
        updated_at: row.get(5),
    }
}

#[derive(Clone)]
pub struct PostgresBinRepository {
    client: PostgresClient,
}

impl PostgresBinRepository {
    pub fn new(client: PostgresClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BinRepository for PostgresBinRepository {
    #[instrument(skip(self, input), fields(location = %input.location, bin_type = %input.bin_type))]
    async fn create_bin(&self, input: CreateBinRepoInput) -> DomainResult<Bin> {
        debug!("Creating bin in database");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let now = Utc::now();

        let row = conn
            .query_one(
                &format!(
                    "INSERT INTO bins (location, bin_type, fill_level, created_at, updated_at)
                     VALUES ($1, $2, 0, $3, $3)
                     RETURNING {}",
                    BIN_SELECT_COLUMNS
                ),
                &[&input.location, &input.bin_type, &now],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        let bin = bin_from_row(&row);
        info!(bin_id = bin.id, "Bin created in database");
        Ok(bin)
    }

    #[instrument(skip(self))]
    async fn get_bin(&self, bin_id: i32) -> DomainResult<Option<Bin>> {
        debug!("Getting bin from database");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let row = conn
            .query_opt(
                &format!("SELECT {} FROM bins WHERE id = $1", BIN_SELECT_COLUMNS),
                &[&bin_id],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        Ok(row.as_ref().map(bin_from_row))
    }

    #[instrument(skip(self, input), fields(bin_id = input.bin_id, fill_level = input.fill_level))]
    async fn update_fill_level(&self, input: UpdateFillLevelRepoInput) -> DomainResult<()> {
        debug!("Updating bin fill level");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let now = Utc::now();

        let rows_affected = conn
            .execute(
                "UPDATE bins SET fill_level = $1, updated_at = $2 WHERE id = $3",
                &[&input.fill_level, &now, &input.bin_id],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        if rows_affected == 0 {
            return Err(DomainError::BinNotFound(input.bin_id));
        }

        info!("Bin fill level updated");
        Ok(())
    }

    async fn list_bins(&self) -> DomainResult<Vec<Bin>> {
        debug!("Listing bins from database");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let rows = conn
            .query(
                &format!("SELECT {} FROM bins ORDER BY id DESC", BIN_SELECT_COLUMNS),
                &[],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        let bins: Vec<Bin> = rows.iter().map(bin_from_row).collect();

        debug!(count = bins.len(), "Listed bins from database");
        Ok(bins)
    }

    #[instrument(skip(self))]
    async fn delete_bin(&self, bin_id: i32) -> DomainResult<()> {
        debug!("Deleting bin");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        // pickup_logs rows go with it through ON DELETE CASCADE
        let rows_affected = conn
            .execute("DELETE FROM bins WHERE id = $1", &[&bin_id])
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        if rows_affected == 0 {
            return Err(DomainError::BinNotFound(bin_id));
        }

        info!("Bin deleted");
        Ok(())
    }
}
