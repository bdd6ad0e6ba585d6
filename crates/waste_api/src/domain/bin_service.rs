use common::domain::{
    Bin, BinRepository, CreateBinRepoInput, DomainError, DomainResult, UpdateFillLevelRepoInput,
    MAX_FILL_LEVEL, MIN_FILL_LEVEL,
};
use common::garde::validate_struct;
use garde::Validate;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Service request for registering a bin
#[derive(Debug, Clone, Validate)]
pub struct CreateBinRequest {
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(length(min = 1))]
    pub bin_type: String,
}

/// Service request for getting a bin
#[derive(Debug, Clone)]
pub struct GetBinRequest {
    pub bin_id: i32,
}

/// Service request for setting a bin's fill level
///
/// `fill_level` is wide so out-of-range client values are rejected here
/// rather than truncated on the way in.
#[derive(Debug, Clone, Validate)]
pub struct UpdateFillLevelRequest {
    #[garde(skip)]
    pub bin_id: i32,
    #[garde(range(min = 0, max = 100))]
    pub fill_level: i64,
}

/// Service request for deleting a bin
#[derive(Debug, Clone)]
pub struct DeleteBinRequest {
    pub bin_id: i32,
}

/// Bin registry: validated create, fill-level and delete operations
pub struct BinService {
    bin_repository: Arc<dyn BinRepository>,
}

impl BinService {
    pub fn new(bin_repository: Arc<dyn BinRepository>) -> Self {
        Self { bin_repository }
    }

    /// Register a bin with a fill level of 0
    #[instrument(skip(self, request), fields(location = %request.location, bin_type = %request.bin_type))]
    pub async fn create_bin(&self, request: CreateBinRequest) -> DomainResult<Bin> {
        // Whitespace-only values count as missing
        let request = CreateBinRequest {
            location: request.location.trim().to_string(),
            bin_type: request.bin_type.trim().to_string(),
        };
        validate_struct(&request)?;

        let bin = self
            .bin_repository
            .create_bin(CreateBinRepoInput {
                location: request.location,
                bin_type: request.bin_type,
            })
            .await?;

        info!(bin_id = bin.id, "Bin created successfully");
        Ok(bin)
    }

    #[instrument(skip(self, request), fields(bin_id = request.bin_id))]
    pub async fn get_bin(&self, request: GetBinRequest) -> DomainResult<Bin> {
        debug!("Getting bin");

        self.bin_repository
            .get_bin(request.bin_id)
            .await?
            .ok_or(DomainError::BinNotFound(request.bin_id))
    }

    /// Set a bin's fill level; nothing reaches the store unless it is in [0, 100]
    #[instrument(skip(self, request), fields(bin_id = request.bin_id, fill_level = request.fill_level))]
    pub async fn update_fill_level(&self, request: UpdateFillLevelRequest) -> DomainResult<()> {
        validate_struct(&request)?;

        let fill_level = i32::try_from(request.fill_level).map_err(|_| {
            DomainError::ValidationError(format!(
                "Fill level must be between {} and {}",
                MIN_FILL_LEVEL, MAX_FILL_LEVEL
            ))
        })?;

        self.bin_repository
            .update_fill_level(UpdateFillLevelRepoInput {
                bin_id: request.bin_id,
                fill_level,
            })
            .await?;

        info!("Fill level updated successfully");
        Ok(())
    }

    /// All bins, newest first
    pub async fn list_bins(&self) -> DomainResult<Vec<Bin>> {
        debug!("Listing bins");

        let bins = self.bin_repository.list_bins().await?;

        debug!(count = bins.len(), "Listed bins");
        Ok(bins)
    }

    /// Delete a bin together with its pickup history
    #[instrument(skip(self, request), fields(bin_id = request.bin_id))]
    pub async fn delete_bin(&self, request: DeleteBinRequest) -> DomainResult<()> {
        self.bin_repository.delete_bin(request.bin_id).await?;

        info!("Bin deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::domain::MockBinRepository;
    use mockall::predicate::eq;

    fn test_bin(id: i32, fill_level: i32) -> Bin {
        let now = Utc::now();
        Bin {
            id,
            location: "Main St".to_string(),
            bin_type: "general".to_string(),
            fill_level,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_bin_success() {
        let mut mock_repo = MockBinRepository::new();

        mock_repo
            .expect_create_bin()
            .withf(|input| input.location == "Main St" && input.bin_type == "general")
            .times(1)
            .return_once(|_| Ok(test_bin(1, 0)));

        let service = BinService::new(Arc::new(mock_repo));

        let bin = service
            .create_bin(CreateBinRequest {
                location: "  Main St ".to_string(),
                bin_type: "general".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(bin.id, 1);
        assert_eq!(bin.fill_level, 0);
    }

    #[tokio::test]
    async fn test_create_bin_rejects_blank_fields() {
        let mut mock_repo = MockBinRepository::new();
        mock_repo.expect_create_bin().never();

        let service = BinService::new(Arc::new(mock_repo));

        let missing_location = service
            .create_bin(CreateBinRequest {
                location: "   ".to_string(),
                bin_type: "general".to_string(),
            })
            .await;
        assert!(matches!(
            missing_location,
            Err(DomainError::ValidationError(_))
        ));

        let missing_type = service
            .create_bin(CreateBinRequest {
                location: "Main St".to_string(),
                bin_type: String::new(),
            })
            .await;
        assert!(matches!(missing_type, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_fill_level_accepts_bounds() {
        let mut mock_repo = MockBinRepository::new();

        mock_repo
            .expect_update_fill_level()
            .with(eq(UpdateFillLevelRepoInput {
                bin_id: 1,
                fill_level: 0,
            }))
            .times(1)
            .return_once(|_| Ok(()));
        mock_repo
            .expect_update_fill_level()
            .with(eq(UpdateFillLevelRepoInput {
                bin_id: 1,
                fill_level: 100,
            }))
            .times(1)
            .return_once(|_| Ok(()));

        let service = BinService::new(Arc::new(mock_repo));

        for fill_level in [0, 100] {
            let result = service
                .update_fill_level(UpdateFillLevelRequest {
                    bin_id: 1,
                    fill_level,
                })
                .await;
            assert!(result.is_ok(), "fill level {}", fill_level);
        }
    }

    #[tokio::test]
    async fn test_update_fill_level_out_of_range_never_reaches_store() {
        let mut mock_repo = MockBinRepository::new();
        mock_repo.expect_update_fill_level().never();

        let service = BinService::new(Arc::new(mock_repo));

        for fill_level in [-1, 101, i64::MAX, i64::MIN] {
            let result = service
                .update_fill_level(UpdateFillLevelRequest {
                    bin_id: 1,
                    fill_level,
                })
                .await;
            assert!(
                matches!(result, Err(DomainError::ValidationError(_))),
                "fill level {}",
                fill_level
            );
        }
    }

    #[tokio::test]
    async fn test_update_fill_level_unknown_bin() {
        let mut mock_repo = MockBinRepository::new();

        mock_repo
            .expect_update_fill_level()
            .times(1)
            .return_once(|input| Err(DomainError::BinNotFound(input.bin_id)));

        let service = BinService::new(Arc::new(mock_repo));

        let result = service
            .update_fill_level(UpdateFillLevelRequest {
                bin_id: 99,
                fill_level: 50,
            })
            .await;
        assert!(matches!(result, Err(DomainError::BinNotFound(99))));
    }

    #[tokio::test]
    async fn test_get_bin_not_found() {
        let mut mock_repo = MockBinRepository::new();

        mock_repo
            .expect_get_bin()
            .with(eq(7))
            .times(1)
            .return_once(|_| Ok(None));

        let service = BinService::new(Arc::new(mock_repo));

        let result = service.get_bin(GetBinRequest { bin_id: 7 }).await;
        assert!(matches!(result, Err(DomainError::BinNotFound(7))));
    }

    #[tokio::test]
    async fn test_list_bins_passes_through_order() {
        let mut mock_repo = MockBinRepository::new();

        mock_repo
            .expect_list_bins()
            .times(1)
            .return_once(|| Ok(vec![test_bin(2, 10), test_bin(1, 80)]));

        let service = BinService::new(Arc::new(mock_repo));

        let bins = service.list_bins().await.unwrap();
        let ids: Vec<i32> = bins.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_delete_bin_propagates_not_found() {
        let mut mock_repo = MockBinRepository::new();

        mock_repo
            .expect_delete_bin()
            .with(eq(3))
            .times(1)
            .return_once(|bin_id| Err(DomainError::BinNotFound(bin_id)));

        let service = BinService::new(Arc::new(mock_repo));

        let result = service.delete_bin(DeleteBinRequest { bin_id: 3 }).await;
        assert!(matches!(result, Err(DomainError::BinNotFound(3))));
    }
}
