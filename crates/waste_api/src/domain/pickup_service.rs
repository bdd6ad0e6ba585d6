use common::domain::{
    max_collected_kg, DomainResult, PickupLog, PickupRepository, PickupWithBin,
    RecordPickupRepoInput,
};
use common::garde::validate_struct;
use garde::Validate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Service request for recording a pickup
#[derive(Debug, Clone, Validate)]
pub struct RecordPickupRequest {
    #[garde(skip)]
    pub bin_id: i32,
    #[garde(custom(validate_collected_kg))]
    pub collected_kg: Decimal,
}

fn validate_collected_kg(value: &Decimal, _ctx: &()) -> garde::Result {
    if *value < Decimal::ZERO {
        return Err(garde::Error::new("must not be negative"));
    }
    if *value > max_collected_kg() {
        return Err(garde::Error::new(format!(
            "must not exceed {}",
            max_collected_kg()
        )));
    }
    Ok(())
}

/// Pickup ledger: records collections and resets the collected bin
pub struct PickupService {
    pickup_repository: Arc<dyn PickupRepository>,
}

impl PickupService {
    pub fn new(pickup_repository: Arc<dyn PickupRepository>) -> Self {
        Self { pickup_repository }
    }

    /// Record a pickup and reset the bin to empty as one unit of work.
    ///
    /// Validation runs before the store is touched. Not idempotent: retrying
    /// after an ambiguous failure may record the pickup twice.
    #[instrument(skip(self, request), fields(bin_id = request.bin_id, collected_kg = %request.collected_kg))]
    pub async fn record_pickup(&self, request: RecordPickupRequest) -> DomainResult<PickupLog> {
        validate_struct(&request)?;

        let pickup = self
            .pickup_repository
            .record_pickup(RecordPickupRepoInput {
                bin_id: request.bin_id,
                collected_kg: request.collected_kg,
            })
            .await?;

        info!(pickup_id = pickup.id, "Pickup recorded successfully");
        Ok(pickup)
    }

    /// All pickups joined with their bin, most recent first
    pub async fn list_pickups(&self) -> DomainResult<Vec<PickupWithBin>> {
        debug!("Listing pickups");

        let pickups = self.pickup_repository.list_pickups().await?;

        debug!(count = pickups.len(), "Listed pickups");
        Ok(pickups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::domain::{DomainError, MockPickupRepository};

    fn kg(units: i64, scale: u32) -> Decimal {
        Decimal::new(units, scale)
    }

    #[tokio::test]
    async fn test_record_pickup_success() {
        let mut mock_repo = MockPickupRepository::new();

        mock_repo
            .expect_record_pickup()
            .withf(|input| input.bin_id == 1 && input.collected_kg == kg(125, 1))
            .times(1)
            .return_once(|input| {
                Ok(PickupLog {
                    id: 1,
                    bin_id: input.bin_id,
                    collected_kg: input.collected_kg,
                    pickup_time: Utc::now(),
                })
            });

        let service = PickupService::new(Arc::new(mock_repo));

        let pickup = service
            .record_pickup(RecordPickupRequest {
                bin_id: 1,
                collected_kg: kg(125, 1),
            })
            .await
            .unwrap();

        assert_eq!(pickup.bin_id, 1);
        assert_eq!(pickup.collected_kg, kg(125, 1));
    }

    #[tokio::test]
    async fn test_record_pickup_zero_weight_is_valid() {
        let mut mock_repo = MockPickupRepository::new();

        mock_repo
            .expect_record_pickup()
            .times(1)
            .return_once(|input| {
                Ok(PickupLog {
                    id: 2,
                    bin_id: input.bin_id,
                    collected_kg: input.collected_kg,
                    pickup_time: Utc::now(),
                })
            });

        let service = PickupService::new(Arc::new(mock_repo));

        let result = service
            .record_pickup(RecordPickupRequest {
                bin_id: 4,
                collected_kg: Decimal::ZERO,
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_record_pickup_out_of_range_weight_never_reaches_store() {
        let mut mock_repo = MockPickupRepository::new();
        mock_repo.expect_record_pickup().never();

        let service = PickupService::new(Arc::new(mock_repo));

        for collected_kg in [kg(-1, 2), kg(-10, 0), kg(100_000_000, 2)] {
            let result = service
                .record_pickup(RecordPickupRequest {
                    bin_id: 1,
                    collected_kg,
                })
                .await;
            assert!(
                matches!(result, Err(DomainError::ValidationError(_))),
                "collected_kg {}",
                collected_kg
            );
        }
    }

    #[tokio::test]
    async fn test_record_pickup_unknown_bin() {
        let mut mock_repo = MockPickupRepository::new();

        mock_repo
            .expect_record_pickup()
            .times(1)
            .return_once(|input| Err(DomainError::BinNotFound(input.bin_id)));

        let service = PickupService::new(Arc::new(mock_repo));

        let result = service
            .record_pickup(RecordPickupRequest {
                bin_id: 404,
                collected_kg: kg(3, 0),
            })
            .await;
        assert!(matches!(result, Err(DomainError::BinNotFound(404))));
    }

    #[tokio::test]
    async fn test_list_pickups() {
        let mut mock_repo = MockPickupRepository::new();

        mock_repo.expect_list_pickups().times(1).return_once(|| {
            Ok(vec![PickupWithBin {
                pickup: PickupLog {
                    id: 1,
                    bin_id: 1,
                    collected_kg: kg(125, 1),
                    pickup_time: Utc::now(),
                },
                location: "Main St".to_string(),
                bin_type: "general".to_string(),
            }])
        });

        let service = PickupService::new(Arc::new(mock_repo));

        let pickups = service.list_pickups().await.unwrap();
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].location, "Main St");
    }
}
