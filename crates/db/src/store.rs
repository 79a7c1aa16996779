//! The record store port held by the API layer.

use async_trait::async_trait;
use donations_core::donation::{Donation, NewDonation};
use donations_core::types::DbId;

use crate::error::StoreError;
use crate::repositories::DonationRepo;
use crate::DbPool;

/// Persistence operations the API needs.
///
/// Object-safe so the server can hold an `Arc<dyn DonationStore>` and tests
/// can swap in [`crate::MemoryDonationStore`].
#[async_trait]
pub trait DonationStore: Send + Sync {
    /// All donations ordered by `donated_at` descending, then `id` descending.
    async fn list(&self) -> Result<Vec<Donation>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Donation>, StoreError>;

    /// Persist a new donation. The store assigns `id` and both timestamps.
    async fn create(&self, input: &NewDonation) -> Result<Donation, StoreError>;

    /// Replace all user fields. `None` when `id` does not exist.
    async fn update(&self, id: DbId, input: &NewDonation)
        -> Result<Option<Donation>, StoreError>;

    /// Hard delete. `true` if a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Cheap connectivity check for `/health`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`DonationStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgDonationStore {
    pool: DbPool,
}

impl PgDonationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationStore for PgDonationStore {
    async fn list(&self) -> Result<Vec<Donation>, StoreError> {
        let rows = DonationRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Donation::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Donation>, StoreError> {
        Ok(DonationRepo::find_by_id(&self.pool, id).await?.map(Donation::from))
    }

    async fn create(&self, input: &NewDonation) -> Result<Donation, StoreError> {
        Ok(DonationRepo::create(&self.pool, input).await?.into())
    }

    async fn update(
        &self,
        id: DbId,
        input: &NewDonation,
    ) -> Result<Option<Donation>, StoreError> {
        Ok(DonationRepo::update(&self.pool, id, input)
            .await?
            .map(Donation::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(DonationRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
