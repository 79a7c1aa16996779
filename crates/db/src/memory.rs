//! In-process [`DonationStore`] used by tests and `STORE_BACKEND=memory`.
//!
//! Mirrors the Postgres semantics: sequential IDs, store-assigned
//! timestamps, `donated_at DESC, id DESC` ordering, hard deletes. Nothing
//! survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use donations_core::donation::{Donation, NewDonation};
use donations_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::DonationStore;

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Donation>,
}

/// Thread-safe via interior `RwLock`; wrap in `Arc` to share.
#[derive(Default)]
pub struct MemoryDonationStore {
    inner: RwLock<Inner>,
}

impl MemoryDonationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored donations.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DonationStore for MemoryDonationStore {
    async fn list(&self) -> Result<Vec<Donation>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Donation> = inner.rows.values().cloned().collect();
        rows.sort_by(|a, b| b.donated_at.cmp(&a.donated_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Donation>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: &NewDonation) -> Result<Donation, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let donation = Donation {
            id: inner.last_id,
            donor_name: input.donor_name.clone(),
            donation_type: input.donation_type,
            amount: input.amount,
            donated_at: input.donated_at,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(donation.id, donation.clone());
        Ok(donation)
    }

    async fn update(
        &self,
        id: DbId,
        input: &NewDonation,
    ) -> Result<Option<Donation>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.donor_name = input.donor_name.clone();
        row.donation_type = input.donation_type;
        row.amount = input.amount;
        row.donated_at = input.donated_at;
        row.updated_at = Utc::now().max(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
