//! Donation row model.

use donations_core::donation::{Donation, DonationType};
use donations_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `donations` table.
#[derive(Debug, Clone, FromRow)]
pub struct DonationRow {
    pub id: DbId,
    pub donor_name: String,
    #[sqlx(try_from = "String")]
    pub donation_type: DonationType,
    pub amount: f64,
    pub donated_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DonationRow> for Donation {
    fn from(row: DonationRow) -> Self {
        Donation {
            id: row.id,
            donor_name: row.donor_name,
            donation_type: row.donation_type,
            amount: row.amount,
            donated_at: row.donated_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
