//! Repository for the `donations` table.

use donations_core::donation::NewDonation;
use donations_core::types::DbId;
use sqlx::PgPool;

use crate::models::donation::DonationRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, donor_name, donation_type, amount, donated_at, created_at, updated_at";

/// Provides CRUD operations for donations.
pub struct DonationRepo;

impl DonationRepo {
    /// Insert a new donation, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewDonation) -> Result<DonationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations (donor_name, donation_type, amount, donated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DonationRow>(&query)
            .bind(&input.donor_name)
            .bind(input.donation_type.as_str())
            .bind(input.amount)
            .bind(input.donated_at)
            .fetch_one(pool)
            .await
    }

    /// Find a donation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DonationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations WHERE id = $1");
        sqlx::query_as::<_, DonationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all donations, most recent `donated_at` first. Equal dates fall
    /// back to the newest ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<DonationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations ORDER BY donated_at DESC, id DESC");
        sqlx::query_as::<_, DonationRow>(&query).fetch_all(pool).await
    }

    /// Replace every user-supplied field of a donation.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewDonation,
    ) -> Result<Option<DonationRow>, sqlx::Error> {
        let query = format!(
            "UPDATE donations SET
                donor_name = $2,
                donation_type = $3,
                amount = $4,
                donated_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DonationRow>(&query)
            .bind(id)
            .bind(&input.donor_name)
            .bind(input.donation_type.as_str())
            .bind(input.amount)
            .bind(input.donated_at)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a donation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
