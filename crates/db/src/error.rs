/// Failure reported by a [`crate::DonationStore`].
///
/// Absence is never an error here; lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
