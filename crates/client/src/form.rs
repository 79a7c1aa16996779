//! The add/edit form and its local checks.
//!
//! These checks only spare a round trip for obvious mistakes; the server
//! validates everything again.

use chrono::NaiveDate;
use donations_core::donation::{Donation, DonationType};
use donations_core::types::DbId;
use serde::Serialize;

use crate::error::ClientError;

/// Whether the form creates a record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    New,
    Editing(DbId),
}

/// Raw form fields as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationForm {
    pub donor_name: String,
    pub donation_type: DonationType,
    /// Kept as text so a half-typed number can be edited.
    pub amount: String,
    /// `YYYY-MM-DD`.
    pub donated_at: String,
}

/// Body sent to `POST`/`PUT /api/donations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationPayload {
    pub donor_name: String,
    pub donation_type: DonationType,
    pub amount: f64,
    pub donated_at: String,
}

impl DonationForm {
    /// Empty form defaulting to a money donation made `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            donor_name: String::new(),
            donation_type: DonationType::Money,
            amount: String::new(),
            donated_at: format_date(today),
        }
    }

    /// Prefill from a stored record for editing.
    pub fn from_record(donation: &Donation) -> Self {
        Self {
            donor_name: donation.donor_name.clone(),
            donation_type: donation.donation_type,
            amount: donation.amount.to_string(),
            donated_at: format_date(donation.donated_at.date_naive()),
        }
    }

    /// Run the local checks and build the request body.
    pub fn to_payload(&self) -> Result<DonationPayload, ClientError> {
        let donor_name = self.donor_name.trim();
        if donor_name.is_empty() {
            return Err(ClientError::Invalid("Donor name is required".into()));
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| ClientError::Invalid("Amount must be a number ≥ 0".into()))?;

        Ok(DonationPayload {
            donor_name: donor_name.to_string(),
            donation_type: self.donation_type,
            amount,
            donated_at: self.donated_at.clone(),
        })
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
