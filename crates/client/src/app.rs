//! View state for the single-page donations UI.
//!
//! The server is the source of truth: every mutation is followed by a full
//! [`DonationsApp::reload`], and nothing is updated optimistically.

use chrono::NaiveDate;
use donations_core::donation::Donation;
use donations_core::types::DbId;

use crate::api::DonationsBackend;
use crate::form::{format_date, DonationForm, FormMode};

/// One table row, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRow {
    pub id: DbId,
    pub donor: String,
    pub kind: &'static str,
    pub amount: String,
    pub date: String,
}

pub struct DonationsApp<B> {
    backend: B,
    today: NaiveDate,
    pub donations: Vec<Donation>,
    pub loading: bool,
    /// Empty when there is nothing to show.
    pub error: String,
    pub mode: FormMode,
    pub form: DonationForm,
}

impl<B: DonationsBackend> DonationsApp<B> {
    /// A fresh view in the loading state; call [`Self::reload`] to populate.
    pub fn new(backend: B, today: NaiveDate) -> Self {
        Self {
            backend,
            today,
            donations: Vec::new(),
            loading: true,
            error: String::new(),
            mode: FormMode::New,
            form: DonationForm::blank(today),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Re-fetch the full list.
    pub async fn reload(&mut self) {
        self.loading = true;
        self.error.clear();
        match self.backend.list().await {
            Ok(donations) => self.donations = donations,
            Err(e) => self.error = e.to_string(),
        }
        self.loading = false;
    }

    /// Load a listed record into the form. Returns `false` if `id` is not in
    /// the current list.
    pub fn start_edit(&mut self, id: DbId) -> bool {
        let Some(donation) = self.donations.iter().find(|d| d.id == id) else {
            return false;
        };
        self.form = DonationForm::from_record(donation);
        self.mode = FormMode::Editing(id);
        true
    }

    pub fn reset_form(&mut self) {
        self.mode = FormMode::New;
        self.form = DonationForm::blank(self.today);
    }

    /// Create or update from the form, then reset it and reload.
    ///
    /// Returns `true` when the server accepted the record. On failure the
    /// form is kept and [`Self::error`] says why.
    pub async fn submit(&mut self) -> bool {
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.error = e.to_string();
                return false;
            }
        };

        self.error.clear();
        let saved = match self.mode {
            FormMode::Editing(id) => self.backend.update(id, &payload).await,
            FormMode::New => self.backend.create(&payload).await,
        };

        match saved {
            Ok(donation) => {
                tracing::debug!(donation_id = donation.id, "Donation saved");
                self.reset_form();
                self.reload().await;
                true
            }
            Err(e) => {
                self.error = e.to_string();
                false
            }
        }
    }

    /// Delete after `confirm` approves, then reload. Returns `true` if the
    /// record was deleted.
    pub async fn delete(&mut self, id: DbId, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        match self.backend.delete(id).await {
            Ok(()) => {
                self.reload().await;
                true
            }
            Err(e) => {
                self.error = e.to_string();
                false
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::New => "Add Donation",
            FormMode::Editing(_) => "Edit Donation",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::New => "Save",
            FormMode::Editing(_) => "Update",
        }
    }

    /// Loaded and nothing recorded yet.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.donations.is_empty()
    }

    pub fn rows(&self) -> Vec<DonationRow> {
        self.donations
            .iter()
            .map(|d| DonationRow {
                id: d.id,
                donor: d.donor_name.clone(),
                kind: d.donation_type.as_str(),
                amount: format_amount(d.amount),
                date: format_date(d.donated_at.date_naive()),
            })
            .collect()
    }
}

/// Group thousands with commas and keep at most three decimals,
/// e.g. `1234.5` → `"1,234.5"`.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
