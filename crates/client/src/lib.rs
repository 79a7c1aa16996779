//! Client side of the donations tracker.
//!
//! [`api`] talks to the REST service; [`app`] holds the view state the
//! single-page UI renders (record list, loading flag, error line, form).

pub mod api;
pub mod app;
pub mod error;
pub mod form;

pub use api::{DonationsBackend, HttpBackend};
pub use app::{DonationRow, DonationsApp};
pub use error::ClientError;
pub use form::{DonationForm, FormMode};
