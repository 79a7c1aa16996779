//! The donation entity's domain vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Maximum length of `donor_name`, counted in characters after trimming.
pub const MAX_DONOR_NAME_LEN: usize = 200;

/// What kind of goods a donation consists of.
///
/// `amount` is a currency value for [`DonationType::Money`] and a quantity
/// for everything else; the distinction is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    Money,
    Food,
    Clothing,
    Supplies,
    Other,
}

impl DonationType {
    pub const ALL: [DonationType; 5] = [
        DonationType::Money,
        DonationType::Food,
        DonationType::Clothing,
        DonationType::Supplies,
        DonationType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DonationType::Money => "money",
            DonationType::Food => "food",
            DonationType::Clothing => "clothing",
            DonationType::Supplies => "supplies",
            DonationType::Other => "other",
        }
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`DonationType`] member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown donation type '{0}'")]
pub struct UnknownDonationType(pub String);

impl FromStr for DonationType {
    type Err = UnknownDonationType;

    /// Matching is exact: `"Money"` is not `"money"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownDonationType(s.to_string()))
    }
}

impl TryFrom<String> for DonationType {
    type Error = UnknownDonationType;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A stored donation record as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: DbId,
    pub donor_name: String,
    pub donation_type: DonationType,
    pub amount: f64,
    pub donated_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Donation {
    /// The user-supplied part of the record.
    pub fn payload(&self) -> NewDonation {
        NewDonation {
            donor_name: self.donor_name.clone(),
            donation_type: self.donation_type,
            amount: self.amount,
            donated_at: self.donated_at,
        }
    }
}

/// A validated, normalized donation payload ready for the store.
///
/// Only [`crate::validation::validate_donation`] should build one from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDonation {
    pub donor_name: String,
    pub donation_type: DonationType,
    pub amount: f64,
    pub donated_at: Timestamp,
}
