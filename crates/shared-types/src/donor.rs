use serde::{Deserialize, Serialize};

use crate::{AppError, BloodRequest, BloodType};

/// Shown when a donor tries to respond while not eligible.
pub const INELIGIBLE_MESSAGE: &str =
    "You are not currently eligible to donate. Please check your eligibility status.";

/// Donor eligibility as computed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Eligibility {
    pub eligible: bool,
    #[serde(default)]
    pub last_donation: Option<String>,
    #[serde(default)]
    pub next_eligible_date: Option<String>,
    #[serde(default)]
    pub days_until_eligible: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Gate for donor actions: passes only when eligibility is known and positive.
pub fn ensure_eligible(eligibility: Option<&Eligibility>) -> Result<(), AppError> {
    match eligibility {
        Some(e) if e.eligible => Ok(()),
        _ => Err(AppError::ineligible(INELIGIBLE_MESSAGE)),
    }
}

/// `GET /donor/matching-requests` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchingRequestsResponse {
    #[serde(default)]
    pub blood_type: Option<BloodType>,
    #[serde(default, deserialize_with = "crate::blood_request::lenient_requests")]
    pub matching_requests: Vec<BloodRequest>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// `POST /donor/schedule` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleDonationRequest {
    pub request_id: String,
    pub scheduled_date: String,
}

/// `POST /donor/schedule` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScheduleDonationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub scheduled_date: String,
}

/// Everything the donor dashboard loads on mount.
///
/// Either half may be missing if its fetch failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonorOverview {
    pub eligibility: Option<Eligibility>,
    pub matching_requests: Vec<BloodRequest>,
}

impl DonorOverview {
    pub fn emergency_count(&self) -> usize {
        self.matching_requests
            .iter()
            .filter(|r| r.urgency.is_emergency())
            .count()
    }

    pub fn is_eligible(&self) -> bool {
        self.eligibility.as_ref().map(|e| e.eligible).unwrap_or(false)
    }
}
