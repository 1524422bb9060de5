use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::{AppError, BloodType, SessionUser};

/// Request priority. `High` is shown as an emergency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    High,
}

impl Urgency {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Urgency::Normal),
            "high" => Some(Urgency::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::High => "high",
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, Urgency::High)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::High => "EMERGENCY",
        }
    }
}

/// Lifecycle of a request. Transitions happen server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Open,
    Fulfilled,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Open => "open",
            RequestStatus::Fulfilled => "fulfilled",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Open)
    }
}

/// A blood request as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BloodRequest {
    pub request_id: String,
    pub blood_type: BloodType,
    pub quantity: u32,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl BloodRequest {
    pub fn hospital_display(&self) -> &str {
        non_blank(self.hospital_name.as_deref()).unwrap_or("Hospital")
    }

    pub fn location_display(&self) -> &str {
        non_blank(self.location.as_deref()).unwrap_or("Location not specified")
    }

    pub fn notes_display(&self) -> Option<&str> {
        non_blank(self.notes.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Client-side filter over an already-fetched request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestFilter {
    #[default]
    All,
    /// Urgency `high`.
    Emergency,
    /// Status `open`.
    Open,
}

/// Filters in button order.
pub const ALL_FILTERS: &[RequestFilter] =
    &[RequestFilter::All, RequestFilter::Emergency, RequestFilter::Open];

impl RequestFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestFilter::All => "all",
            RequestFilter::Emergency => "emergency",
            RequestFilter::Open => "open",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestFilter::All => "All Requests",
            RequestFilter::Emergency => "Emergency",
            RequestFilter::Open => "Open",
        }
    }

    pub fn matches(&self, request: &BloodRequest) -> bool {
        match self {
            RequestFilter::All => true,
            RequestFilter::Emergency => request.urgency.is_emergency(),
            RequestFilter::Open => request.status.is_open(),
        }
    }

    pub fn apply(&self, requests: &[BloodRequest]) -> Vec<BloodRequest> {
        requests.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    pub fn count(&self, requests: &[BloodRequest]) -> usize {
        requests.iter().filter(|r| self.matches(r)).count()
    }
}

/// Requests created by the given user, in their original order.
pub fn created_by(requests: &[BloodRequest], user_id: &str) -> Vec<BloodRequest> {
    requests
        .iter()
        .filter(|r| r.created_by == user_id)
        .cloned()
        .collect()
}

/// Decode a request list row by row. Rows that do not parse are logged and
/// skipped so the rest of the list still renders.
pub fn lenient_requests<'de, D>(deserializer: D) -> Result<Vec<BloodRequest>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            serde_json::from_value(row)
                .map_err(|e| tracing::error!(index, error = %e, "Skipping malformed blood request"))
                .ok()
        })
        .collect())
}

/// `GET /requests` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RequestListResponse {
    #[serde(default, deserialize_with = "lenient_requests")]
    pub requests: Vec<BloodRequest>,
}

/// `POST /requests` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBloodRequest {
    pub blood_type: BloodType,
    pub quantity: u32,
    pub urgency: Urgency,
    pub hospital_name: String,
    pub location: String,
    pub notes: String,
}

/// `POST /requests` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateRequestResponse {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub message: String,
}

/// Raw values of the hospital's request form, as typed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateRequestForm {
    #[validate(length(min = 1, message = "Blood type is required"))]
    pub blood_type: String,
    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,
    #[validate(length(min = 1, message = "Urgency is required"))]
    pub urgency: String,
    pub hospital_name: String,
    pub location: String,
    pub notes: String,
}

impl CreateRequestForm {
    /// A fresh form, prefilled from the hospital profile.
    pub fn for_user(user: Option<&SessionUser>) -> Self {
        Self {
            blood_type: BloodType::default().as_str().to_string(),
            quantity: "1".to_string(),
            urgency: Urgency::default().as_str().to_string(),
            hospital_name: user
                .and_then(|u| u.hospital_name.clone())
                .unwrap_or_default(),
            location: user.and_then(|u| u.location.clone()).unwrap_or_default(),
            notes: String::new(),
        }
    }

    /// Validate required fields and parse them into an API payload.
    pub fn to_request(&self) -> Result<CreateBloodRequest, AppError> {
        let trimmed = Self {
            blood_type: self.blood_type.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            urgency: self.urgency.trim().to_string(),
            ..self.clone()
        };
        trimmed.validate()?;

        let mut field_errors = HashMap::new();
        let blood_type = BloodType::parse(&trimmed.blood_type);
        if blood_type.is_none() {
            field_errors.insert("blood_type".to_string(), "Invalid blood type".to_string());
        }
        let quantity = trimmed.quantity.parse::<u32>().ok().filter(|q| *q >= 1);
        if quantity.is_none() {
            field_errors.insert(
                "quantity".to_string(),
                "Quantity must be at least 1".to_string(),
            );
        }
        let urgency = Urgency::parse(&trimmed.urgency);
        if urgency.is_none() {
            field_errors.insert(
                "urgency".to_string(),
                "Urgency must be normal or high".to_string(),
            );
        }

        match (blood_type, quantity, urgency) {
            (Some(blood_type), Some(quantity), Some(urgency)) => Ok(CreateBloodRequest {
                blood_type,
                quantity,
                urgency,
                hospital_name: trimmed.hospital_name.trim().to_string(),
                location: trimmed.location.trim().to_string(),
                notes: trimmed.notes.trim().to_string(),
            }),
            _ => Err(AppError::validation("Please correct the highlighted fields", field_errors)),
        }
    }
}
