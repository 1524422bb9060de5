use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{
    ensure_eligible, AppError, AuthResponse, BloodRequest, BloodType, CreateRequestForm,
    CreateRequestResponse, DonorOverview, Eligibility, InventoryEntry, InventoryListResponse,
    LoginRequest, MatchingRequestsResponse, MessageResponse, RegisterRequest, RegisterResponse,
    RequestListResponse, ScheduleDonationRequest, ScheduleDonationResponse,
    UpdateInventoryRequest,
};

use crate::config::app_config;

/// Typed client for the BloodBridge REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client pointed at the configured API.
    pub fn from_config() -> Self {
        Self::new(app_config().api_base_url())
    }

    /// Same client, attaching `Authorization: Bearer <token>` to every call.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // --- Auth ---

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        send(self.request(Method::POST, "/auth/login").json(&body)).await
    }

    #[tracing::instrument(skip(self, profile), fields(email = %profile.email, role = profile.role.as_str()))]
    pub async fn register(&self, profile: &RegisterRequest) -> Result<RegisterResponse, AppError> {
        send(self.request(Method::POST, "/auth/register").json(profile)).await
    }

    // --- Donor ---

    #[tracing::instrument(skip(self))]
    pub async fn eligibility(&self) -> Result<Eligibility, AppError> {
        send(self.request(Method::GET, "/donor/eligibility")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn matching_requests(&self) -> Result<Vec<BloodRequest>, AppError> {
        let resp: MatchingRequestsResponse =
            send(self.request(Method::GET, "/donor/matching-requests")).await?;
        Ok(resp.matching_requests)
    }

    /// Eligibility and matching requests, fetched concurrently.
    ///
    /// A failure in either half is logged and that half is left empty.
    pub async fn donor_overview(&self) -> DonorOverview {
        let (eligibility, matching) =
            futures_util::future::join(self.eligibility(), self.matching_requests()).await;

        let eligibility = eligibility
            .map_err(|e| tracing::error!(error = %e, "Failed to load donor eligibility"))
            .ok();
        let matching_requests = matching
            .map_err(|e| tracing::error!(error = %e, "Failed to load matching requests"))
            .unwrap_or_default();

        DonorOverview {
            eligibility,
            matching_requests,
        }
    }

    /// Schedule a donation against `request_id`, stamped with the current time.
    ///
    /// Refuses without touching the network unless `eligibility` says the
    /// donor is eligible.
    #[tracing::instrument(skip(self, eligibility))]
    pub async fn schedule_donation(
        &self,
        eligibility: Option<&Eligibility>,
        request_id: &str,
    ) -> Result<ScheduleDonationResponse, AppError> {
        ensure_eligible(eligibility)?;
        let body = ScheduleDonationRequest {
            request_id: request_id.to_string(),
            scheduled_date: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        };
        send(self.request(Method::POST, "/donor/schedule").json(&body)).await
    }

    // --- Requests ---

    #[tracing::instrument(skip(self))]
    pub async fn list_requests(&self) -> Result<Vec<BloodRequest>, AppError> {
        let resp: RequestListResponse = send(self.request(Method::GET, "/requests")).await?;
        Ok(resp.requests)
    }

    /// Validate the form and create the request. Invalid forms never reach the API.
    #[tracing::instrument(skip(self, form))]
    pub async fn create_request(
        &self,
        form: &CreateRequestForm,
    ) -> Result<CreateRequestResponse, AppError> {
        let body = form.to_request()?;
        send(self.request(Method::POST, "/requests").json(&body)).await
    }

    // --- Inventory ---

    /// Inventory in blood-type display order.
    #[tracing::instrument(skip(self))]
    pub async fn list_inventory(&self) -> Result<Vec<InventoryEntry>, AppError> {
        let resp: InventoryListResponse = send(self.request(Method::GET, "/inventory")).await?;
        Ok(resp.into_sorted())
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_inventory(
        &self,
        blood_type: BloodType,
        raw_units: &str,
    ) -> Result<MessageResponse, AppError> {
        let body = UpdateInventoryRequest::from_input(blood_type, raw_units)?;
        send(self.request(Method::PUT, "/inventory").json(&body)).await
    }
}

/// Dispatch a request and decode a JSON body, mapping non-2xx statuses
/// through [`AppError::from_status`].
async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|e| AppError::network(format!("Request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::network(format!("Failed to read response: {e}")))?;

    if !status.is_success() {
        return Err(AppError::from_status(status.as_u16(), &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::internal(format!("Unexpected response body: {e}")))
}
