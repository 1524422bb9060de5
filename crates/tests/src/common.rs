use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;

pub const TOKEN: &str = "test-token";
pub const PASSWORD: &str = "hunter2";

/// Mutable state behind the fake BloodBridge API.
#[derive(Debug, Default)]
pub struct FakeState {
    /// Calls per `"METHOD /path"`.
    pub hits: HashMap<String, usize>,
    /// `Authorization` header of the most recent call.
    pub last_authorization: Option<String>,
    /// Registration answers with a full session instead of an acknowledgement.
    pub register_returns_session: bool,
    pub user: Value,
    pub eligibility: Value,
    pub requests: Vec<Value>,
    pub inventory: Vec<Value>,
    pub scheduled: Vec<Value>,
    pub inventory_updates: Vec<Value>,
    /// When set, `POST /donor/schedule` fails with this status and body.
    pub schedule_failure: Option<(StatusCode, Value)>,
}

pub type Shared = Arc<Mutex<FakeState>>;

pub struct FakeApi {
    pub base_url: String,
    pub state: Shared,
}

impl FakeApi {
    pub async fn hits(&self, key: &str) -> usize {
        self.state.lock().await.hits.get(key).copied().unwrap_or(0)
    }

    pub async fn total_hits(&self) -> usize {
        self.state.lock().await.hits.values().sum()
    }
}

pub fn donor_user() -> Value {
    json!({
        "user_id": "donor-1",
        "name": "Ada Donor",
        "email": "ada@example.com",
        "role": "donor",
        "blood_type": "O-"
    })
}

pub fn blood_request(id: &str, urgency: &str, status: &str, created_by: &str) -> Value {
    json!({
        "request_id": id,
        "blood_type": "O-",
        "quantity": 2,
        "urgency": urgency,
        "status": status,
        "created_by": created_by,
        "hospital_name": "St. Mary",
        "location": "Leeds",
        "notes": "",
        "timestamp": "2026-03-01T10:00:00"
    })
}

/// Start the fake API on an ephemeral port and return its `/api` base URL.
pub async fn spawn_api(seed: FakeState) -> FakeApi {
    let state: Shared = Arc::new(Mutex::new(FakeState {
        user: if seed.user.is_null() { donor_user() } else { seed.user.clone() },
        ..seed
    }));

    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/donor/eligibility", get(eligibility))
        .route("/donor/matching-requests", get(matching_requests))
        .route("/donor/schedule", post(schedule))
        .route("/requests", get(list_requests).post(create_request))
        .route("/inventory", get(list_inventory).put(update_inventory))
        .with_state(state.clone());
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().expect("Fake API has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake API stopped");
    });

    FakeApi {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

type Reply = (StatusCode, Json<Value>);

async fn record<'a>(state: &'a Shared, key: &str, headers: &HeaderMap) -> tokio::sync::MutexGuard<'a, FakeState> {
    let mut s = state.lock().await;
    *s.hits.entry(key.to_string()).or_default() += 1;
    s.last_authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    s
}

fn authorized(s: &FakeState) -> bool {
    let expected = format!("Bearer {TOKEN}");
    s.last_authorization.as_deref() == Some(expected.as_str())
}

fn unauthorized() -> Reply {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid or expired token" })))
}

async fn login(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let s = record(&state, "POST /auth/login", &headers).await;
    if body["email"] == s.user["email"] && body["password"] == PASSWORD {
        (StatusCode::OK, Json(json!({ "token": TOKEN, "user": s.user })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid email or password" })))
    }
}

async fn register(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let mut s = record(&state, "POST /auth/register", &headers).await;
    if body["email"] == s.user["email"] {
        return (StatusCode::CONFLICT, Json(json!({ "error": "User with this email already exists" })));
    }
    let user = json!({
        "user_id": "new-user",
        "name": body["name"],
        "email": body["email"],
        "role": body["role"],
        "blood_type": body.get("blood_type").cloned().unwrap_or(Value::Null),
        "hospital_name": body.get("hospital_name").cloned().unwrap_or(Value::Null),
        "location": body.get("location").cloned().unwrap_or(Value::Null),
    });
    s.user = user.clone();
    if s.register_returns_session {
        (StatusCode::CREATED, Json(json!({ "token": TOKEN, "user": user })))
    } else {
        (StatusCode::CREATED, Json(json!({ "user_id": "new-user", "message": "User registered successfully" })))
    }
}

async fn eligibility(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = record(&state, "GET /donor/eligibility", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    (StatusCode::OK, Json(s.eligibility.clone()))
}

async fn matching_requests(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = record(&state, "GET /donor/matching-requests", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    let open: Vec<Value> = s
        .requests
        .iter()
        .filter(|r| r["status"] == "open")
        .cloned()
        .collect();
    (
        StatusCode::OK,
        Json(json!({ "blood_type": "O-", "matching_requests": open, "count": open.len() })),
    )
}

async fn schedule(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let mut s = record(&state, "POST /donor/schedule", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    if let Some((status, error)) = s.schedule_failure.clone() {
        return (status, Json(error));
    }
    s.scheduled.push(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Donation scheduled successfully",
            "request_id": body["request_id"],
            "scheduled_date": body["scheduled_date"],
        })),
    )
}

async fn list_requests(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = record(&state, "GET /requests", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!({ "requests": s.requests })))
}

async fn create_request(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let mut s = record(&state, "POST /requests", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    let id = format!("req-{}", s.requests.len() + 1);
    let mut stored = body.clone();
    stored["request_id"] = json!(id);
    stored["status"] = json!("open");
    stored["created_by"] = s.user["user_id"].clone();
    stored["timestamp"] = json!("2026-03-02T09:00:00");
    s.requests.push(stored);
    (
        StatusCode::CREATED,
        Json(json!({ "request_id": id, "message": "Blood request created successfully" })),
    )
}

async fn list_inventory(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = record(&state, "GET /inventory", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!({ "inventory": s.inventory })))
}

async fn update_inventory(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let mut s = record(&state, "PUT /inventory", &headers).await;
    if !authorized(&s) {
        return unauthorized();
    }
    s.inventory_updates.push(body.clone());
    let blood_type = body["blood_type"].clone();
    if let Some(entry) = s.inventory.iter_mut().find(|e| e["blood_type"] == blood_type) {
        entry["units_available"] = body["units_available"].clone();
    }
    (StatusCode::OK, Json(json!({ "message": "Inventory updated successfully" })))
}
