use serde::{Deserialize, Serialize};
use shared_types::{AppError, AuthResponse, RegisterRequest, SessionUser};
use std::sync::{Arc, Mutex};

use crate::ApiClient;

/// Credential token plus the profile it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            token: auth.token,
            user: auth.user,
        }
    }
}

/// `Anonymous -> Authenticated -> Anonymous`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn sign_in(&mut self, session: Session) {
        tracing::info!(user_id = %session.user.user_id, role = %session.user.role, "Session started");
        *self = SessionState::Authenticated(session);
    }

    pub fn sign_out(&mut self) {
        if let SessionState::Authenticated(session) = self {
            tracing::info!(user_id = %session.user.user_id, "Session ended");
        }
        *self = SessionState::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            SessionState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(session) => Some(&session.token),
            SessionState::Anonymous => None,
        }
    }
}

/// Where a session survives page reloads for the lifetime of the browser tab.
#[allow(async_fn_in_trait)]
pub trait SessionStorage {
    async fn load(&self) -> Option<Session>;
    async fn save(&self, session: &Session) -> Result<(), AppError>;
    async fn clear(&self);
}

/// In-process storage for tests and non-browser targets.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<Session>>>,
}

impl SessionStorage for MemoryStorage {
    async fn load(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::internal("Session storage is unavailable"))?;
        *slot = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Persisted session, or `Anonymous` when nothing was stored.
pub async fn restore<S: SessionStorage>(storage: &S) -> SessionState {
    match storage.load().await {
        Some(session) => {
            tracing::info!(user_id = %session.user.user_id, "Session restored");
            SessionState::Authenticated(session)
        }
        None => SessionState::Anonymous,
    }
}

/// Authenticate and persist the session.
///
/// Errors come back as the message to show on the sign-in form.
pub async fn login<S: SessionStorage>(
    client: &ApiClient,
    storage: &S,
    email: &str,
    password: &str,
) -> Result<Session, String> {
    let session: Session = client
        .login(email, password)
        .await
        .map_err(|e| report("Login failed", e))?
        .into();
    persist(storage, session).await
}

/// Create an account and persist the resulting session.
///
/// When the server only acknowledges the registration, the session comes
/// from a follow-up login with the submitted credentials.
pub async fn register<S: SessionStorage>(
    client: &ApiClient,
    storage: &S,
    profile: RegisterRequest,
) -> Result<Session, String> {
    let profile = profile.normalized();
    profile.check().map_err(|e| report("Registration rejected", e))?;

    let resp = client
        .register(&profile)
        .await
        .map_err(|e| report("Registration failed", e))?;

    let session: Session = match resp.into_auth() {
        Some(auth) => auth.into(),
        None => client
            .login(&profile.email, &profile.password)
            .await
            .map_err(|e| report("Login after registration failed", e))?
            .into(),
    };
    persist(storage, session).await
}

/// Forget the persisted session.
pub async fn logout<S: SessionStorage>(storage: &S) {
    storage.clear().await;
}

async fn persist<S: SessionStorage>(storage: &S, session: Session) -> Result<Session, String> {
    // An unpersisted session still works until the tab reloads.
    if let Err(e) = storage.save(&session).await {
        tracing::error!(error = %e, "Failed to persist session");
    }
    Ok(session)
}

fn report(context: &str, error: AppError) -> String {
    tracing::error!(error = %error, "{context}");
    error.friendly_message()
}
