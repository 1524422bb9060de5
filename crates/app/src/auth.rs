use api_client::session::{self, Session, SessionState, SessionStorage};
use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest, SessionUser};

/// `sessionStorage` key holding the serialized [`Session`].
const STORAGE_KEY: &str = "bloodbridge.session";

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionState>,
    /// False until the persisted session has been read back at startup.
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionState::Anonymous),
            restored: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.read().user().cloned()
    }

    /// API client carrying the current bearer token, if any.
    pub fn client(&self) -> ApiClient {
        let base = ApiClient::from_config();
        match self.session.read().token() {
            Some(token) => base.with_token(token),
            None => base,
        }
    }

    /// Read the persisted session back. Called once from `App`.
    pub async fn restore(mut self) {
        let state = session::restore(&BrowserSessionStorage).await;
        self.session.set(state);
        self.restored.set(true);
    }

    pub async fn login(mut self, email: String, password: String) -> Result<(), String> {
        let session =
            session::login(&self.client(), &BrowserSessionStorage, &email, &password).await?;
        self.session.write().sign_in(session);
        Ok(())
    }

    pub async fn register(mut self, profile: RegisterRequest) -> Result<(), String> {
        let session = session::register(&self.client(), &BrowserSessionStorage, profile).await?;
        self.session.write().sign_in(session);
        Ok(())
    }

    pub async fn logout(mut self) {
        session::logout(&BrowserSessionStorage).await;
        self.session.write().sign_out();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Session persistence in the browser tab's `sessionStorage`.
pub struct BrowserSessionStorage;

impl SessionStorage for BrowserSessionStorage {
    async fn load(&self) -> Option<Session> {
        let raw = document::eval(&format!(
            "return window.sessionStorage.getItem('{STORAGE_KEY}');"
        ))
        .join::<Option<String>>()
        .await
        .map_err(|e| tracing::error!(error = ?e, "Failed to read stored session"))
        .ok()
        .flatten()?;

        serde_json::from_str(&raw)
            .map_err(|e| tracing::error!(error = %e, "Discarding unreadable stored session"))
            .ok()
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        let payload = serde_json::to_string(session)
            .and_then(|json| serde_json::to_string(&json))
            .map_err(|e| AppError::internal(format!("Failed to encode session: {e}")))?;

        document::eval(&format!(
            "window.sessionStorage.setItem('{STORAGE_KEY}', {payload}); return true;"
        ))
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(|e| AppError::internal(format!("Failed to store session: {e:?}")))
    }

    async fn clear(&self) {
        if let Err(e) = document::eval(&format!(
            "window.sessionStorage.removeItem('{STORAGE_KEY}'); return true;"
        ))
        .join::<bool>()
        .await
        {
            tracing::error!(error = ?e, "Failed to clear stored session");
        }
    }
}
